//! Click eligibility policy
//!
//! A host-neutral description of an anchor activation. The embedding glue
//! fills one in from the real DOM event before calling
//! [`crate::Interceptor::visit_click`]; router adapters reuse the same
//! predicate so both sides agree on what gets intercepted.

use url::Url;

use intralink_url::normalize;

/// Description of a single anchor click.
#[derive(Debug, Clone, Default)]
pub struct LinkClick {
    /// Raw `href` attribute, if the anchor has one
    pub href: Option<String>,
    /// `target` attribute
    pub target: Option<String>,
    /// Anchor declares a `download` attribute
    pub has_download: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    /// Another handler already prevented the default action
    pub default_prevented: bool,
}

impl LinkClick {
    /// A plain unmodified left-click on `href`.
    pub fn plain(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    fn has_modifier(&self) -> bool {
        self.ctrl_key || self.meta_key || self.shift_key || self.alt_key
    }

    fn opens_new_context(&self) -> bool {
        matches!(self.target.as_deref(), Some("_blank"))
    }

    fn is_plain_activation(&self) -> bool {
        !self.has_modifier()
            && !self.opens_new_context()
            && !self.has_download
            && !self.default_prevented
    }

    /// Whether this click may be hijacked away from default navigation.
    ///
    /// Requires an anchor with an `href` that resolves against `base` to
    /// the page's own origin, no modifier keys, no `target="_blank"`, no
    /// `download` attribute, and a default action nobody prevented yet.
    /// External and malformed targets fail the predicate, so glue that
    /// prevents the default action only for interceptable clicks never
    /// strands the user on an external link.
    pub fn is_interceptable(&self, base: &Url) -> bool {
        if !self.is_plain_activation() {
            return false;
        }

        match self.href.as_deref() {
            Some(href) => matches!(normalize(href, base), Ok(target) if target.is_internal),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://x.test/a").unwrap()
    }

    #[test]
    fn test_plain_internal_click_is_interceptable() {
        assert!(LinkClick::plain("/b").is_interceptable(&base()));
        assert!(LinkClick::plain("https://x.test/c").is_interceptable(&base()));
    }

    #[test]
    fn test_external_href_is_not() {
        assert!(!LinkClick::plain("https://other.test/c").is_interceptable(&base()));
        assert!(!LinkClick::plain("mailto:hi@x.test").is_interceptable(&base()));
    }

    #[test]
    fn test_malformed_href_is_not() {
        assert!(!LinkClick::plain("https://[").is_interceptable(&base()));
        assert!(!LinkClick::plain("").is_interceptable(&base()));
    }

    #[test]
    fn test_missing_href_is_not() {
        assert!(!LinkClick::default().is_interceptable(&base()));
    }

    #[test]
    fn test_modifier_keys_are_not() {
        for field in 0..4 {
            let mut click = LinkClick::plain("/b");
            match field {
                0 => click.ctrl_key = true,
                1 => click.meta_key = true,
                2 => click.shift_key = true,
                _ => click.alt_key = true,
            }
            assert!(!click.is_interceptable(&base()));
        }
    }

    #[test]
    fn test_new_tab_and_download_are_not() {
        let mut click = LinkClick::plain("/b");
        click.target = Some("_blank".to_string());
        assert!(!click.is_interceptable(&base()));

        let mut click = LinkClick::plain("/b");
        click.has_download = true;
        assert!(!click.is_interceptable(&base()));
    }

    #[test]
    fn test_named_target_is_still_interceptable() {
        let mut click = LinkClick::plain("/b");
        click.target = Some("_self".to_string());
        assert!(click.is_interceptable(&base()));
    }

    #[test]
    fn test_already_prevented_is_not() {
        let mut click = LinkClick::plain("/b");
        click.default_prevented = true;
        assert!(!click.is_interceptable(&base()));
    }
}
