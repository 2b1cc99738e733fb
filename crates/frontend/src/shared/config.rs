//! Deployment-time configuration.
//!
//! Both endpoints are fixed per deployment, not derived at runtime: the
//! base origin of the headless CMS and the form-relay destination. They
//! can be overridden at build time through environment variables.

/// Base origin of the CMS serving blog content.
pub fn cms_base() -> &'static str {
    option_env!("SETAL_CMS_URL").unwrap_or("https://blog.setal.app")
}

/// Endpoint of the form-relay channel receiving questionnaire and support
/// submissions.
pub fn relay_endpoint() -> String {
    let form_id = option_env!("SETAL_RELAY_FORM_ID").unwrap_or("xsetalsn");
    format!("https://formspree.io/f/{form_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cms_base_has_no_trailing_slash() {
        assert!(!cms_base().ends_with('/'));
    }

    #[test]
    fn relay_endpoint_targets_the_relay_service() {
        assert!(relay_endpoint().starts_with("https://formspree.io/f/"));
    }
}
