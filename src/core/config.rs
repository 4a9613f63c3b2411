//! Site configuration.
//!
//! Interaction constants shared by the browser-side components live in
//! [`InteractionConfig`]. Server runtime settings are loaded from environment
//! variables with `Config::from_env()` after calling `dotenvy::dotenv()`.

use serde::{Deserialize, Serialize};

/// Form action used when `FORM_ENDPOINT` is not set
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/edulaunch-webinar";

/// Contact address used when `CONTACT_EMAIL` is not set
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@edulaunch.app";

/// Tunables for the browser-side interaction logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Widths at or below this count as mobile (logical pixels)
    pub mobile_breakpoint: f64,
    /// Extra space left above an anchor target after scrolling
    pub anchor_margin: f64,
    /// Reference offset added to the scroll position when picking the active section
    pub active_section_offset: f64,
    /// Scroll distance after which the navbar gets the `scrolled` class
    pub scrolled_threshold: f64,
    /// Minimum gap between two scroll recomputations
    pub scroll_throttle_ms: u32,
    /// How long a feedback message stays fully visible
    pub feedback_display_ms: u32,
    /// Fade-out transition before the feedback message is removed
    pub feedback_fade_ms: u32,
    /// Delay before the first section reveal on page load
    pub reveal_base_delay_ms: u32,
    /// Additional delay for each following section
    pub reveal_step_ms: u32,
    /// Visible fraction of a card that triggers its reveal
    pub reveal_threshold: f64,
}

impl InteractionConfig {
    /// Values used across the page; the per-module constants read from here
    pub const DEFAULT: InteractionConfig = InteractionConfig {
        mobile_breakpoint: 768.0,
        anchor_margin: 20.0,
        active_section_offset: 150.0,
        scrolled_threshold: 100.0,
        scroll_throttle_ms: 100,
        feedback_display_ms: 5000,
        feedback_fade_ms: 300,
        reveal_base_delay_ms: 300,
        reveal_step_ms: 100,
        reveal_threshold: 0.2,
    };
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings rendered into the page, provided as context during SSR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Action URL of the webinar form
    pub form_endpoint: String,
    /// Address shown in the contact section
    pub contact_email: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Third-party endpoint receiving webinar registrations
    /// Example: https://formspree.io/f/abcdwxyz
    pub form_endpoint: Option<String>,

    /// Public contact address
    pub contact_email: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            form_endpoint: non_empty(std::env::var("FORM_ENDPOINT").ok()),
            contact_email: non_empty(std::env::var("CONTACT_EMAIL").ok()),
        }
    }

    /// Check if a custom form endpoint is configured
    pub fn has_form_endpoint(&self) -> bool {
        self.form_endpoint.is_some()
    }

    /// Check if a custom contact address is configured
    pub fn has_contact_email(&self) -> bool {
        self.contact_email.is_some()
    }

    /// Resolve the settings rendered into the page
    pub fn site_settings(&self) -> SiteSettings {
        let defaults = SiteSettings::default();
        SiteSettings {
            form_endpoint: self
                .form_endpoint
                .clone()
                .unwrap_or(defaults.form_endpoint),
            contact_email: self
                .contact_email
                .clone()
                .unwrap_or(defaults.contact_email),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_site_settings_from_full_config() {
        let config = Config {
            form_endpoint: Some("https://forms.example.com/f/abc".to_string()),
            contact_email: Some("team@example.com".to_string()),
        };

        let settings = config.site_settings();
        assert_eq!(settings.form_endpoint, "https://forms.example.com/f/abc");
        assert_eq!(settings.contact_email, "team@example.com");
        assert!(config.has_form_endpoint());
        assert!(config.has_contact_email());
    }

    #[test]
    fn test_site_settings_fall_back_to_defaults() {
        let config = Config {
            form_endpoint: None,
            contact_email: None,
        };

        assert_eq!(config.site_settings(), SiteSettings::default());
        assert!(!config.has_form_endpoint());
    }

    #[test]
    fn test_partial_config() {
        let config = Config {
            form_endpoint: None,
            contact_email: Some("info@school.org".to_string()),
        };

        let settings = config.site_settings();
        assert_eq!(settings.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(settings.contact_email, "info@school.org");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(
            non_empty(Some(" https://a.b/c ".to_string())),
            Some("https://a.b/c".to_string())
        );
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_interaction_defaults() {
        let config = InteractionConfig::default();
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.anchor_margin, 20.0);
        assert_eq!(config.active_section_offset, 150.0);
        assert_eq!(config.scrolled_threshold, 100.0);
        assert_eq!(config.scroll_throttle_ms, 100);
        assert_eq!(config.feedback_display_ms + config.feedback_fade_ms, 5300);
    }

    #[test]
    fn test_module_constants_follow_interaction_config() {
        let config = InteractionConfig::DEFAULT;
        assert_eq!(crate::core::menu::MOBILE_BREAKPOINT, config.mobile_breakpoint);
        assert_eq!(crate::core::anchor::ANCHOR_MARGIN, config.anchor_margin);
        assert_eq!(crate::core::scroll::ACTIVE_SECTION_OFFSET, config.active_section_offset);
        assert_eq!(crate::core::scroll::SCROLLED_THRESHOLD, config.scrolled_threshold);
        assert_eq!(crate::core::scroll::SCROLL_THROTTLE_MS, config.scroll_throttle_ms);
        assert_eq!(crate::core::form::FEEDBACK_DISPLAY_MS, config.feedback_display_ms);
        assert_eq!(crate::core::form::FEEDBACK_FADE_MS, config.feedback_fade_ms);
        assert_eq!(crate::core::reveal::REVEAL_BASE_DELAY_MS, config.reveal_base_delay_ms);
        assert_eq!(crate::core::reveal::REVEAL_STEP_MS, config.reveal_step_ms);
        assert_eq!(crate::core::reveal::CARD_REVEAL_THRESHOLD, config.reveal_threshold);
    }
}
