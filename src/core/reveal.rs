//! Entrance animations and card hover styles

use std::collections::HashSet;

use super::config::InteractionConfig;

/// Section elements revealed one after another on page load
pub const PAGE_SECTIONS_SELECTOR: &str = ".hero, .about, .services, .pricing, .webinar, .contact";

/// Cards revealed the first time they scroll into view
pub const CARD_SELECTOR: &str = ".service-card, .pricing-card";

/// Data attribute carrying the key `RevealTracker` records for a card
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Delay before the first section reveal (ms)
pub const REVEAL_BASE_DELAY_MS: u32 = InteractionConfig::DEFAULT.reveal_base_delay_ms;

/// Extra delay per following section (ms)
pub const REVEAL_STEP_MS: u32 = InteractionConfig::DEFAULT.reveal_step_ms;

/// Visible fraction of a card that triggers the reveal
pub const CARD_REVEAL_THRESHOLD: f64 = InteractionConfig::DEFAULT.reveal_threshold;

/// Observer root margin; cards reveal slightly after they cross the fold
pub const CARD_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Inline style values for one animation state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
    pub transition: Option<&'static str>,
}

impl RevealStyle {
    /// Initial state of a page section
    pub const SECTION_HIDDEN: RevealStyle = RevealStyle {
        opacity: "0",
        transform: "translateY(20px)",
        transition: Some("opacity 0.5s ease, transform 0.5s ease"),
    };

    /// Initial state of a card
    pub const CARD_HIDDEN: RevealStyle = RevealStyle {
        opacity: "0",
        transform: "translateY(30px)",
        transition: Some("opacity 0.6s ease, transform 0.6s ease"),
    };

    /// Final state shared by sections and cards
    pub const VISIBLE: RevealStyle = RevealStyle {
        opacity: "1",
        transform: "translateY(0)",
        transition: None,
    };

    /// `(property, value)` pairs to set on the element
    pub fn properties(&self) -> Vec<(&'static str, &'static str)> {
        let mut props = vec![("opacity", self.opacity), ("transform", self.transform)];
        if let Some(transition) = self.transition {
            props.push(("transition", transition));
        }
        props
    }
}

/// Delay before the section at `index` is revealed
pub fn stagger_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    REVEAL_BASE_DELAY_MS.saturating_add(index.saturating_mul(REVEAL_STEP_MS))
}

/// Remembers which cards have been revealed.
///
/// A revealed card stays revealed; later intersection changes are ignored.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an intersection change for `key`.
    ///
    /// Returns `true` exactly once per key: the first time it intersects.
    pub fn observe(&mut self, key: &str, is_intersecting: bool) -> bool {
        if !is_intersecting || self.revealed.contains(key) {
            return false;
        }
        self.revealed.insert(key.to_string());
        true
    }
}

/// Inline transform and shadow for a pricing card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardHoverStyle {
    pub transform: &'static str,
    pub box_shadow: Option<&'static str>,
}

impl CardHoverStyle {
    /// `(property, value)` pairs to set on the card
    pub fn properties(&self) -> Vec<(&'static str, &'static str)> {
        let mut props = vec![("transform", self.transform)];
        if let Some(shadow) = self.box_shadow {
            props.push(("box-shadow", shadow));
        }
        props
    }
}

/// Hover style of a pricing card.
///
/// A featured card keeps its current shadow when the pointer leaves and
/// settles at its enlarged scale.
pub fn card_hover_style(featured: bool, hovered: bool) -> CardHoverStyle {
    match (hovered, featured) {
        (true, _) => CardHoverStyle {
            transform: "translateY(-10px)",
            box_shadow: Some("0 20px 40px rgba(37, 99, 235, 0.15)"),
        },
        (false, true) => CardHoverStyle {
            transform: "scale(1.05)",
            box_shadow: None,
        },
        (false, false) => CardHoverStyle {
            transform: "translateY(0)",
            box_shadow: Some("0 10px 25px rgba(0, 0, 0, 0.08)"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delay_ms(0), 300);
        assert_eq!(stagger_delay_ms(1), 400);
        assert_eq!(stagger_delay_ms(5), 800);
    }

    #[test]
    fn test_stagger_saturates() {
        assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_style_properties() {
        let hidden = RevealStyle::SECTION_HIDDEN.properties();
        assert_eq!(hidden.len(), 3);
        assert_eq!(hidden[0], ("opacity", "0"));
        assert_eq!(hidden[1], ("transform", "translateY(20px)"));

        let visible = RevealStyle::VISIBLE.properties();
        assert_eq!(visible, vec![("opacity", "1"), ("transform", "translateY(0)")]);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker = RevealTracker::new();

        assert!(!tracker.observe("card-0", false));
        assert!(tracker.observe("card-0", true));

        // Scrolling out and back in does not re-trigger
        assert!(!tracker.observe("card-0", false));
        assert!(!tracker.observe("card-0", true));

        assert!(tracker.observe("card-1", true));
        assert!(!tracker.observe("card-1", true));
    }

    #[test]
    fn test_card_hover_styles() {
        let enter = card_hover_style(false, true);
        assert_eq!(enter.transform, "translateY(-10px)");
        assert_eq!(card_hover_style(true, true), enter);

        let leave = card_hover_style(false, false);
        assert_eq!(
            leave.properties(),
            vec![
                ("transform", "translateY(0)"),
                ("box-shadow", "0 10px 25px rgba(0, 0, 0, 0.08)")
            ]
        );

        let featured_leave = card_hover_style(true, false);
        assert_eq!(featured_leave.box_shadow, None);
        assert_eq!(featured_leave.properties(), vec![("transform", "scale(1.05)")]);
    }
}
