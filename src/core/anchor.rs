//! In-page anchor navigation

use super::config::InteractionConfig;
use super::menu::MenuState;

/// Space left between the fixed header and the scrolled-to element
pub const ANCHOR_MARGIN: f64 = InteractionConfig::DEFAULT.anchor_margin;

/// Extract the element id from an in-page link.
///
/// Returns `None` for placeholder links (`#` or empty) and for hrefs that
/// are not fragment identifiers.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Vertical scroll offset that brings an element just below the fixed header
pub fn scroll_target(element_top: f64, header_height: f64) -> f64 {
    (element_top - header_height - ANCHOR_MARGIN).max(0.0)
}

/// What a link activation should do once the target lookup is done
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorAction {
    /// Not an in-page link; leave the browser alone
    Ignore,
    /// Fragment link whose target does not exist
    Missing,
    /// Scroll to `top`, push `fragment` onto history and close the menu
    /// first when `close_menu` is set
    ScrollTo {
        top: f64,
        fragment: String,
        close_menu: bool,
    },
}

impl AnchorAction {
    /// Apply the menu side of the action. Returns whether the menu closed.
    pub fn apply_to_menu(&self, menu: &mut MenuState) -> bool {
        match self {
            AnchorAction::ScrollTo {
                close_menu: true, ..
            } => menu.close(),
            _ => false,
        }
    }
}

/// Resolve an activated link.
///
/// `element_top` looks up the document-relative top of the element with
/// the given id, returning `None` when no such element exists. Only a
/// resolved target closes an open menu.
pub fn resolve_anchor(
    href: &str,
    header_height: f64,
    menu: MenuState,
    element_top: impl FnOnce(&str) -> Option<f64>,
) -> AnchorAction {
    let Some(id) = fragment_target(href) else {
        return AnchorAction::Ignore;
    };

    match element_top(id) {
        Some(top) => AnchorAction::ScrollTo {
            top: scroll_target(top, header_height),
            fragment: format!("#{id}"),
            close_menu: menu.is_open(),
        },
        None => AnchorAction::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#pricing"), Some("pricing"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/login"), None);
        assert_eq!(fragment_target("https://example.com/#top"), None);
    }

    #[test]
    fn test_scroll_target_compensates_header() {
        assert_eq!(scroll_target(900.0, 80.0), 800.0);
        assert_eq!(scroll_target(100.0, 64.0), 16.0);
    }

    #[test]
    fn test_scroll_target_never_negative() {
        assert_eq!(scroll_target(30.0, 80.0), 0.0);
    }

    #[test]
    fn test_resolve_existing_target() {
        let action = resolve_anchor("#section2", 80.0, MenuState::new(), |id| {
            assert_eq!(id, "section2");
            Some(900.0)
        });
        assert_eq!(
            action,
            AnchorAction::ScrollTo {
                top: 800.0,
                fragment: "#section2".to_string(),
                close_menu: false,
            }
        );
    }

    #[test]
    fn test_resolve_missing_target() {
        assert_eq!(
            resolve_anchor("#missing", 80.0, MenuState::new(), |_| None),
            AnchorAction::Missing
        );
    }

    #[test]
    fn test_placeholder_never_looks_up() {
        let action = resolve_anchor("#", 80.0, MenuState::new(), |_| panic!("lookup must not run"));
        assert_eq!(action, AnchorAction::Ignore);
    }

    #[test]
    fn test_only_resolved_targets_close_the_menu() {
        let mut open = MenuState::new();
        open.toggle();

        let missing = resolve_anchor("#missing", 80.0, open, |_| None);
        assert!(!missing.apply_to_menu(&mut open));
        assert!(open.is_open());

        let ignored = resolve_anchor("/login", 80.0, open, |_| Some(0.0));
        assert!(!ignored.apply_to_menu(&mut open));
        assert!(open.is_open());

        let found = resolve_anchor("#pricing", 80.0, open, |_| Some(2400.0));
        assert!(matches!(found, AnchorAction::ScrollTo { close_menu: true, .. }));
        assert!(found.apply_to_menu(&mut open));
        assert!(!open.is_open());
    }
}
