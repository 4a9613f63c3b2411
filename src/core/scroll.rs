//! Scroll position tracking
//!
//! Maps the scroll offset to the navbar style and to the section whose
//! vertical extent contains the reference point.

use super::config::InteractionConfig;

/// Scroll distance after which the navbar is styled as scrolled
pub const SCROLLED_THRESHOLD: f64 = InteractionConfig::DEFAULT.scrolled_threshold;

/// Offset added to the scroll position when probing sections
pub const ACTIVE_SECTION_OFFSET: f64 = InteractionConfig::DEFAULT.active_section_offset;

/// Minimum interval between two recomputations (ms)
pub const SCROLL_THROTTLE_MS: u32 = InteractionConfig::DEFAULT.scroll_throttle_ms;

/// Measured extent of a `section[id]` element
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open containment: `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Whether the navbar should carry the `scrolled` style
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Pick the active section for a scroll position.
///
/// Sections are tested in document order; when ranges overlap the last
/// matching section wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let reference = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .rev()
        .find(|section| section.contains(reference))
        .map(|section| section.id.as_str())
}

/// Exact match of a nav link href against the active section
pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(id), Some(active)) => id == active,
        _ => false,
    }
}

/// Result of one throttled recomputation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scrolled: bool,
    pub active_section: Option<String>,
}

impl ScrollSnapshot {
    pub fn compute(scroll_y: f64, sections: &[SectionBounds]) -> Self {
        Self {
            scrolled: is_scrolled(scroll_y),
            active_section: active_section(scroll_y, sections).map(str::to_string),
        }
    }
}

/// Pending-timer guard for scroll events.
///
/// While a recomputation is scheduled, further events are dropped rather
/// than queued.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollThrottle {
    pending: bool,
}

impl ScrollThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to schedule a recomputation. Returns `false` if one is pending.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled recomputation as done
    pub fn release(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 700.0),
            SectionBounds::new("about", 700.0, 500.0),
            SectionBounds::new("pricing", 1200.0, 800.0),
        ]
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }

    #[test]
    fn test_active_section_uses_reference_offset() {
        let sections = page();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        // 549 + 150 = 699, still inside home
        assert_eq!(active_section(549.0, &sections), Some("home"));
        assert_eq!(active_section(550.0, &sections), Some("about"));
        assert_eq!(active_section(1100.0, &sections), Some("pricing"));
    }

    #[test]
    fn test_no_section_past_the_end() {
        assert_eq!(active_section(5000.0, &page()), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn test_overlap_last_match_wins() {
        let sections = vec![
            SectionBounds::new("outer", 0.0, 2000.0),
            SectionBounds::new("inner", 400.0, 200.0),
        ];
        assert_eq!(active_section(300.0, &sections), Some("inner"));
        assert_eq!(active_section(900.0, &sections), Some("outer"));
    }

    #[test]
    fn test_link_matching_is_exact() {
        assert!(is_link_active("#about", Some("about")));
        assert!(!is_link_active("#about-us", Some("about")));
        assert!(!is_link_active("about", Some("about")));
        assert!(!is_link_active("#about", None));
    }

    #[test]
    fn test_at_most_one_link_active() {
        let links = ["#home", "#about", "#pricing", "#webinar"];
        let sections = page();
        for y in (0..2500).step_by(25) {
            let snapshot = ScrollSnapshot::compute(y as f64, &sections);
            let active = links
                .iter()
                .filter(|href| is_link_active(href, snapshot.active_section.as_deref()))
                .count();
            assert!(active <= 1, "{active} links active at {y}");
        }
    }

    #[test]
    fn test_throttle_drops_while_pending() {
        let mut throttle = ScrollThrottle::new();
        assert!(throttle.try_schedule());
        assert!(throttle.is_pending());
        assert!(!throttle.try_schedule());
        assert!(!throttle.try_schedule());

        throttle.release();
        assert!(!throttle.is_pending());
        assert!(throttle.try_schedule());
    }
}
