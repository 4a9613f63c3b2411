//! Scroll-driven navbar styling and active-link highlighting

use leptos::prelude::*;

use crate::core::scroll::{ScrollSnapshot, ScrollThrottle, is_link_active};

/// Scroll tracker context
#[derive(Clone, Copy)]
pub struct ScrollTracker {
    /// Navbar carries the `scrolled` style
    pub scrolled: RwSignal<bool>,
    /// Id of the section containing the reference point
    pub active_section: RwSignal<Option<String>>,
    throttle: StoredValue<ScrollThrottle>,
}

impl ScrollTracker {
    pub fn is_link_active(&self, href: &str) -> bool {
        self.active_section
            .with(|active| is_link_active(href, active.as_deref()))
    }

    /// Publish a snapshot, notifying only the signals that changed
    pub fn apply(&self, snapshot: ScrollSnapshot) {
        if self.scrolled.get_untracked() != snapshot.scrolled {
            self.scrolled.set(snapshot.scrolled);
        }
        if self.active_section.with_untracked(|a| *a != snapshot.active_section) {
            self.active_section.set(snapshot.active_section);
        }
    }

    /// Measure the page and recompute immediately
    pub fn refresh(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::ui::dom;
            self.apply(ScrollSnapshot::compute(dom::scroll_y(), &dom::section_bounds()));
        }
    }

    /// Scroll event: schedule a refresh unless one is already pending
    #[cfg(not(feature = "ssr"))]
    fn on_scroll(&self) {
        use crate::core::scroll::SCROLL_THROTTLE_MS;
        use gloo_timers::callback::Timeout;

        let mut scheduled = false;
        self.throttle.update_value(|t| scheduled = t.try_schedule());
        if !scheduled {
            return;
        }

        let tracker = *self;
        Timeout::new(SCROLL_THROTTLE_MS, move || {
            tracker.refresh();
            tracker.throttle.update_value(|t| t.release());
        })
        .forget();
    }
}

/// Create the scroll tracker, run it once and listen for scroll events
pub fn provide_scroll_tracker() -> ScrollTracker {
    let tracker = ScrollTracker {
        scrolled: RwSignal::new(false),
        active_section: RwSignal::new(None),
        throttle: StoredValue::new(ScrollThrottle::new()),
    };

    // Initial state before any scroll happens
    Effect::new(move |_| tracker.refresh());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle = window_event_listener(scroll, move |_| tracker.on_scroll());
        on_cleanup(move || handle.remove());
    }

    provide_context(tracker);
    tracker
}

pub fn use_scroll_tracker() -> ScrollTracker {
    use_context::<ScrollTracker>().expect("ScrollTracker should be provided")
}
