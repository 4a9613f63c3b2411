//! Entrance animations
//!
//! On mount the page sections fade in one after another, and every card is
//! handed to an `IntersectionObserver` that reveals it the first time it
//! scrolls into view.

use leptos::prelude::*;

/// Runs the entrance animations once the page is mounted
#[component]
pub fn EntranceAnimator() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            if let Some(body) = crate::ui::dom::document().and_then(|d| d.body()) {
                crate::ui::dom::set_class(&body, "loaded", true);
            }
            reveal_page_sections();
            observe_cards();
        });
    }

    view! {
        // This component doesn't render anything visible
        <div class="hidden" aria-hidden="true"></div>
    }
}

/// Hide each section, then reveal it after its staggered delay
#[cfg(not(feature = "ssr"))]
fn reveal_page_sections() {
    use gloo_timers::callback::Timeout;

    use crate::core::reveal::{PAGE_SECTIONS_SELECTOR, RevealStyle, stagger_delay_ms};
    use crate::ui::dom;

    for (index, section) in dom::query_all_html(PAGE_SECTIONS_SELECTOR)
        .into_iter()
        .enumerate()
    {
        dom::set_styles(&section, &RevealStyle::SECTION_HIDDEN.properties());
        Timeout::new(stagger_delay_ms(index), move || {
            dom::set_styles(&section, &RevealStyle::VISIBLE.properties());
        })
        .forget();
    }
}

/// Reveal cards the first time they intersect the viewport
#[cfg(not(feature = "ssr"))]
fn observe_cards() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::reveal::{
        CARD_REVEAL_THRESHOLD, CARD_ROOT_MARGIN, CARD_SELECTOR, REVEAL_KEY_ATTR, RevealStyle,
        RevealTracker,
    };
    use crate::ui::dom;

    let cards = dom::query_all_html(CARD_SELECTOR);
    if cards.is_empty() {
        return;
    }

    let mut tracker = RevealTracker::new();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let key = target.get_attribute(REVEAL_KEY_ATTR).unwrap_or_default();

                if tracker.observe(&key, entry.is_intersecting()) {
                    if let Some(card) = target.dyn_ref::<HtmlElement>() {
                        dom::set_styles(card, &RevealStyle::VISIBLE.properties());
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(CARD_REVEAL_THRESHOLD));
    options.set_root_margin(CARD_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                // Cards stay visible: they are only hidden once an observer exists
                leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e);
                return;
            }
        };

    for (index, card) in cards.iter().enumerate() {
        let _ = card.set_attribute(REVEAL_KEY_ATTR, &format!("card-{index}"));
        dom::set_styles(card, &RevealStyle::CARD_HIDDEN.properties());
        observer.observe(card);
    }

    // Keep the closure alive for the lifetime of the page
    callback.forget();
}

/// Lift a pricing card on pointer enter, settle it on pointer leave
pub fn apply_card_hover(ev: &leptos::ev::MouseEvent, featured: bool, hovered: bool) {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;

        use crate::core::card_hover_style;

        if let Some(card) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        {
            crate::ui::dom::set_styles(&card, &card_hover_style(featured, hovered).properties());
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (ev, featured, hovered);
    }
}
