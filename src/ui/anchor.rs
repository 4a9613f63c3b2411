//! Smooth-scroll navigation for in-page links

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::ui::menu::{MenuController, use_menu_context};
use crate::ui::scroll_tracker::use_scroll_tracker;

/// Handle activation of a link pointing at `href`.
///
/// Fragment links never trigger the native jump. When the target exists the
/// menu is closed, the window scrolls smoothly to just below the fixed
/// header and the fragment is pushed onto history. Missing targets are
/// left alone.
pub fn navigate_to_anchor(ev: &MouseEvent, href: &str, menu: MenuController) {
    if !href.starts_with('#') {
        return;
    }
    ev.prevent_default();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::{AnchorAction, resolve_anchor};
        use crate::ui::dom;

        let action = resolve_anchor(href, dom::header_height(), menu.state_untracked(), |id| {
            dom::element_by_id(id).map(|element| dom::document_top(&element))
        });
        menu.apply(|state| action.apply_to_menu(state));

        if let AnchorAction::ScrollTo { top, fragment, .. } = &action {
            scroll_window_to(*top);
            push_fragment(fragment);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = menu;
    }
}

#[cfg(not(feature = "ssr"))]
fn scroll_window_to(top: f64) {
    let Some(window) = crate::ui::dom::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(feature = "ssr"))]
fn push_fragment(fragment: &str) {
    let Some(history) = crate::ui::dom::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(fragment)) {
        leptos::logging::warn!("Failed to push {} onto history: {:?}", fragment, e);
    }
}

/// In-page link with smooth scrolling
#[component]
pub fn AnchorLink(
    /// Fragment target, e.g. `#pricing`
    href: &'static str,
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let menu = use_menu_context();

    view! {
        <a href=href class=class on:click=move |ev| navigate_to_anchor(&ev, href, menu)>
            {children()}
        </a>
    }
}

/// Navbar link: closes the mobile menu and tracks the active section
#[component]
pub fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let menu = use_menu_context();
    let tracker = use_scroll_tracker();

    let on_click = move |ev: MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::menu::should_close_on_link_click;

            if should_close_on_link_click(crate::ui::dom::viewport_width()) {
                menu.close();
            }
        }
        navigate_to_anchor(&ev, href, menu);
    };

    view! {
        <li>
            <a
                href=href
                class="nav-link"
                class:active=move || tracker.is_link_active(href)
                on:click=on_click
            >
                {label}
            </a>
        </li>
    }
}
