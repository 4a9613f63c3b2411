//! Mobile menu controller
//!
//! Holds the canonical open/closed state as a signal and mirrors it onto
//! the menu list, the toggle button and the page body from one effect.
//! Outside clicks and the Escape key are handled by window listeners that
//! are registered with the controller and removed on cleanup.

use leptos::prelude::*;

use crate::core::MenuState;
use crate::ui::icon::{Icon, icons};

/// Mobile menu context
#[derive(Clone, Copy)]
pub struct MenuController {
    state: RwSignal<MenuState>,
}

impl MenuController {
    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    /// Current state without subscribing
    pub fn state_untracked(&self) -> MenuState {
        self.state.get_untracked()
    }

    /// Run a state transition that reports whether it changed anything
    pub fn apply(&self, transition: impl FnOnce(&mut MenuState) -> bool) {
        self.state.maybe_update(transition);
    }

    pub fn toggle(&self) {
        self.state.update(|s| {
            s.toggle();
        });
    }

    /// Force the menu closed; a no-op when it is already closed
    pub fn close(&self) {
        self.state.maybe_update(|s| s.close());
    }

    /// Apply every visual flag of `state` to its DOM target
    fn sync_visual_flags(state: MenuState) {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::ui::dom;

            for flag in state.visual_flags() {
                if let Some(element) = dom::query(flag.target.selector()) {
                    dom::set_class(&element, flag.class_name, flag.enabled);
                }
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = state;
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn handle_outside_click(menu: MenuController, ev: &web_sys::MouseEvent) {
    use crate::core::menu::should_close_on_outside_click;
    use crate::ui::dom;

    let inside_nav = dom::target_within(ev.target(), "nav");
    let state = menu.state_untracked();
    if should_close_on_outside_click(state, dom::viewport_width(), inside_nav) {
        menu.close();
    }
}

#[cfg(not(feature = "ssr"))]
fn handle_keydown(menu: MenuController, ev: &web_sys::KeyboardEvent) {
    use crate::core::menu::should_close_on_key;

    if should_close_on_key(menu.state_untracked(), &ev.key()) {
        menu.close();
    }
}

/// Create the menu controller, wire its listeners and provide it as context
pub fn provide_menu_context() -> MenuController {
    let menu = MenuController {
        state: RwSignal::new(MenuState::new()),
    };

    Effect::new(move |_| {
        MenuController::sync_visual_flags(menu.state.get());
    });

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{click, keydown};

        let click_handle = window_event_listener(click, move |ev| handle_outside_click(menu, &ev));
        let keydown_handle = window_event_listener(keydown, move |ev| handle_keydown(menu, &ev));

        on_cleanup(move || {
            click_handle.remove();
            keydown_handle.remove();
        });
    }

    provide_context(menu);
    menu
}

/// Use the menu controller from anywhere below the provider
pub fn use_menu_context() -> MenuController {
    use_context::<MenuController>().expect("MenuController should be provided")
}

/// Hamburger button toggling the mobile menu
#[component]
pub fn MenuToggle() -> impl IntoView {
    let menu = use_menu_context();

    view! {
        <button
            class="menu-toggle"
            type="button"
            aria-label="Toggle navigation menu"
            aria-expanded=move || menu.is_open().to_string()
            on:click=move |ev| {
                // Keep the window click listener from treating this as an outside click
                ev.stop_propagation();
                menu.toggle();
            }
        >
            {move || {
                if menu.is_open() {
                    view! { <Icon name=icons::X class="icon-lg" /> }
                } else {
                    view! { <Icon name=icons::MENU class="icon-lg" /> }
                }
            }}
        </button>
    }
}
