//! Browser-side components
//!
//! Each component reads its decisions from `crate::core` and applies them
//! to the DOM. DOM access is compiled only into the hydrate build.

pub mod anchor;
pub mod common;
pub mod contact_form;
#[cfg(not(feature = "ssr"))]
mod dom;
pub mod feedback;
pub mod icon;
pub mod menu;
pub mod pages;
pub mod reveal;
pub mod scroll_tracker;
pub mod submission;
#[cfg(not(feature = "ssr"))]
pub mod transport;
pub mod webinar_form;

pub use icon::{Icon, icons};
pub use menu::{MenuController, provide_menu_context, use_menu_context};
pub use scroll_tracker::{ScrollTracker, provide_scroll_tracker, use_scroll_tracker};
