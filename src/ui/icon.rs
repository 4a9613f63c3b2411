use leptos::prelude::*;

/// Inline stroke icon
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path d=icons::path(name) />
        </svg>
    }
}

/// Icons used across the site
#[allow(dead_code)]
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ACADEMIC: &str = "academic";
    pub const CALENDAR: &str = "calendar";
    pub const CHART: &str = "chart";
    pub const USERS: &str = "users";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";

    /// SVG path data for an icon name; unknown names render a dot
    pub fn path(name: &str) -> &'static str {
        match name {
            MENU => "M4 6h16M4 12h16M4 18h16",
            X => "M6 18L18 6M6 6l12 12",
            CHECK => "M5 13l4 4L19 7",
            ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            CHEVRON_DOWN => "M19 9l-7 7-7-7",
            ACADEMIC => "M12 14l9-5-9-5-9 5 9 5zm0 0v6m-6-3.5l6 3.5 6-3.5",
            CALENDAR => "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
            CHART => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6h6zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0h6m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14h-6z",
            USERS => "M17 20h5v-2a3 3 0 00-5.356-1.857M9 20H4v-2a3 3 0 015.356-1.857M15 7a3 3 0 11-6 0 3 3 0 016 0z",
            MAIL => "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            PHONE => "M3 5a2 2 0 012-2h3.28a1 1 0 01.95.68l1.5 4.49a1 1 0 01-.5 1.21l-2.26 1.13a11 11 0 005.52 5.52l1.13-2.26a1 1 0 011.21-.5l4.49 1.5a1 1 0 01.68.95V19a2 2 0 01-2 2h-1C9.72 21 3 14.28 3 6V5z",
            _ => "M12 12h.01",
        }
    }
}
