//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server to answer with a 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found - EduLaunch" />
        <div class="not-found">
            <Icon name=icons::ACADEMIC class="not-found-icon" />

            // Error code
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>

            <A href="/" attr:class="btn btn-primary">
                "Back to EduLaunch"
            </A>
        </div>
        <style>
            r#"
            .not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; text-align: center; font-family: system-ui, sans-serif; color: #1f2937; padding: 1rem; }
            .not-found-icon { width: 4rem; height: 4rem; color: #2563eb; }
            .not-found h1 { font-size: 4rem; }
            .not-found p { color: #6b7280; max-width: 28rem; }
            .not-found .btn { padding: 0.75rem 1.5rem; border-radius: 0.5rem; background: #2563eb; color: #fff; text-decoration: none; font-weight: 600; }
            "#
        </style>
    }
}
