use leptos::prelude::*;

/// Small spinner sized to sit inside a button
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! {
        <span class="spinner-inline" role="status" aria-label="Loading"></span>
    }
}

/// Submit button that swaps its label for a spinner while busy
#[component]
pub fn SubmitButton(
    /// Whether the form is busy
    #[prop(into)]
    loading: Signal<bool>,
    /// Label shown next to the spinner or on its own
    #[prop(into)]
    label: Signal<&'static str>,
    #[prop(default = "btn btn-primary btn-block")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <button type="submit" class=class disabled=move || loading.get() aria-busy=move || loading.get().to_string()>
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{move || label.get()}</span> }
            >
                <InlineSpinner />
                <span>{move || label.get()}</span>
            </Show>
        </button>
    }
}
