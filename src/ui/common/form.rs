//! Labelled inputs bound to string signals

use leptos::prelude::*;

/// Text input with label
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// `name` attribute, also the input id unless `id` is given
    name: &'static str,
    #[prop(optional)]
    id: Option<&'static str>,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Bound value
    value: RwSignal<String>,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = id.unwrap_or(name);

    view! {
        <div class="form-group">
            <label for=id>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <input
                id=id
                name=name
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Text area with label
#[component]
pub fn TextAreaField(
    label: &'static str,
    name: &'static str,
    #[prop(optional)]
    id: Option<&'static str>,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    value: RwSignal<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    let id = id.unwrap_or(name);

    view! {
        <div class="form-group">
            <label for=id>
                {label}
                {required.then(|| view! { <span class="required">"*"</span> })}
            </label>
            <textarea
                id=id
                name=name
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Select with label
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <select
                id=name
                name=name
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
