//! Text Field
//!
//! Labelled form input with an inline error message.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    /// Error for this field, if any
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <label class="form-field" class:has-error=move || error.with(|e| e.is_some())>
            <span class="form-label">{label}</span>
            <input
                class="form-input"
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder.unwrap_or_default()
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="form-error">{msg}</span> })}
        </label>
    }
}

/// Labelled select over `(value, label)` options
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Text of the empty first option
    #[prop(into)] prompt: String,
) -> impl IntoView {
    view! {
        <label class="form-field" class:has-error=move || error.with(|e| e.is_some())>
            <span class="form-label">{label}</span>
            <select
                class="form-input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">{prompt}</option>
                {move || options.get().into_iter().map(|(id, text)| {
                    let selected_id = id.clone();
                    view! {
                        <option value=id selected={move || value.with(|v| *v == selected_id)}>{text}</option>
                    }
                }).collect_view()}
            </select>
            {move || error.get().map(|msg| view! { <span class="form-error">{msg}</span> })}
        </label>
    }
}
