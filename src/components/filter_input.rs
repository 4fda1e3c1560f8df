//! Filter Input
//!
//! Header-row text input that edits one field of a table filter.

use leptos::prelude::*;

/// Text filter cell. `on_change` receives the raw input value.
#[component]
pub fn FilterInput(
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
) -> impl IntoView {
    view! {
        <th class="filter-cell">
            <input
                class="filter-input"
                type=input_type.unwrap_or_else(|| "text".to_string())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </th>
    }
}

/// Callback that edits one filter field and resets paging to the first page
pub fn filter_edit<F>(filter: RwSignal<F>, page: RwSignal<usize>, apply: fn(&mut F, String)) -> Callback<String>
where
    F: Send + Sync + 'static,
{
    Callback::new(move |value: String| {
        filter.update(|f| apply(f, value));
        page.set(1);
    })
}

/// Current text of one filter field
pub fn filter_value<F>(filter: RwSignal<F>, read: fn(&F) -> String) -> Signal<String>
where
    F: Send + Sync + 'static,
{
    Signal::derive(move || filter.with(read))
}
