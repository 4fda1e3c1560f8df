//! Drawer
//!
//! Side panel hosting creation forms and detail views.

use leptos::prelude::*;

use crate::api::ApiError;
use crate::components::Toaster;
use crate::feedback::{resolve_failure, Action, DrawerOutcome};
use crate::validation::FormErrors;

#[component]
pub fn Drawer(
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let title = StoredValue::new(title);

    view! {
        <Show when=move || open.get()>
            <div class="drawer-backdrop" on:click=move |_| on_close.run(())></div>
            <aside class="drawer">
                <header class="drawer-header">
                    <h2>{title.get_value()}</h2>
                    <button class="drawer-close" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <div class="drawer-body">{children.with_value(|children| children())}</div>
            </aside>
        </Show>
    }
}

// ========================
// Form Helpers
// ========================

/// Current error for `field`
pub fn field_error(errors: RwSignal<FormErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
}

/// Route a failed create to a field error or an error toast; the drawer stays open
pub fn report_failure(
    action: Action,
    err: &ApiError,
    errors: RwSignal<FormErrors>,
    toaster: Toaster,
    submitted: impl Fn(&str) -> String,
) {
    log::warn!("[Drawer] {:?} failed: {}", action, err);
    match resolve_failure(action, err, submitted) {
        DrawerOutcome::FieldError { field, message } => errors.update(|e| e.set(field, message)),
        DrawerOutcome::Toast(notice) => toaster.error(notice),
    }
}

/// Form submit button with a loading state
#[component]
pub fn SubmitButton(#[prop(into)] label: String, #[prop(into)] pending: Signal<bool>) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
            {move || if pending.get() { "Saving...".to_string() } else { label.clone() }}
        </button>
    }
}
