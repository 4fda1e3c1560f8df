//! Confirm Modal
//!
//! Title/body dialog with confirm and cancel actions.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    /// Label of the confirm button
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    /// Red confirm button for destructive actions
    #[prop(optional)] danger: bool,
    /// Disables both buttons while the action runs
    #[prop(optional, into)] busy: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);
    let confirm_label = StoredValue::new(confirm_label);
    let confirm_class = if danger { "btn btn-danger" } else { "btn btn-primary" };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal" role="dialog">
                    <h3 class="modal-title">{move || title.get()}</h3>
                    <div class="modal-body">{children.with_value(|children| children())}</div>
                    <div class="modal-actions">
                        <button
                            class="btn"
                            disabled=move || busy.get()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cancel.run(());
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            class=confirm_class
                            disabled=move || busy.get()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            {move || if busy.get() { "Working...".to_string() } else { confirm_label.get_value() }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
