//! Spot Action Modal
//!
//! Confirms parking a car on a free spot, or removing the car from a taken
//! one. The caller patches its spot list through `on_done`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::collections::SpotAction;
use crate::components::{use_toaster, ConfirmModal};
use crate::feedback::{describe, Action};
use crate::models::Spot;

/// Outcome of a confirmed action
#[derive(Debug, Clone, PartialEq)]
pub enum SpotChange {
    Parked { spot_id: String, car: String },
    Unparked { spot_id: String },
}

#[component]
pub fn SpotActionModal(
    /// Spot being acted on; `None` closes the modal
    target: RwSignal<Option<(Spot, SpotAction)>>,
    #[prop(into)] parking_id: Signal<String>,
    #[prop(into)] parking_name: Signal<String>,
    #[prop(into)] on_done: Callback<SpotChange>,
) -> impl IntoView {
    let toaster = use_toaster();
    let plate = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let open = Signal::derive(move || target.with(Option::is_some));
    let action = move || target.with(|t| t.as_ref().map(|(_, a)| *a));
    let title = Signal::derive(move || action().map(SpotAction::label).unwrap_or_default().to_string());
    let spot_tag = move || target.with(|t| t.as_ref().map(|(s, _)| s.tag.clone()).unwrap_or_default());

    let close = move || {
        plate.set(String::new());
        target.set(None);
    };

    let confirm = move |_| {
        let Some((spot, action)) = target.get_untracked() else { return };
        let parking_id = parking_id.get_untracked();
        let license_plate = plate.get_untracked();
        busy.set(true);

        spawn_local(async move {
            let (kind, result) = match action {
                SpotAction::Park => {
                    let parked = api::park(&parking_id, &spot.id, &license_plate).await;
                    (
                        Action::Park,
                        parked.map(|car| SpotChange::Parked { spot_id: spot.id.clone(), car: car.license_plate }),
                    )
                }
                SpotAction::Unpark => {
                    let freed = api::unpark(&parking_id, &spot.id).await;
                    (Action::Unpark, freed.map(|_| SpotChange::Unparked { spot_id: spot.id.clone() }))
                }
            };
            busy.set(false);
            match result {
                Ok(change) => {
                    log::info!("[Spot] {:?} on {}", change, spot.tag);
                    toaster.success(action.label(), format!("Spot {} updated", spot.tag));
                    on_done.run(change);
                    close();
                }
                Err(err) => {
                    log::warn!("[Spot] {:?} on {} failed: {}", kind, spot.tag, err);
                    toaster.error(describe(kind, &err));
                }
            }
        });
    };

    view! {
        <ConfirmModal
            open=open
            title=title
            confirm_label="Confirm"
            busy=busy
            on_confirm=Callback::new(confirm)
            on_cancel=Callback::new(move |_| close())
        >
            <label class="form-field">
                <span class="form-label">"Parking"</span>
                <input class="form-input" readonly=true prop:value=move || parking_name.get() />
            </label>
            <label class="form-field">
                <span class="form-label">"Spot"</span>
                <input class="form-input" readonly=true prop:value=spot_tag />
            </label>
            <Show when=move || action() == Some(SpotAction::Park)>
                <label class="form-field">
                    <span class="form-label">"License plate"</span>
                    <input
                        class="form-input"
                        placeholder="AA123AA"
                        prop:value=move || plate.get()
                        on:input=move |ev| plate.set(event_target_value(&ev))
                    />
                </label>
            </Show>
        </ConfirmModal>
    }
}
