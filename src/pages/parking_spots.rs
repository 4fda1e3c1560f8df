//! Spots of the current parking, one level at a time

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::collections::{apply_park, apply_unpark, SpotAction};
use crate::components::{SpotActionModal, SpotChange, SpotsTable};
use crate::context::use_parking;
use crate::load::{LoadState, RequestSeq};
use crate::models::Spot;

#[component]
pub fn ParkingSpotsPage() -> impl IntoView {
    let ctx = use_parking();
    let level = RwSignal::new(0u32);
    let spots = RwSignal::new(LoadState::<Vec<Spot>>::Idle);
    let target = RwSignal::new(None::<(Spot, SpotAction)>);

    // Back to the ground floor when switching parking
    Effect::new(move |_| {
        let _ = ctx.parking_id.get();
        level.set(0);
    });

    let seq = RequestSeq::new();
    Effect::new(move |_| {
        let id = ctx.parking_id.get();
        let level = level.get();
        let ticket = seq.next();
        let seq = seq.clone();
        spots.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::list_spots(&id, level).await;
            if seq.is_current(ticket) {
                if let Err(err) = &result {
                    log::warn!("[Spots] Fetch {} level {} failed: {}", id, level, err);
                }
                spots.set(LoadState::from_result(result));
            }
        });
    });

    let on_done = Callback::new(move |change: SpotChange| {
        spots.update(|state| {
            let Some(list) = state.value_mut() else { return };
            match change {
                SpotChange::Parked { spot_id, car } => apply_park(list, &spot_id, car),
                SpotChange::Unparked { spot_id } => apply_unpark(list, &spot_id),
            };
        });
    });

    view! {
        <section class="parking-spots">
            <SpotsTable
                spots=spots
                level=level
                levels=Signal::derive(move || ctx.levels())
                on_action=Callback::new(move |pair| target.set(Some(pair)))
            />
            <SpotActionModal
                target=target
                parking_id=ctx.parking_id
                parking_name=Signal::derive(move || ctx.name())
                on_done=on_done
            />
        </section>
    }
}
