//! Parking Layout
//!
//! Shell of every `/parkings/:id/*` page: fetches the parking, provides it
//! to the child page and hosts the delete action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api;
use crate::components::{use_toaster, ConfirmModal};
use crate::context::ParkingContext;
use crate::feedback::{describe, Action};
use crate::load::{LoadState, RequestSeq};
use crate::store::{store_remove_parking, use_app_store};

#[component]
pub fn ParkingLayout() -> impl IntoView {
    let store = use_app_store();
    let toaster = use_toaster();
    let params = use_params_map();
    let parking_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let ctx = ParkingContext::new(parking_id);
    provide_context(ctx);

    let seq = RequestSeq::new();
    Effect::new(move |_| {
        let id = parking_id.get();
        let ticket = seq.next();
        let seq = seq.clone();
        ctx.parking.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_parking(&id).await;
            if seq.is_current(ticket) {
                if let Err(err) = &result {
                    log::warn!("[Parking] Fetch {} failed: {}", id, err);
                }
                ctx.parking.set(LoadState::from_result(result));
            }
        });
    });

    let confirming = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    let navigate = use_navigate();
    Effect::new(move |_| {
        if deleted.get() {
            navigate("/", Default::default());
        }
    });

    let delete = move |_| {
        let id = parking_id.get_untracked();
        confirming.set(false);
        deleting.set(true);
        spawn_local(async move {
            let result = api::delete_parking(&id).await;
            deleting.set(false);
            match result {
                Ok(()) => {
                    log::info!("[Parking] Deleted {}", id);
                    toaster.success("Parking deleted", "The parking was deleted");
                    store_remove_parking(&store, &id);
                    deleted.set(true);
                }
                Err(err) => {
                    log::warn!("[Parking] Delete {} failed: {}", id, err);
                    toaster.error(describe(Action::DeleteParking, &err));
                }
            }
        });
    };

    let base = move || format!("/parkings/{}", parking_id.get());

    view! {
        <div class="parking-layout">
            <nav class="parking-navbar">
                <A href="/">"← Parkings"</A>
                <h1 class="parking-name">{move || ctx.name()}</h1>
                <ul class="parking-nav">
                    <li><A href=base exact=true>"Spots"</A></li>
                    <li><A href=move || format!("{}/subscriptions", base())>"Subscriptions"</A></li>
                    <li><A href=move || format!("{}/statistics", base())>"Statistics"</A></li>
                </ul>
                <button class="btn btn-danger" on:click=move |_| confirming.set(true)>"Delete parking"</button>
            </nav>

            <main class="parking-content">
                <Outlet />
            </main>

            <ConfirmModal
                open=confirming
                title=Signal::derive(move || format!("Delete {}?", ctx.name()))
                confirm_label="Delete"
                danger=true
                on_confirm=Callback::new(delete)
                on_cancel=Callback::new(move |_| confirming.set(false))
            >
                <p>"The parking, its spots and its subscriptions will be deleted. This cannot be undone."</p>
            </ConfirmModal>

            <Show when=move || deleting.get()>
                <div class="blocking-overlay">
                    <div class="spinner"></div>
                    <p>"Deleting parking..."</p>
                </div>
            </Show>
        </div>
    }
}
