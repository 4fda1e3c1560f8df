//! Subscriptions of the current parking

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::collections::{insert_subscription, remove_by_id};
use crate::components::{use_toaster, ConfirmModal, CreateSubscriptionDrawer, SubscriptionsTable};
use crate::context::use_parking;
use crate::feedback::{describe, Action};
use crate::load::{LoadState, RequestSeq};
use crate::models::Subscription;

#[component]
pub fn ParkingSubscriptionsPage() -> impl IntoView {
    let ctx = use_parking();
    let toaster = use_toaster();
    let subscriptions = RwSignal::new(LoadState::<Vec<Subscription>>::Idle);
    let drawer = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<Subscription>);
    let deleting = RwSignal::new(false);

    let seq = RequestSeq::new();
    Effect::new(move |_| {
        let id = ctx.parking_id.get();
        let ticket = seq.next();
        let seq = seq.clone();
        subscriptions.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::list_subscriptions(&id).await;
            if seq.is_current(ticket) {
                if let Err(err) = &result {
                    log::warn!("[Subscriptions] Fetch {} failed: {}", id, err);
                }
                subscriptions.set(LoadState::from_result(result));
            }
        });
    });

    let on_created = Callback::new(move |subscription: Subscription| {
        subscriptions.update(|state| {
            if let Some(list) = state.value_mut() {
                insert_subscription(list, subscription);
            }
        });
    });

    let confirm_delete = move |_| {
        let Some(subscription) = pending_delete.get_untracked() else { return };
        let parking_id = ctx.parking_id.get_untracked();
        deleting.set(true);
        spawn_local(async move {
            let result = api::delete_subscription(&parking_id, &subscription.id).await;
            deleting.set(false);
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    log::info!("[Subscriptions] Deleted {}", subscription.id);
                    toaster.success("Subscription deleted", format!("Spot {} is no longer reserved", subscription.spot_tag()));
                    subscriptions.update(|state| {
                        if let Some(list) = state.value_mut() {
                            remove_by_id(list, &subscription.id, |s| s.id.as_str());
                        }
                    });
                }
                Err(err) => {
                    log::warn!("[Subscriptions] Delete {} failed: {}", subscription.id, err);
                    toaster.error(describe(Action::DeleteSubscription, &err));
                }
            }
        });
    };

    view! {
        <section class="parking-subscriptions">
            <header class="panel-header">
                <h2>"Subscriptions"</h2>
                <button class="btn btn-primary" on:click=move |_| drawer.set(true)>"Add subscription"</button>
            </header>
            <SubscriptionsTable
                subscriptions=subscriptions
                on_delete=Callback::new(move |s| pending_delete.set(Some(s)))
            />
            <CreateSubscriptionDrawer parking_id=ctx.parking_id open=drawer on_created=on_created />
            <ConfirmModal
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title=Signal::derive(move || {
                    pending_delete.with(|s| {
                        s.as_ref().map(|s| format!("Delete the subscription of spot {}?", s.spot_tag())).unwrap_or_default()
                    })
                })
                confirm_label="Delete"
                danger=true
                busy=deleting
                on_confirm=Callback::new(confirm_delete)
                on_cancel=Callback::new(move |_| pending_delete.set(None))
            >
                <p>"The spot will be free for anyone to park on."</p>
            </ConfirmModal>
        </section>
    }
}
