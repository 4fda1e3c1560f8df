//! Create Subscription Drawer
//!
//! Reserves a free spot of the current parking for a person. The spot and
//! person choices are fetched each time the drawer opens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{field_error, report_failure, use_toaster, Drawer, SelectField, SubmitButton};
use crate::feedback::Action;
use crate::load::LoadState;
use crate::models::{Person, Spot, Subscription};
use crate::validation::{FormErrors, SubscriptionForm};

/// Option label of a spot in the select
pub fn spot_label(spot: &Spot) -> String {
    format!("Level {} - Spot {}", spot.level, spot.tag)
}

#[component]
pub fn CreateSubscriptionDrawer(
    #[prop(into)] parking_id: Signal<String>,
    open: RwSignal<bool>,
    #[prop(into)] on_created: Callback<Subscription>,
) -> impl IntoView {
    let toaster = use_toaster();

    let spot = RwSignal::new(String::new());
    let owner = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let pending = RwSignal::new(false);
    let spots = RwSignal::new(LoadState::<Vec<Spot>>::Idle);
    let persons = RwSignal::new(LoadState::<Vec<Person>>::Idle);

    // Refresh choices on open
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let parking_id = parking_id.get_untracked();
        spots.set(LoadState::Loading);
        persons.set(LoadState::Loading);
        spawn_local(async move {
            spots.set(LoadState::from_result(api::list_available_spots(&parking_id).await));
        });
        spawn_local(async move {
            persons.set(LoadState::from_result(api::list_persons().await));
        });
    });

    let spot_options = Signal::derive(move || {
        spots.with(|state| {
            state
                .value()
                .map(|list| list.iter().map(|s| (s.id.clone(), spot_label(s))).collect())
                .unwrap_or_default()
        })
    });
    let person_options = Signal::derive(move || {
        persons.with(|state| {
            state
                .value()
                .map(|list| list.iter().map(|p| (p.id.clone(), p.full_name())).collect())
                .unwrap_or_default()
        })
    });
    let choices_failed = move || spots.with(LoadState::is_error) || persons.with(LoadState::is_error);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = SubscriptionForm {
            spot: spot.get_untracked(),
            owner: owner.get_untracked(),
        };
        let args = match form.submit_plan() {
            Ok(args) => args,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::new());
        pending.set(true);
        let parking_id = parking_id.get_untracked();

        spawn_local(async move {
            let result = api::create_subscription(&parking_id, &args).await;
            pending.set(false);
            match result {
                Ok(subscription) => {
                    log::info!("[Subscription] Created {} on {}", subscription.id, parking_id);
                    toaster.success("Subscription created", format!("Spot {} is now reserved", subscription.spot_tag()));
                    on_created.run(subscription);
                    spot.set(String::new());
                    owner.set(String::new());
                    open.set(false);
                }
                Err(err) => report_failure(Action::CreateSubscription, &err, errors, toaster, |field| match field {
                    "spot" => args.spot.clone(),
                    _ => args.owner.clone(),
                }),
            }
        });
    };

    view! {
        <Drawer title="New subscription" open=open on_close=Callback::new(move |_| open.set(false))>
            <form class="drawer-form" on:submit=submit>
                <Show when=choices_failed>
                    <p class="form-error">"An error occurred while loading data"</p>
                </Show>
                <SelectField
                    label="Spot"
                    prompt="Select a spot"
                    value=spot
                    options=spot_options
                    error=field_error(errors, "spot")
                />
                <SelectField
                    label="Person"
                    prompt="Select a person"
                    value=owner
                    options=person_options
                    error=field_error(errors, "owner")
                />
                <SubmitButton label="Create" pending=pending />
            </form>
        </Drawer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::fixtures;

    #[test]
    fn test_spot_label() {
        let mut spot = fixtures::spot("s1", "B-07", None);
        spot.level = 1;
        assert_eq!(spot_label(&spot), "Level 1 - Spot B-07");
    }
}
