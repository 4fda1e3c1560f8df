//! Car View Drawer
//!
//! Read-only details of one car, fetched when the drawer opens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Drawer;
use crate::load::{LoadState, RequestSeq};
use crate::models::{Car, Ref};
use crate::table::{ERROR_TEXT, LOADING_TEXT};

pub const BAD_PARKED_ALERT: &str = "This car is parked on a spot that is not assigned to it";

/// "TAG (Parking)" or "Not parked"
pub fn car_location(car: &Car) -> String {
    match (&car.spot, &car.parking) {
        (Some(spot), Some(parking)) => format!("{} ({})", spot_tag(spot), parking.name),
        (Some(spot), None) => spot_tag(spot),
        _ => "Not parked".to_string(),
    }
}

fn spot_tag(spot: &Ref<crate::models::SpotSummary>) -> String {
    match spot {
        Ref::Expanded(s) => s.tag.clone(),
        Ref::Id(id) => id.clone(),
    }
}

#[component]
pub fn CarViewDrawer(car_id: RwSignal<Option<String>>) -> impl IntoView {
    let car = RwSignal::new(LoadState::<Car>::Idle);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let Some(id) = car_id.get() else { return };
        let ticket = seq.next();
        let seq = seq.clone();
        car.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_car(&id).await;
            if seq.is_current(ticket) {
                if let Err(err) = &result {
                    log::warn!("[Car] Fetch {} failed: {}", id, err);
                }
                car.set(LoadState::from_result(result));
            }
        });
    });

    let open = Signal::derive(move || car_id.with(Option::is_some));

    view! {
        <Drawer title="Car" open=open on_close=Callback::new(move |_| car_id.set(None))>
            {move || match car.get() {
                LoadState::Idle | LoadState::Loading => view! { <p class="placeholder">{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed(_) => view! { <p class="placeholder error">{ERROR_TEXT}</p> }.into_any(),
                LoadState::Loaded(car) => {
                    let owner = match &car.owner {
                        Ref::Expanded(person) => person.full_name(),
                        Ref::Id(id) => id.clone(),
                    };
                    let location = car_location(&car);
                    view! {
                        <div class="detail">
                            {car.bad_parked.then(|| view! { <div class="alert alert-danger">{BAD_PARKED_ALERT}</div> })}
                            <dl>
                                <dt>"License plate"</dt><dd>{car.license_plate}</dd>
                                <dt>"Brand"</dt><dd>{car.brand}</dd>
                                <dt>"Model"</dt><dd>{car.model}</dd>
                                <dt>"Color"</dt><dd>{car.color}</dd>
                                <dt>"Owner"</dt><dd>{owner}</dd>
                                <dt>"Parked on"</dt><dd>{location}</dd>
                            </dl>
                        </div>
                    }.into_any()
                }
            }}
        </Drawer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::fixtures;
    use crate::models::{ParkingSummary, SpotSummary};

    #[test]
    fn test_car_location() {
        let mut car = fixtures::car("c1", "AB123CD", "Renault");
        assert_eq!(car_location(&car), "Not parked");

        car.spot = Some(Ref::Expanded(SpotSummary { id: "s1".into(), tag: "A-03".into(), level: Some(0) }));
        car.parking = Some(ParkingSummary { id: "k1".into(), name: "Centre".into() });
        assert_eq!(car_location(&car), "A-03 (Centre)");
    }
}
