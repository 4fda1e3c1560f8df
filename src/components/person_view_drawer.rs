//! Person View Drawer
//!
//! A person's details with their subscriptions and cars.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Drawer;
use crate::load::{LoadState, RequestSeq};
use crate::models::{PersonCar, PersonDetail};
use crate::table::{ERROR_TEXT, LOADING_TEXT};

fn person_car_location(car: &PersonCar) -> String {
    match (&car.spot, &car.parking) {
        (Some(spot), Some(parking)) => format!("{} ({})", spot.tag, parking.name),
        (Some(spot), None) => spot.tag.clone(),
        _ => "Not parked".to_string(),
    }
}

#[component]
pub fn PersonViewDrawer(person_id: RwSignal<Option<String>>) -> impl IntoView {
    let person = RwSignal::new(LoadState::<PersonDetail>::Idle);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let Some(id) = person_id.get() else { return };
        let ticket = seq.next();
        let seq = seq.clone();
        person.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_person(&id).await;
            if seq.is_current(ticket) {
                person.set(LoadState::from_result(result));
            }
        });
    });

    let open = Signal::derive(move || person_id.with(Option::is_some));

    view! {
        <Drawer title="Person" open=open on_close=Callback::new(move |_| person_id.set(None))>
            {move || match person.get() {
                LoadState::Idle | LoadState::Loading => view! { <p class="placeholder">{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed(_) => view! { <p class="placeholder error">{ERROR_TEXT}</p> }.into_any(),
                LoadState::Loaded(detail) => {
                    let birth = detail.birth_date.get(..10).unwrap_or(&detail.birth_date).to_string();
                    view! {
                        <div class="detail">
                            <h3>{format!("{} {}", detail.first_name, detail.last_name)}</h3>
                            <p>"Born " {birth}</p>

                            <h4>"Subscriptions"</h4>
                            {if detail.subscriptions.is_empty() {
                                view! { <p class="placeholder">"No subscription"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="detail-list">
                                        {detail.subscriptions.into_iter().map(|s| view! {
                                            <li>{format!("Spot {} in {}", s.spot.tag, s.parking.name)}</li>
                                        }).collect_view()}
                                    </ul>
                                }.into_any()
                            }}

                            <h4>"Cars"</h4>
                            {if detail.cars.is_empty() {
                                view! { <p class="placeholder">"No car"</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="detail-list">
                                        {detail.cars.into_iter().map(|car| {
                                            let location = person_car_location(&car);
                                            view! {
                                                <li>
                                                    <strong>{car.license_plate}</strong>
                                                    {format!(" {} {}, {}", car.brand, car.model, location)}
                                                    {car.bad_parked.then(|| view! {
                                                        <span class="badge badge-danger">"Bad parked"</span>
                                                    })}
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                }.into_any()
                            }}
                        </div>
                    }.into_any()
                }
            }}
        </Drawer>
    }
}
