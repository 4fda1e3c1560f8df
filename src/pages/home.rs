//! Home page: parkings, cars and persons

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    use_toaster, CarsTable, CreateCarDrawer, CreateParkingDrawer, CreatePersonDrawer, ParkingsTable, PersonsTable,
};
use crate::load::{LoadState, RequestSeq};
use crate::store::{invalidate_cars, invalidate_parkings, invalidate_persons, use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let toaster = use_toaster();

    // Load parkings on mount and when invalidated
    let parkings_seq = RequestSeq::new();
    Effect::new(move |_| {
        let _ = store.parkings_version().get();
        let ticket = parkings_seq.next();
        let seq = parkings_seq.clone();
        *store.parkings().write() = LoadState::Loading;
        spawn_local(async move {
            let result = api::list_parkings().await;
            if seq.is_current(ticket) {
                match &result {
                    Ok(list) => log::debug!("[Home] Loaded {} parkings", list.len()),
                    Err(err) => log::warn!("[Home] Loading parkings failed: {}", err),
                }
                *store.parkings().write() = LoadState::from_result(result);
            }
        });
    });

    let cars_seq = RequestSeq::new();
    Effect::new(move |_| {
        let _ = store.cars_version().get();
        let ticket = cars_seq.next();
        let seq = cars_seq.clone();
        *store.cars().write() = LoadState::Loading;
        spawn_local(async move {
            let result = api::list_cars().await;
            if seq.is_current(ticket) {
                if let Err(err) = &result {
                    log::warn!("[Home] Loading cars failed: {}", err);
                }
                *store.cars().write() = LoadState::from_result(result);
            }
        });
    });

    let persons_seq = RequestSeq::new();
    Effect::new(move |_| {
        let _ = store.persons_version().get();
        let ticket = persons_seq.next();
        let seq = persons_seq.clone();
        *store.persons().write() = LoadState::Loading;
        spawn_local(async move {
            let result = api::list_persons().await;
            if seq.is_current(ticket) {
                if let Err(err) = &result {
                    log::warn!("[Home] Loading persons failed: {}", err);
                }
                *store.persons().write() = LoadState::from_result(result);
            }
        });
    });

    let parking_drawer = RwSignal::new(false);
    let car_drawer = RwSignal::new(false);
    let person_drawer = RwSignal::new(false);

    view! {
        <div class="home-page">
            <section class="panel">
                <header class="panel-header">
                    <h2>"Parkings"</h2>
                    <button class="btn" on:click=move |_| {
                        invalidate_parkings(&store);
                        toaster.info("Refreshing", "Reloading parkings from the server");
                    }>"Refresh"</button>
                    <button class="btn btn-primary" on:click=move |_| parking_drawer.set(true)>"Add parking"</button>
                </header>
                <ParkingsTable />
            </section>
            <section class="panel">
                <header class="panel-header">
                    <h2>"Cars"</h2>
                    <button class="btn" on:click=move |_| {
                        invalidate_cars(&store);
                        toaster.info("Refreshing", "Reloading cars from the server");
                    }>"Refresh"</button>
                    <button class="btn btn-primary" on:click=move |_| car_drawer.set(true)>"Add car"</button>
                </header>
                <CarsTable />
            </section>
            <section class="panel">
                <header class="panel-header">
                    <h2>"Persons"</h2>
                    <button class="btn" on:click=move |_| {
                        invalidate_persons(&store);
                        toaster.info("Refreshing", "Reloading persons from the server");
                    }>"Refresh"</button>
                    <button class="btn btn-primary" on:click=move |_| person_drawer.set(true)>"Add person"</button>
                </header>
                <PersonsTable />
            </section>
            <CreateParkingDrawer open=parking_drawer />
            <CreateCarDrawer open=car_drawer />
            <CreatePersonDrawer open=person_drawer />
        </div>
    }
}
