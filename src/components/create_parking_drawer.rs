//! Create Parking Drawer
//!
//! Form for a new parking. Shows the resulting capacity as the operator
//! types, and opens the new parking's page once created.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::{field_error, report_failure, use_toaster, Drawer, SubmitButton, TextField};
use crate::feedback::Action;
use crate::store::{store_insert_parking, use_app_store};
use crate::validation::{FormErrors, ParkingForm};

#[component]
pub fn CreateParkingDrawer(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let toaster = use_toaster();

    let defaults = ParkingForm::default();
    let name = RwSignal::new(defaults.name);
    let address = RwSignal::new(defaults.address);
    let zip_code = RwSignal::new(defaults.zip_code);
    let city = RwSignal::new(defaults.city);
    let levels = RwSignal::new(defaults.levels);
    let spots_per_level = RwSignal::new(defaults.spots_per_level);
    let errors = RwSignal::new(FormErrors::new());
    let pending = RwSignal::new(false);
    let created = RwSignal::new(None::<String>);

    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(id) = created.get() {
            navigate(&format!("/parkings/{}", id), Default::default());
        }
    });

    let read_form = move || ParkingForm {
        name: name.get_untracked(),
        address: address.get_untracked(),
        zip_code: zip_code.get_untracked(),
        city: city.get_untracked(),
        levels: levels.get_untracked(),
        spots_per_level: spots_per_level.get_untracked(),
    };

    let reset = move || {
        let defaults = ParkingForm::default();
        name.set(defaults.name);
        address.set(defaults.address);
        zip_code.set(defaults.zip_code);
        city.set(defaults.city);
        levels.set(defaults.levels);
        spots_per_level.set(defaults.spots_per_level);
        errors.set(FormErrors::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = read_form();
        let args = match form.submit_plan() {
            Ok(args) => args,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::new());
        pending.set(true);

        spawn_local(async move {
            let result = api::create_parking(&args).await;
            pending.set(false);
            match result {
                Ok(parking) => {
                    log::info!("[Parking] Created {} ({})", parking.name, parking.id);
                    toaster.success("Parking created", format!("The parking \"{}\" was created", parking.name));
                    let id = parking.id.clone();
                    store_insert_parking(&store, parking);
                    reset();
                    open.set(false);
                    created.set(Some(id));
                }
                Err(err) => report_failure(Action::CreateParking, &err, errors, toaster, |_| args.name.clone()),
            }
        });
    };

    let capacity = move || {
        let preview = ParkingForm {
            levels: levels.get(),
            spots_per_level: spots_per_level.get(),
            ..Default::default()
        };
        preview.capacity_preview().map(|c| c.to_string()).unwrap_or_else(|| "N/A".to_string())
    };

    view! {
        <Drawer title="New parking" open=open on_close=Callback::new(move |_| open.set(false))>
            <form class="drawer-form" on:submit=submit>
                <TextField label="Name" value=name error=field_error(errors, "name") />
                <TextField label="Address" value=address error=field_error(errors, "address") />
                <TextField label="Zip code" value=zip_code error=field_error(errors, "zip_code") />
                <TextField label="City" value=city error=field_error(errors, "city") />
                <TextField label="Levels" input_type="number" value=levels error=field_error(errors, "levels") />
                <TextField
                    label="Spots per level"
                    input_type="number"
                    value=spots_per_level
                    error=field_error(errors, "spots_per_level")
                />
                <p class="capacity-preview">"Total capacity: " {capacity}</p>
                <SubmitButton label="Create" pending=pending />
            </form>
        </Drawer>
    }
}
