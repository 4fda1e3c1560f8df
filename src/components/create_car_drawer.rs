//! Create Car Drawer
//!
//! Form for a new car, owned by an existing person.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{field_error, report_failure, use_toaster, Drawer, SelectField, SubmitButton, TextField};
use crate::feedback::Action;
use crate::store::{store_insert_car, use_app_store, AppStateStoreFields};
use crate::validation::{CarForm, FormErrors};

#[component]
pub fn CreateCarDrawer(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let toaster = use_toaster();

    let license_plate = RwSignal::new(String::new());
    let brand = RwSignal::new(String::new());
    let model = RwSignal::new(String::new());
    let color = RwSignal::new(String::new());
    let owner = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let pending = RwSignal::new(false);

    let owners = Signal::derive(move || {
        store
            .persons()
            .read()
            .value()
            .map(|persons| persons.iter().map(|p| (p.id.clone(), p.full_name())).collect())
            .unwrap_or_default()
    });

    let reset = move || {
        for field in [license_plate, brand, model, color, owner] {
            field.set(String::new());
        }
        errors.set(FormErrors::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = CarForm {
            license_plate: license_plate.get_untracked(),
            brand: brand.get_untracked(),
            model: model.get_untracked(),
            color: color.get_untracked(),
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

        spawn_local(async move {
            let result = api::create_car(&args).await;
            pending.set(false);
            match result {
                Ok(car) => {
                    log::info!("[Car] Created {} ({})", car.license_plate, car.id);
                    toaster.success("Car created", format!("The car \"{}\" was created", car.license_plate));
                    store_insert_car(&store, car);
                    reset();
                    open.set(false);
                }
                Err(err) => report_failure(Action::CreateCar, &err, errors, toaster, |field| match field {
                    "owner" => args.owner.clone(),
                    _ => args.license_plate.clone(),
                }),
            }
        });
    };

    view! {
        <Drawer title="New car" open=open on_close=Callback::new(move |_| open.set(false))>
            <form class="drawer-form" on:submit=submit>
                <TextField
                    label="License plate"
                    placeholder="AA123AA"
                    value=license_plate
                    error=field_error(errors, "license_plate")
                />
                <TextField label="Brand" value=brand error=field_error(errors, "brand") />
                <TextField label="Model" value=model error=field_error(errors, "model") />
                <TextField label="Color" value=color error=field_error(errors, "color") />
                <SelectField
                    label="Owner"
                    prompt="Select an owner"
                    value=owner
                    options=owners
                    error=field_error(errors, "owner")
                />
                <SubmitButton label="Create" pending=pending />
            </form>
        </Drawer>
    }
}
