//! Create Person Drawer

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{field_error, report_failure, use_toaster, Drawer, SubmitButton, TextField};
use crate::feedback::Action;
use crate::store::{store_insert_person, use_app_store};
use crate::validation::{FormErrors, PersonForm};

#[component]
pub fn CreatePersonDrawer(open: RwSignal<bool>) -> impl IntoView {
    let store = use_app_store();
    let toaster = use_toaster();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let form = PersonForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            birth_date: birth_date.get_untracked(),
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
            let result = api::create_person(&args).await;
            pending.set(false);
            match result {
                Ok(person) => {
                    log::info!("[Person] Created {}", person.id);
                    toaster.success("Person created", format!("{} was added", person.full_name()));
                    store_insert_person(&store, person);
                    for field in [first_name, last_name, birth_date] {
                        field.set(String::new());
                    }
                    open.set(false);
                }
                Err(err) => report_failure(Action::CreatePerson, &err, errors, toaster, |_| String::new()),
            }
        });
    };

    view! {
        <Drawer title="New person" open=open on_close=Callback::new(move |_| open.set(false))>
            <form class="drawer-form" on:submit=submit>
                <TextField label="First name" value=first_name error=field_error(errors, "first_name") />
                <TextField label="Last name" value=last_name error=field_error(errors, "last_name") />
                <TextField
                    label="Birth date"
                    input_type="date"
                    value=birth_date
                    error=field_error(errors, "birth_date")
                />
                <SubmitButton label="Create" pending=pending />
            </form>
        </Drawer>
    }
}
