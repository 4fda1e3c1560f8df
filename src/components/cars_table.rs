//! Cars Table
//!
//! Home-page list of cars. Clicking an id opens the car detail drawer.

use leptos::prelude::*;

use crate::components::{filter_edit, filter_value, render_pager, render_rows, CarViewDrawer, FilterInput};
use crate::models::Ref;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::table::{table_view, CarFilter, CARS_PAGE_SIZE};

const COLUMNS: u32 = 6;

#[component]
pub fn CarsTable() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(CarFilter::default());
    let page = RwSignal::new(1usize);
    let selected = RwSignal::new(None::<String>);

    let view_model = Memo::new(move |_| {
        let f = filter.get();
        table_view(&store.cars().read(), &f, page.get(), CARS_PAGE_SIZE)
    });

    view! {
        <table class="data-table cars-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"License plate"</th>
                    <th>"Brand"</th>
                    <th>"Model"</th>
                    <th>"Color"</th>
                    <th>"Owner"</th>
                </tr>
                <tr class="filter-row">
                    <FilterInput placeholder="ID" value=filter_value(filter, |f| f.id.clone())
                        on_change=filter_edit(filter, page, |f, v| f.id = v) />
                    <FilterInput placeholder="Plate" value=filter_value(filter, |f| f.license_plate.clone())
                        on_change=filter_edit(filter, page, |f, v| f.license_plate = v) />
                    <FilterInput placeholder="Brand" value=filter_value(filter, |f| f.brand.clone())
                        on_change=filter_edit(filter, page, |f, v| f.brand = v) />
                    <FilterInput placeholder="Model" value=filter_value(filter, |f| f.model.clone())
                        on_change=filter_edit(filter, page, |f, v| f.model = v) />
                    <FilterInput placeholder="Color" value=filter_value(filter, |f| f.color.clone())
                        on_change=filter_edit(filter, page, |f, v| f.color = v) />
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || render_rows(view_model.get(), "No car found", COLUMNS, move |car| {
                    let id = car.id.clone();
                    let owner = match &car.owner {
                        Ref::Expanded(person) => person.full_name(),
                        Ref::Id(id) => id.clone(),
                    };
                    view! {
                        <tr>
                            <td>
                                <button class="link-btn" on:click=move |_| selected.set(Some(id.clone()))>
                                    {car.id.clone()}
                                </button>
                                {car.bad_parked.then(|| view! { <span class="badge badge-danger">"Bad parked"</span> })}
                            </td>
                            <td>{car.license_plate}</td>
                            <td>{car.brand}</td>
                            <td>{car.model}</td>
                            <td>{car.color}</td>
                            <td>{owner}</td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
        {move || render_pager(&view_model.read(), page)}
        <CarViewDrawer car_id=selected />
    }
}
