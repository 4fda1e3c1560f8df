//! Parkings Table
//!
//! Home-page list of parkings with per-column filters.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{filter_edit, filter_value, render_pager, render_rows, FilterInput};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::table::{table_view, ParkingFilter, PARKINGS_PAGE_SIZE};

const COLUMNS: u32 = 6;

fn parse_bound(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn ParkingsTable() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(ParkingFilter::default());
    let page = RwSignal::new(1usize);

    let view_model = Memo::new(move |_| {
        let f = filter.get();
        table_view(&store.parkings().read(), &f, page.get(), PARKINGS_PAGE_SIZE)
    });

    view! {
        <table class="data-table parkings-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Address"</th>
                    <th>"City"</th>
                    <th>"Available"</th>
                    <th>"Capacity"</th>
                </tr>
                <tr class="filter-row">
                    <FilterInput placeholder="ID" value=filter_value(filter, |f| f.id.clone())
                        on_change=filter_edit(filter, page, |f, v| f.id = v) />
                    <FilterInput placeholder="Name" value=filter_value(filter, |f| f.name.clone())
                        on_change=filter_edit(filter, page, |f, v| f.name = v) />
                    <FilterInput placeholder="Address" value=filter_value(filter, |f| f.address.clone())
                        on_change=filter_edit(filter, page, |f, v| f.address = v) />
                    <FilterInput placeholder="Zip code" value=filter_value(filter, |f| f.zip_code.clone())
                        on_change=filter_edit(filter, page, |f, v| f.zip_code = v) />
                    <FilterInput placeholder="Min." input_type="number"
                        value=filter_value(filter, |f| bound_text(f.min_available))
                        on_change=filter_edit(filter, page, |f, v| f.min_available = parse_bound(&v)) />
                    <FilterInput placeholder="Min." input_type="number"
                        value=filter_value(filter, |f| bound_text(f.min_capacity))
                        on_change=filter_edit(filter, page, |f, v| f.min_capacity = parse_bound(&v)) />
                </tr>
            </thead>
            <tbody>
                {move || render_rows(view_model.get(), "No parking found", COLUMNS, |parking| {
                    let href = format!("/parkings/{}", parking.id);
                    let capacity = parking.capacity();
                    view! {
                        <tr>
                            <td><A href=href>{parking.id.clone()}</A></td>
                            <td>{parking.name}</td>
                            <td>{parking.address}</td>
                            <td>{format!("{} ({})", parking.city, parking.zip_code)}</td>
                            <td>{parking.available_spots}</td>
                            <td>{capacity}</td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
        {move || render_pager(&view_model.read(), page)}
    }
}

fn bound_text(bound: u32) -> String {
    if bound == 0 { String::new() } else { bound.to_string() }
}
