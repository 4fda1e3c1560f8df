//! Bad Parked Table
//!
//! Cars occupying a spot reserved for someone else.

use leptos::prelude::*;

use crate::components::{render_pager, render_rows};
use crate::load::LoadState;
use crate::models::BadParkedCar;
use crate::table::{table_view, NoFilter, BAD_PARKED_PAGE_SIZE};

const COLUMNS: u32 = 4;

#[component]
pub fn BadParkedTable(#[prop(into)] cars: Signal<Vec<BadParkedCar>>) -> impl IntoView {
    let page = RwSignal::new(1usize);

    let view_model = Memo::new(move |_| {
        let state = LoadState::Loaded(cars.get());
        table_view(&state, &NoFilter, page.get(), BAD_PARKED_PAGE_SIZE)
    });

    view! {
        <table class="data-table bad-parked-table">
            <thead>
                <tr>
                    <th>"Car"</th>
                    <th>"Car owner"</th>
                    <th>"Spot"</th>
                    <th>"Spot owner"</th>
                </tr>
            </thead>
            <tbody>
                {move || render_rows(view_model.get(), "No bad parked car", COLUMNS, |car| view! {
                    <tr>
                        <td>{format!("{} ({} {})", car.license_plate, car.brand, car.color)}</td>
                        <td>{car.owner.full_name()}</td>
                        <td>{car.spot.tag.clone()}</td>
                        <td>{car.spot.owner.full_name()}</td>
                    </tr>
                })}
            </tbody>
        </table>
        {move || render_pager(&view_model.read(), page)}
    }
}
