//! Statistics of the current parking

use leptos::prelude::*;

use crate::components::ParkingStatistics;
use crate::context::use_parking;

#[component]
pub fn ParkingStatisticsPage() -> impl IntoView {
    let ctx = use_parking();
    view! {
        <section class="parking-statistics-page">
            <h2>"Statistics"</h2>
            <ParkingStatistics parking_id=ctx.parking_id />
        </section>
    }
}
