//! Parking Statistics
//!
//! Summary cards, occupancy pies, brand histogram and the bad parked list
//! for one parking.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::charts::{bar_heights, pie_slices, slice_path, sorted_histogram};
use crate::components::BadParkedTable;
use crate::load::{LoadState, RequestSeq};
use crate::models::Statistics;
use crate::table::{ERROR_TEXT, LOADING_TEXT};

const PIE_SIZE: f64 = 160.0;
const BAR_CHART_HEIGHT: f64 = 160.0;
const BAR_WIDTH: f64 = 32.0;
const BAR_GAP: f64 = 12.0;
const COLORS: [&str; 2] = ["#2f9e44", "#e03131"];

#[component]
fn StatCard(#[prop(into)] label: String, value: u32) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// Two-slice pie with a legend
#[component]
fn PieChart(#[prop(into)] title: String, labels: [&'static str; 2], values: [u32; 2]) -> impl IntoView {
    let r = PIE_SIZE / 2.0;
    let slices = pie_slices(&values.map(f64::from));

    view! {
        <figure class="chart pie-chart">
            <figcaption>{title}</figcaption>
            {if slices.is_empty() {
                view! { <p class="placeholder">"No data"</p> }.into_any()
            } else {
                view! {
                    <svg width=PIE_SIZE.to_string() height=PIE_SIZE.to_string() viewBox=format!("0 0 {} {}", PIE_SIZE, PIE_SIZE)>
                        {slices.iter().zip(COLORS).map(|(slice, color)| view! {
                            <path d=slice_path(r, r, r, slice) fill=color />
                        }).collect_view()}
                    </svg>
                }.into_any()
            }}
            <ul class="legend">
                {labels.iter().zip(values).zip(COLORS).enumerate().map(|(i, ((label, value), color))| {
                    let percent = slices.get(i).map(|s| s.percent).unwrap_or(0.0);
                    view! {
                        <li>
                            <span class="swatch" style=format!("background:{}", color)></span>
                            {format!("{}: {} ({:.0}%)", label, value, percent)}
                        </li>
                    }
                }).collect_view()}
            </ul>
        </figure>
    }
}

/// Car brands, ascending by count
#[component]
fn BrandChart(brands: Vec<(String, u32)>) -> impl IntoView {
    let counts: Vec<u32> = brands.iter().map(|(_, n)| *n).collect();
    let heights = bar_heights(&counts, BAR_CHART_HEIGHT);
    let width = (brands.len().max(1) as f64) * (BAR_WIDTH + BAR_GAP);
    let label_height = 20.0;

    view! {
        <figure class="chart bar-chart">
            <figcaption>"Car brands"</figcaption>
            {if brands.is_empty() {
                view! { <p class="placeholder">"No data"</p> }.into_any()
            } else {
                view! {
                    <svg
                        width=width.to_string()
                        height=(BAR_CHART_HEIGHT + label_height).to_string()
                        viewBox=format!("0 0 {} {}", width, BAR_CHART_HEIGHT + label_height)
                    >
                        {brands.into_iter().zip(heights).enumerate().map(|(i, ((brand, count), h))| {
                            let x = i as f64 * (BAR_WIDTH + BAR_GAP);
                            view! {
                                <g>
                                    <rect
                                        x=x.to_string()
                                        y=(BAR_CHART_HEIGHT - h).to_string()
                                        width=BAR_WIDTH.to_string()
                                        height=h.to_string()
                                        fill="#1971c2"
                                    />
                                    <text
                                        x=(x + BAR_WIDTH / 2.0).to_string()
                                        y=(BAR_CHART_HEIGHT + label_height - 4.0).to_string()
                                        text-anchor="middle"
                                        font-size="10"
                                    >
                                        {format!("{} ({})", brand, count)}
                                    </text>
                                </g>
                            }
                        }).collect_view()}
                    </svg>
                }.into_any()
            }}
        </figure>
    }
}

fn render_statistics(stats: Statistics) -> impl IntoView {
    let brands = sorted_histogram(&stats.car_brands);
    let bad_parked = stats.bad_parked.clone();

    view! {
        <div class="stat-cards">
            <StatCard label="Spots" value=stats.total_spots />
            <StatCard label="Cars" value=stats.total_cars />
            <StatCard label="Levels" value=stats.total_levels />
            <StatCard label="Subscriptions" value=stats.total_subscriptions />
        </div>
        <div class="charts">
            <PieChart
                title="Occupancy"
                labels=["Available", "Taken"]
                values=[stats.available_spots, stats.taken_spots]
            />
            <PieChart
                title="Reservations"
                labels=["Not reserved", "Reserved"]
                values=[stats.not_reserved_spots, stats.reserved_spots]
            />
            <BrandChart brands=brands />
        </div>
        <h3>"Bad parked cars"</h3>
        <BadParkedTable cars=Signal::stored(bad_parked) />
    }
}

#[component]
pub fn ParkingStatistics(#[prop(into)] parking_id: Signal<String>) -> impl IntoView {
    let stats = RwSignal::new(LoadState::<Statistics>::Idle);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let id = parking_id.get();
        let ticket = seq.next();
        let seq = seq.clone();
        stats.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::get_statistics(&id).await;
            if seq.is_current(ticket) {
                if let Err(err) = &result {
                    log::warn!("[Statistics] Fetch {} failed: {}", id, err);
                }
                stats.set(LoadState::from_result(result));
            }
        });
    });

    view! {
        <section class="parking-statistics">
            {move || match stats.get() {
                LoadState::Idle | LoadState::Loading => view! { <p class="placeholder">{LOADING_TEXT}</p> }.into_any(),
                LoadState::Failed(_) => view! { <p class="placeholder error">{ERROR_TEXT}</p> }.into_any(),
                LoadState::Loaded(s) => render_statistics(s).into_any(),
            }}
        </section>
    }
}
