//! Spots Table
//!
//! Spots of one parking level, with a park/unpark action per row.

use leptos::prelude::*;

use crate::collections::SpotAction;
use crate::components::{render_pager, render_rows};
use crate::load::LoadState;
use crate::models::Spot;
use crate::table::{table_view, NoFilter, SPOTS_PAGE_SIZE};

const COLUMNS: u32 = 6;

#[component]
pub fn SpotsTable(
    spots: RwSignal<LoadState<Vec<Spot>>>,
    /// Selected level, 0-based
    level: RwSignal<u32>,
    /// Number of levels in the parking
    #[prop(into)] levels: Signal<u32>,
    #[prop(into)] on_action: Callback<(Spot, SpotAction)>,
) -> impl IntoView {
    let page = RwSignal::new(1usize);

    let view_model = Memo::new(move |_| spots.with(|state| table_view(state, &NoFilter, page.get(), SPOTS_PAGE_SIZE)));

    view! {
        <div class="level-selector">
            <label>
                "Level "
                <select
                    prop:value=move || level.get().to_string()
                    on:change=move |ev| {
                        if let Ok(selected) = event_target_value(&ev).parse::<u32>() {
                            page.set(1);
                            level.set(selected);
                        }
                    }
                >
                    {move || (0..levels.get().max(1)).map(|n| view! {
                        <option value=n.to_string() selected={move || level.get() == n}>{format!("Level {}", n)}</option>
                    }).collect_view()}
                </select>
            </label>
        </div>
        <table class="data-table spots-table">
            <thead>
                <tr>
                    <th>"Spot"</th>
                    <th>"Taken"</th>
                    <th>"Reserved"</th>
                    <th>"Car"</th>
                    <th>"Subscription"</th>
                    <th>"Action"</th>
                </tr>
            </thead>
            <tbody>
                {move || render_rows(view_model.get(), "No spot found", COLUMNS, move |spot| {
                    let action = SpotAction::for_spot(&spot);
                    let reserved = spot.subscription.is_some();
                    let row = spot.clone();
                    let (taken_class, taken_text) =
                        if spot.is_taken { ("badge badge-danger", "Taken") } else { ("badge badge-success", "Free") };
                    let (reserved_class, reserved_text) =
                        if reserved { ("badge badge-warning", "Reserved") } else { ("badge", "Open") };
                    view! {
                        <tr>
                            <td>{spot.tag}</td>
                            <td>
                                <span class=taken_class>{taken_text}</span>
                            </td>
                            <td>
                                <span class=reserved_class>{reserved_text}</span>
                            </td>
                            <td>{spot.car.unwrap_or_else(|| "-".to_string())}</td>
                            <td>{spot.subscription.unwrap_or_else(|| "-".to_string())}</td>
                            <td>
                                <button
                                    class="btn btn-small"
                                    title=action.label()
                                    on:click=move |_| on_action.run((row.clone(), action))
                                >
                                    {action.label()}
                                </button>
                            </td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
        {move || render_pager(&view_model.read(), page)}
    }
}
