//! Subscriptions Table
//!
//! Spot reservations of one parking, with a delete action per row.

use leptos::prelude::*;

use crate::components::{filter_edit, filter_value, render_pager, render_rows, FilterInput};
use crate::load::LoadState;
use crate::models::Subscription;
use crate::table::{table_view, SubscriptionFilter, SUBSCRIPTIONS_PAGE_SIZE};

const COLUMNS: u32 = 4;

#[component]
pub fn SubscriptionsTable(
    subscriptions: RwSignal<LoadState<Vec<Subscription>>>,
    /// Asks the owner to confirm and delete this row
    #[prop(into)] on_delete: Callback<Subscription>,
) -> impl IntoView {
    let filter = RwSignal::new(SubscriptionFilter::default());
    let page = RwSignal::new(1usize);

    let view_model = Memo::new(move |_| {
        let f = filter.get();
        subscriptions.with(|state| table_view(state, &f, page.get(), SUBSCRIPTIONS_PAGE_SIZE))
    });

    view! {
        <table class="data-table subscriptions-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Person"</th>
                    <th>"Spot"</th>
                    <th></th>
                </tr>
                <tr class="filter-row">
                    <th></th>
                    <FilterInput placeholder="Person" value=filter_value(filter, |f| f.person.clone())
                        on_change=filter_edit(filter, page, |f, v| f.person = v) />
                    <FilterInput placeholder="Spot" value=filter_value(filter, |f| f.spot_tag.clone())
                        on_change=filter_edit(filter, page, |f, v| f.spot_tag = v) />
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || render_rows(view_model.get(), "No subscription found", COLUMNS, move |subscription| {
                    let person = subscription.person_name();
                    let tag = subscription.spot_tag().to_string();
                    let id = subscription.id.clone();
                    view! {
                        <tr>
                            <td>{id}</td>
                            <td>{person}</td>
                            <td>{tag}</td>
                            <td>
                                <button
                                    class="btn btn-small btn-danger"
                                    title="Delete subscription"
                                    on:click=move |_| on_delete.run(subscription.clone())
                                >
                                    "Delete"
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
