//! Persons Table
//!
//! Home-page list of persons with a birth-date range filter.

use leptos::prelude::*;

use crate::components::{filter_edit, filter_value, render_pager, render_rows, FilterInput, PersonViewDrawer};
use crate::models::parse_birth_date;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::table::{table_view, PersonFilter, PERSONS_PAGE_SIZE};

const COLUMNS: u32 = 4;

fn date_text(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[component]
pub fn PersonsTable() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(PersonFilter::default());
    let page = RwSignal::new(1usize);
    let selected = RwSignal::new(None::<String>);

    let view_model = Memo::new(move |_| {
        let f = filter.get();
        table_view(&store.persons().read(), &f, page.get(), PERSONS_PAGE_SIZE)
    });

    view! {
        <table class="data-table persons-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"First name"</th>
                    <th>"Last name"</th>
                    <th>"Birth date"</th>
                </tr>
                <tr class="filter-row">
                    <FilterInput placeholder="ID" value=filter_value(filter, |f| f.id.clone())
                        on_change=filter_edit(filter, page, |f, v| f.id = v) />
                    <FilterInput placeholder="First name" value=filter_value(filter, |f| f.first_name.clone())
                        on_change=filter_edit(filter, page, |f, v| f.first_name = v) />
                    <FilterInput placeholder="Last name" value=filter_value(filter, |f| f.last_name.clone())
                        on_change=filter_edit(filter, page, |f, v| f.last_name = v) />
                    <th class="filter-cell date-range">
                        <input
                            type="date"
                            class="filter-input"
                            prop:value=move || filter.with(|f| date_text(f.birth_from))
                            on:input=move |ev| {
                                let from = parse_birth_date(&event_target_value(&ev));
                                filter.update(|f| f.birth_from = from);
                                page.set(1);
                            }
                        />
                        <input
                            type="date"
                            class="filter-input"
                            prop:value=move || filter.with(|f| date_text(f.birth_to))
                            on:input=move |ev| {
                                let to = parse_birth_date(&event_target_value(&ev));
                                filter.update(|f| f.birth_to = to);
                                page.set(1);
                            }
                        />
                    </th>
                </tr>
            </thead>
            <tbody>
                {move || render_rows(view_model.get(), "No person found", COLUMNS, move |person| {
                    let id = person.id.clone();
                    view! {
                        <tr>
                            <td>
                                <button class="link-btn" on:click=move |_| selected.set(Some(id.clone()))>
                                    {person.id.clone()}
                                </button>
                            </td>
                            <td>{person.first_name}</td>
                            <td>{person.last_name}</td>
                            <td>{person.birth_date.get(..10).unwrap_or(&person.birth_date).to_string()}</td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
        {move || render_pager(&view_model.read(), page)}
        <PersonViewDrawer person_id=selected />
    }
}
