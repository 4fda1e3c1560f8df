//! Table Placeholder
//!
//! Single full-width row shown instead of data rows.

use leptos::prelude::*;

use crate::components::Pagination;
use crate::table::TableView;

#[component]
pub fn TablePlaceholder(
    #[prop(into)] text: String,
    colspan: u32,
    #[prop(optional)] error: bool,
) -> impl IntoView {
    let class = if error { "table-placeholder error" } else { "table-placeholder" };
    view! {
        <tr class=class>
            <td colspan=colspan.to_string()>{text}</td>
        </tr>
    }
}

/// Table body for `view_model`: a placeholder row, or one row per record
pub fn render_rows<T, V>(view_model: TableView<T>, empty_text: &str, colspan: u32, row: impl Fn(T) -> V) -> AnyView
where
    V: IntoView + 'static,
{
    if let Some(text) = view_model.placeholder(empty_text) {
        let error = matches!(view_model, TableView::Error);
        return view! { <TablePlaceholder text=text colspan=colspan error=error /> }.into_any();
    }
    match view_model {
        TableView::Rows { rows, .. } => rows.into_iter().map(row).collect_view().into_any(),
        _ => ().into_any(),
    }
}

/// Pager for `view_model`, hidden when there are no rows
pub fn render_pager<T>(view_model: &TableView<T>, page: RwSignal<usize>) -> Option<AnyView> {
    match view_model {
        TableView::Rows { page: current, pages, .. } => Some(
            view! {
                <Pagination page=*current pages=*pages on_page_change=Callback::new(move |p| page.set(p)) />
            }
            .into_any(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::fixtures;

    #[test]
    fn test_render_rows_component_creation() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = render_rows(TableView::<crate::models::Spot>::Error, "No spot found", 6, |_| ());
            let rows = TableView::Rows { rows: vec![fixtures::spot("s1", "A-01", None)], page: 1, pages: 1, total: 1 };
            let _ = render_rows(rows, "No spot found", 6, |spot| spot.tag);
        });
    }
}
