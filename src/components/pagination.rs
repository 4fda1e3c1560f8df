//! Pagination component for navigating through table pages

use leptos::prelude::*;

/// Previous/Next pager with a "Page x of y" label
#[component]
pub fn Pagination(
    /// Current page (1-based)
    page: usize,
    /// Total number of pages
    pages: usize,
    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let has_prev = page > 1;
    let has_next = page < pages;

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                disabled={!has_prev}
                on:click=move |_| {
                    if has_prev {
                        on_page_change.run(page - 1);
                    }
                }
            >
                "Previous"
            </button>

            <span class="pagination-info">
                "Page " {page} " of " {pages}
            </span>

            <button
                class="pagination-btn"
                disabled={!has_next}
                on:click=move |_| {
                    if has_next {
                        on_page_change.run(page + 1);
                    }
                }
            >
                "Next"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_component_creation() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = Pagination(PaginationProps {
                page: 2,
                pages: 3,
                on_page_change: Callback::new(|_| {}),
            });
        });
    }
}
