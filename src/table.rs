//! Table Utilities
//!
//! Client-side filtering and pagination over fully fetched lists.

use chrono::NaiveDate;

use crate::load::LoadState;
use crate::models::{Car, Parking, Person, Subscription};

pub const PARKINGS_PAGE_SIZE: usize = 5;
pub const CARS_PAGE_SIZE: usize = 15;
pub const PERSONS_PAGE_SIZE: usize = 15;
pub const SPOTS_PAGE_SIZE: usize = 15;
pub const SUBSCRIPTIONS_PAGE_SIZE: usize = 15;
pub const BAD_PARKED_PAGE_SIZE: usize = 15;

pub const ERROR_TEXT: &str = "An error occurred while loading data";
pub const LOADING_TEXT: &str = "Loading...";

/// Number of pages for `len` rows; never less than one
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Rows of the 1-based `page`; empty when out of range
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let from = (page - 1).saturating_mul(page_size);
    if from >= items.len() {
        return &[];
    }
    let to = (from + page_size).min(items.len());
    &items[from..to]
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn contains_exact(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.contains(needle)
}

/// A per-table row predicate
pub trait RowFilter<T> {
    fn matches(&self, row: &T) -> bool;

    fn apply(&self, rows: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        rows.iter().filter(|row| self.matches(row)).cloned().collect()
    }
}

/// Accepts every row
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl<T> RowFilter<T> for NoFilter {
    fn matches(&self, _row: &T) -> bool {
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParkingFilter {
    pub id: String,
    pub name: String,
    pub address: String,
    pub zip_code: String,
    /// 0 disables the bound
    pub min_available: u32,
    /// 0 disables the bound
    pub min_capacity: u32,
}

impl RowFilter<Parking> for ParkingFilter {
    fn matches(&self, p: &Parking) -> bool {
        contains_exact(&p.id, &self.id)
            && contains_ci(&p.name, &self.name)
            && contains_ci(&p.address, &self.address)
            && contains_exact(&p.zip_code, &self.zip_code)
            && (self.min_available == 0 || p.available_spots >= self.min_available)
            && (self.min_capacity == 0 || p.capacity() >= self.min_capacity)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarFilter {
    pub id: String,
    pub license_plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
}

impl RowFilter<Car> for CarFilter {
    fn matches(&self, c: &Car) -> bool {
        contains_exact(&c.id, &self.id)
            && contains_ci(&c.license_plate, &self.license_plate)
            && contains_ci(&c.brand, &self.brand)
            && contains_ci(&c.model, &self.model)
            && contains_ci(&c.color, &self.color)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonFilter {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_from: Option<NaiveDate>,
    pub birth_to: Option<NaiveDate>,
}

impl RowFilter<Person> for PersonFilter {
    fn matches(&self, p: &Person) -> bool {
        let text_ok = contains_exact(&p.id, &self.id)
            && contains_ci(&p.first_name, &self.first_name)
            && contains_ci(&p.last_name, &self.last_name);
        if !text_ok {
            return false;
        }
        if self.birth_from.is_none() && self.birth_to.is_none() {
            return true;
        }
        let Some(born) = p.birth_date_parsed() else {
            return false;
        };
        self.birth_from.map_or(true, |from| born >= from) && self.birth_to.map_or(true, |to| born <= to)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionFilter {
    pub person: String,
    pub spot_tag: String,
}

impl RowFilter<Subscription> for SubscriptionFilter {
    fn matches(&self, s: &Subscription) -> bool {
        contains_ci(&s.person_name(), &self.person) && contains_ci(s.spot_tag(), &self.spot_tag)
    }
}

/// What a table body renders
#[derive(Debug, Clone, PartialEq)]
pub enum TableView<T> {
    Loading,
    Error,
    Empty,
    Rows { rows: Vec<T>, page: usize, pages: usize, total: usize },
}

impl<T> TableView<T> {
    /// Text rendered in place of rows, if any
    pub fn placeholder<'a>(&self, empty_text: &'a str) -> Option<&'a str> {
        match self {
            TableView::Loading => Some(LOADING_TEXT),
            TableView::Error => Some(ERROR_TEXT),
            TableView::Empty => Some(empty_text),
            TableView::Rows { .. } => None,
        }
    }
}

/// Filter, then paginate. `page` is clamped to the available pages.
pub fn table_view<T, F>(state: &LoadState<Vec<T>>, filter: &F, page: usize, page_size: usize) -> TableView<T>
where
    T: Clone,
    F: RowFilter<T>,
{
    match state {
        LoadState::Failed(_) => TableView::Error,
        LoadState::Idle | LoadState::Loading => TableView::Loading,
        LoadState::Loaded(all) => {
            let filtered = filter.apply(all);
            if filtered.is_empty() {
                return TableView::Empty;
            }
            let pages = page_count(filtered.len(), page_size);
            let page = page.clamp(1, pages);
            TableView::Rows {
                rows: paginate(&filtered, page, page_size).to_vec(),
                page,
                pages,
                total: filtered.len(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::collections::fixtures::*;

    #[test]
    fn test_second_page_holds_remainder() {
        let parkings: Vec<_> = (1..=7).map(|i| parking(&i.to_string(), &format!("P{}", i))).collect();
        let page = paginate(&parkings, 2, PARKINGS_PAGE_SIZE);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "6");
        assert_eq!(page[1].id, "7");
        assert_eq!(page_count(parkings.len(), PARKINGS_PAGE_SIZE), 2);
        assert!(paginate(&parkings, 3, PARKINGS_PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_page_count_never_zero() {
        assert_eq!(page_count(0, 15), 1);
        assert_eq!(page_count(15, 15), 1);
        assert_eq!(page_count(16, 15), 2);
    }

    #[test]
    fn test_parking_filter() {
        let mut big = parking("abc-1", "Champs Elysees");
        big.levels = 10;
        big.spots_per_level = 100;
        big.available_spots = 40;
        let small = parking("def-2", "Gare du Nord");

        let filter = ParkingFilter { name: "champs".into(), ..Default::default() };
        assert!(filter.matches(&big));
        assert!(!filter.matches(&small));

        let filter = ParkingFilter { min_capacity: 500, min_available: 10, ..Default::default() };
        assert!(filter.matches(&big));
        assert!(!filter.matches(&small));

        let filter = ParkingFilter { id: "ABC".into(), ..Default::default() };
        assert!(!filter.matches(&big), "id filter is case-sensitive");
    }

    #[test]
    fn test_person_birth_range() {
        let ada = person("p1", "Ada", "Lovelace", "1815-12-10");
        let alan = person("p2", "Alan", "Turing", "1912-06-23");
        let unknown = person("p3", "Grace", "Hopper", "unknown");

        let filter = PersonFilter {
            birth_from: NaiveDate::from_ymd_opt(1900, 1, 1),
            ..Default::default()
        };
        assert!(!filter.matches(&ada));
        assert!(filter.matches(&alan));
        assert!(!filter.matches(&unknown));

        let inclusive = PersonFilter {
            birth_to: NaiveDate::from_ymd_opt(1912, 6, 23),
            ..Default::default()
        };
        assert!(inclusive.matches(&alan));
        assert!(PersonFilter::default().matches(&unknown));
    }

    #[test]
    fn test_car_and_subscription_filters() {
        let clio = car("c1", "AB123CD", "Renault");
        assert!(CarFilter { brand: "REN".into(), ..Default::default() }.matches(&clio));
        assert!(!CarFilter { license_plate: "ZZ".into(), ..Default::default() }.matches(&clio));

        let sub = subscription("1", "B-12", "Luc");
        assert!(SubscriptionFilter { person: "luc mar".into(), ..Default::default() }.matches(&sub));
        assert!(!SubscriptionFilter { spot_tag: "A-".into(), ..Default::default() }.matches(&sub));
    }

    #[test]
    fn test_failed_fetch_renders_error_not_empty_grid() {
        let state: LoadState<Vec<Subscription>> = LoadState::Failed(ApiError::Network("refused".into()));
        let view = table_view(&state, &SubscriptionFilter::default(), 1, SUBSCRIPTIONS_PAGE_SIZE);
        assert_eq!(view, TableView::Error);
        assert_eq!(view.placeholder("No subscription found"), Some(ERROR_TEXT));

        let empty: LoadState<Vec<Subscription>> = LoadState::Loaded(Vec::new());
        let view = table_view(&empty, &SubscriptionFilter::default(), 1, SUBSCRIPTIONS_PAGE_SIZE);
        assert_eq!(view.placeholder("No subscription found"), Some("No subscription found"));
    }

    #[test]
    fn test_table_view_filters_then_paginates() {
        let cars: Vec<_> = (0..20)
            .map(|i| car(&i.to_string(), &format!("AA{:03}AA", i), if i % 2 == 0 { "Renault" } else { "Peugeot" }))
            .collect();
        let state = LoadState::Loaded(cars);
        let filter = CarFilter { brand: "renault".into(), ..Default::default() };

        match table_view(&state, &filter, 5, 5) {
            TableView::Rows { rows, page, pages, total } => {
                assert_eq!(total, 10);
                assert_eq!(pages, 2);
                assert_eq!(page, 2, "page is clamped");
                assert_eq!(rows.len(), 5);
            }
            other => panic!("unexpected view {:?}", other),
        }

        let none = CarFilter { color: "violet".into(), ..Default::default() };
        assert_eq!(table_view(&state, &none, 1, 5), TableView::Empty);
        assert_eq!(table_view::<Car, _>(&LoadState::Loading, &NoFilter, 1, 5), TableView::Loading);
    }
}
