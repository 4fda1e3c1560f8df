//! UI Components
//!
//! Reusable Leptos components.

mod toast;
mod pagination;
mod table_placeholder;
mod filter_input;
mod text_field;
mod drawer;
mod confirm_modal;
mod parkings_table;
mod cars_table;
mod persons_table;
mod spots_table;
mod subscriptions_table;
mod bad_parked_table;
mod create_parking_drawer;
mod create_car_drawer;
mod create_person_drawer;
mod create_subscription_drawer;
mod car_view_drawer;
mod person_view_drawer;
mod spot_action_modal;
mod parking_statistics;
mod activity_log;

pub use toast::{use_toaster, ToastStack, Toaster};
pub use pagination::Pagination;
pub use table_placeholder::{render_pager, render_rows, TablePlaceholder};
pub use filter_input::{filter_edit, filter_value, FilterInput};
pub use text_field::{SelectField, TextField};
pub use drawer::{field_error, report_failure, Drawer, SubmitButton};
pub use confirm_modal::ConfirmModal;
pub use parkings_table::ParkingsTable;
pub use cars_table::CarsTable;
pub use persons_table::PersonsTable;
pub use spots_table::SpotsTable;
pub use subscriptions_table::SubscriptionsTable;
pub use bad_parked_table::BadParkedTable;
pub use create_parking_drawer::CreateParkingDrawer;
pub use create_car_drawer::CreateCarDrawer;
pub use create_person_drawer::CreatePersonDrawer;
pub use create_subscription_drawer::CreateSubscriptionDrawer;
pub use car_view_drawer::CarViewDrawer;
pub use person_view_drawer::PersonViewDrawer;
pub use spot_action_modal::{SpotActionModal, SpotChange};
pub use parking_statistics::ParkingStatistics;
pub use activity_log::ActivityLog;
