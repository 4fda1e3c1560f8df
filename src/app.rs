//! Parking Admin App
//!
//! Root component: shared context and routes.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{ActivityLog, ToastStack, Toaster};
use crate::config::Config;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::parking_layout::ParkingLayout;
use crate::pages::parking_spots::ParkingSpotsPage;
use crate::pages::parking_statistics::ParkingStatisticsPage;
use crate::pages::parking_subscriptions::ParkingSubscriptionsPage;
use crate::store::AppState;

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_context(config);
    provide_context(Toaster::new());
    provide_context(Store::new(AppState::new()));

    view! {
        <Router>
            <div class="app-layout">
                <header class="app-header">
                    <A href="/">"Parking admin"</A>
                </header>
                <main class="main-content">
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=HomePage />
                        <ParentRoute path=path!("/parkings/:id") view=ParkingLayout>
                            <Route path=path!("") view=ParkingSpotsPage />
                            <Route path=path!("subscriptions") view=ParkingSubscriptionsPage />
                            <Route path=path!("statistics") view=ParkingStatisticsPage />
                        </ParentRoute>
                    </Routes>
                </main>
                <footer class="app-footer">
                    <ActivityLog />
                </footer>
                <ToastStack />
            </div>
        </Router>
    }
}

