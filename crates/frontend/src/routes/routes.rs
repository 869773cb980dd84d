use crate::pages::home::HomePage;
use crate::pages::my_metrics::MyMetricsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Страница не найдена"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/metrics") view=MyMetricsPage />
            </Routes>
        </Router>
    }
}
