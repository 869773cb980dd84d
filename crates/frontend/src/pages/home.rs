use crate::sections::StatsSection;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <header class="home-page__hero">
                <h1>"Первичная профсоюзная организация"</h1>
                <p class="home-page__subtitle">"Защита прав и интересов работников"</p>
                <A href="/metrics" attr:class="home-page__link">"Мои показатели"</A>
            </header>
            <StatsSection />
        </main>
    }
}
