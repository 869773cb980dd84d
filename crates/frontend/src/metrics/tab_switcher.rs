use crate::shared::icons::icon;
use contracts::metrics::MetricsTab;
use leptos::prelude::*;

/// CSS-класс кнопки вкладки: активная подсвечивается своим акцентом
pub fn tab_button_class(tab: MetricsTab, active: MetricsTab) -> String {
    if tab == active {
        format!(
            "metrics-tab metrics-tab--active metrics-tab--{}",
            tab.accent()
        )
    } else {
        "metrics-tab metrics-tab--inactive".to_string()
    }
}

fn select_tab(tab: MetricsTab, on_tab_change: Callback<MetricsTab>) {
    log::debug!("metrics tab selected: {}", tab);
    on_tab_change.run(tab);
}

/// Переключатель ПАБ / ПК над карточками показателей.
///
/// Сам состояние не хранит: активная вкладка приходит сверху,
/// клик сообщает идентификатор кнопки через `on_tab_change`.
#[component]
pub fn MetricsTabSwitcher(
    /// Текущая активная вкладка
    #[prop(into)]
    active_tab: Signal<MetricsTab>,
    /// Вызывается с идентификатором нажатой кнопки
    on_tab_change: Callback<MetricsTab>,
) -> impl IntoView {
    view! {
        <div class="metrics-tab-switcher" role="tablist">
            {MetricsTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || tab_button_class(tab, active_tab.get())
                            aria-selected=move || (tab == active_tab.get()).to_string()
                            on:click=move |_| select_tab(tab, on_tab_change)
                        >
                            <span class="metrics-tab__icon">{icon(tab.icon())}</span>
                            {tab.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_exactly_one_button_active() {
        for active in MetricsTab::all() {
            let active_count = MetricsTab::all()
                .into_iter()
                .filter(|tab| tab_button_class(*tab, active).contains("--active"))
                .count();
            assert_eq!(active_count, 1);
            assert!(tab_button_class(active, active).contains("--active"));
        }
    }

    #[test]
    fn test_button_classes() {
        assert_eq!(
            tab_button_class(MetricsTab::Pab, MetricsTab::Pab),
            "metrics-tab metrics-tab--active metrics-tab--red"
        );
        assert_eq!(
            tab_button_class(MetricsTab::Pk, MetricsTab::Pk),
            "metrics-tab metrics-tab--active metrics-tab--blue"
        );
        assert_eq!(
            tab_button_class(MetricsTab::Pk, MetricsTab::Pab),
            "metrics-tab metrics-tab--inactive"
        );
    }

    #[test]
    fn test_click_dispatches_once_with_button_tab() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&calls);
            let on_tab_change = Callback::new(move |tab: MetricsTab| {
                sink.lock().unwrap().push(tab);
            });

            // Повторный клик по уже активной вкладке тоже доходит до колбэка
            select_tab(MetricsTab::Pk, on_tab_change);
            assert_eq!(*calls.lock().unwrap(), vec![MetricsTab::Pk]);

            select_tab(MetricsTab::Pab, on_tab_change);
            select_tab(MetricsTab::Pab, on_tab_change);
            assert_eq!(
                *calls.lock().unwrap(),
                vec![MetricsTab::Pk, MetricsTab::Pab, MetricsTab::Pab]
            );
        });
    }
}
