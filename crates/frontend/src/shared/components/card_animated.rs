//! CardAnimated — Thaw Card с анимацией появления.
//!
//! Анимация `card-appear` задаётся в стилях портала. Для каскадного
//! появления карточкам в ряду передаётся растущий `delay_ms`.

use leptos::prelude::*;
use thaw::Card;

/// Стиль анимации для карточки с задержкой `delay_ms`
pub fn appear_style(delay_ms: u32, extra: &str) -> String {
    let base = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if extra.is_empty() {
        base
    } else {
        format!("{} {}", base, extra)
    }
}

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style=appear_style(delay_ms, &style)>
            {children()}
        </Card>
    }
}
