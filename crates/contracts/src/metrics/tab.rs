use serde::{Deserialize, Serialize};

/// Вкладка личных показателей: ПАБ (поведенческий аудит) или ПК (производственный контроль)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsTab {
    #[default]
    Pab,
    Pk,
}

impl MetricsTab {
    /// Получить код вкладки
    pub fn code(&self) -> &'static str {
        match self {
            MetricsTab::Pab => "pab",
            MetricsTab::Pk => "pk",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            MetricsTab::Pab => "Мои показатели по ПАБ",
            MetricsTab::Pk => "Мои показатели по ПК",
        }
    }

    /// Имя иконки для `icon()` на фронтенде
    pub fn icon(&self) -> &'static str {
        match self {
            MetricsTab::Pab => "FileText",
            MetricsTab::Pk => "Shield",
        }
    }

    /// Акцентный цвет активной кнопки
    pub fn accent(&self) -> &'static str {
        match self {
            MetricsTab::Pab => "red",
            MetricsTab::Pk => "blue",
        }
    }

    /// Получить все вкладки в порядке отображения
    pub fn all() -> [MetricsTab; 2] {
        [MetricsTab::Pab, MetricsTab::Pk]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pab" => Some(MetricsTab::Pab),
            "pk" => Some(MetricsTab::Pk),
            _ => None,
        }
    }
}

impl std::fmt::Display for MetricsTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_two_tabs_in_order() {
        assert_eq!(MetricsTab::all(), [MetricsTab::Pab, MetricsTab::Pk]);
    }

    #[test]
    fn test_code_round_trip() {
        for tab in MetricsTab::all() {
            assert_eq!(MetricsTab::from_code(tab.code()), Some(tab));
        }
        assert_eq!(MetricsTab::from_code("PAB"), None);
        assert_eq!(MetricsTab::from_code(""), None);
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&MetricsTab::Pk).unwrap(), "\"pk\"");
        let tab: MetricsTab = serde_json::from_str("\"pab\"").unwrap();
        assert_eq!(tab, MetricsTab::Pab);
        assert!(serde_json::from_str::<MetricsTab>("\"other\"").is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(MetricsTab::Pab.display_name(), "Мои показатели по ПАБ");
        assert_eq!(MetricsTab::Pk.display_name(), "Мои показатели по ПК");
        assert_eq!(MetricsTab::Pk.to_string(), "pk");
    }
}
