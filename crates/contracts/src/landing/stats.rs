/// Строка блока статистики на главной странице
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatEntry {
    pub label: &'static str,
    pub value: &'static str,
    /// Имя иконки для `icon()` на фронтенде
    pub icon: &'static str,
}

/// Статистика профсоюза, отображается как есть
pub const UNION_STATS: [StatEntry; 4] = [
    StatEntry {
        label: "Членов профсоюза",
        value: "1,247",
        icon: "Users",
    },
    StatEntry {
        label: "Лет работы",
        value: "25",
        icon: "Calendar",
    },
    StatEntry {
        label: "Выплачено помощи",
        value: "18.5 млн ₽",
        icon: "Banknote",
    },
    StatEntry {
        label: "Оздоровлено работников",
        value: "850+",
        icon: "Heart",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_entries_in_fixed_order() {
        let labels: Vec<_> = UNION_STATS.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "Членов профсоюза",
                "Лет работы",
                "Выплачено помощи",
                "Оздоровлено работников"
            ]
        );
    }

    #[test]
    fn test_literal_values() {
        assert_eq!(UNION_STATS[0].value, "1,247");
        assert_eq!(UNION_STATS[1].value, "25");
        assert_eq!(UNION_STATS[2].value, "18.5 млн ₽");
        assert_eq!(UNION_STATS[3].value, "850+");
        assert_eq!(UNION_STATS[3].icon, "Heart");
    }
}
