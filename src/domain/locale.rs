// Display locale for labels and digit grouping
use chrono::Month;
use serde::Deserialize;

const RU_MONTHS: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ru-RU")]
    RuRu,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn flag_label(self, flag: bool) -> &'static str {
        match (self, flag) {
            (Locale::RuRu, true) => "Да",
            (Locale::RuRu, false) => "Нет",
            (Locale::EnUs, true) => "Yes",
            (Locale::EnUs, false) => "No",
        }
    }

    /// Three-letter month abbreviation.
    pub fn month_label(self, month: Month) -> &'static str {
        match self {
            Locale::RuRu => RU_MONTHS[month.number_from_month() as usize - 1],
            Locale::EnUs => &month.name()[..3],
        }
    }
}
