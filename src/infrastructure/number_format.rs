// Locale-aware integer formatting for displayed estimates
pub use crate::domain::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    locale: Locale,
    group_separator: char,
}

impl NumberFormat {
    pub fn for_locale(locale: Locale) -> Self {
        let group_separator = match locale {
            Locale::RuRu => '\u{a0}',
            Locale::EnUs => ',',
        };
        Self {
            locale,
            group_separator,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Digits of `n` split into groups of three.
    pub fn group(&self, n: u64) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(c);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
