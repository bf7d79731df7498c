// Trend matrix domain model - one row per period label

#[derive(Debug, Clone, PartialEq)]
pub struct TrendRow {
    pub label: String,
    pub values: Vec<(String, f64)>,
}

impl TrendRow {
    pub fn new(label: String) -> Self {
        Self {
            label,
            values: Vec::new(),
        }
    }

    pub fn value_of(&self, criterion: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == criterion)
            .map(|(_, v)| *v)
    }
}

#[derive(Debug, Clone)]
pub struct TrendMatrix {
    pub title: String,
    pub rows: Vec<TrendRow>,
}

impl TrendMatrix {
    pub fn new(title: String, rows: Vec<TrendRow>) -> Self {
        Self { title, rows }
    }
}
