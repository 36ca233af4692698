use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Coarse effort label shown next to each module. Never used in arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        };
        f.write_str(label)
    }
}

/// A catalog entry: one unit of software functionality with a fixed estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub effort_hours: u32,
    pub complexity: Complexity,
    #[serde(default)]
    pub description: String,
}

impl Module {
    pub fn new(
        name: impl Into<String>,
        effort_hours: u32,
        complexity: Complexity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            effort_hours,
            complexity,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub selected_modules: BTreeSet<String>,
    pub hourly_rate: Decimal,
    pub hours_per_day: u32,
    pub start_date: NaiveDate,
}

impl QuoteRequest {
    pub fn new<I, S>(
        selected: I,
        hourly_rate: Decimal,
        hours_per_day: u32,
        start_date: NaiveDate,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_modules: selected.into_iter().map(Into::into).collect(),
            hourly_rate,
            hours_per_day,
            start_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectDuration {
    pub days: f64,
    pub weeks: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub module: String,
    pub hours: u32,
    pub complexity: Complexity,
    pub cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResult {
    pub start_date: NaiveDate,
    pub total_hours: u64,
    pub total_days: f64,
    pub total_weeks: f64,
    pub total_cost: Decimal,
    pub end_date: NaiveDate,
    pub line_items: Vec<LineItem>,
}

impl QuoteResult {
    /// Whole days added to the start date to reach the end date.
    pub fn working_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn module_count(&self) -> usize {
        self.line_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
