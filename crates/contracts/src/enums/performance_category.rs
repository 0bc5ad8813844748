use serde::{Deserialize, Serialize};
use std::fmt;

/// BCG quadrant assigned upstream to every product of an analysis run.
///
/// The wire labels are the human-readable ones ("Cash Cow", "Question Mark").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceCategory {
    /// High turnover, high revenue
    #[serde(rename = "Star")]
    Star,
    /// Low turnover, high revenue
    #[serde(rename = "Cash Cow")]
    CashCow,
    /// High turnover, low revenue
    #[serde(rename = "Question Mark")]
    QuestionMark,
    /// Low turnover, low revenue
    #[serde(rename = "Dog")]
    Dog,
}

impl PerformanceCategory {
    /// Label used on the wire and in chart legends
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceCategory::Star => "Star",
            PerformanceCategory::CashCow => "Cash Cow",
            PerformanceCategory::QuestionMark => "Question Mark",
            PerformanceCategory::Dog => "Dog",
        }
    }

    /// Plural heading used by summary cards and narrative sections
    pub fn display_name(&self) -> &'static str {
        match self {
            PerformanceCategory::Star => "Stars",
            PerformanceCategory::CashCow => "Cash Cows",
            PerformanceCategory::QuestionMark => "Question Marks",
            PerformanceCategory::Dog => "Dogs",
        }
    }

    /// Short axis description shown under the summary card
    pub fn description(&self) -> &'static str {
        match self {
            PerformanceCategory::Star => "High Turnover + High Revenue",
            PerformanceCategory::CashCow => "Low Turnover + High Revenue",
            PerformanceCategory::QuestionMark => "High Turnover + Low Revenue",
            PerformanceCategory::Dog => "Low Turnover + Low Revenue",
        }
    }

    /// All categories in display order
    pub fn all() -> [PerformanceCategory; 4] {
        [
            PerformanceCategory::Star,
            PerformanceCategory::CashCow,
            PerformanceCategory::QuestionMark,
            PerformanceCategory::Dog,
        ]
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
