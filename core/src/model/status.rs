use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Ticket availability of a single performance, or of a whole show once aggregated.
///
/// Anything the API sends that is not one of the four known strings
/// (missing field, `null`, a number, a typo) becomes `Unknown`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case", from = "Value")]
pub enum PerformanceStatus {
    Available,
    SoldOut,
    PreSale,
    #[default]
    Unknown,
}

impl PerformanceStatus {
    pub const ALL: [PerformanceStatus; 4] = [
        PerformanceStatus::Available,
        PerformanceStatus::SoldOut,
        PerformanceStatus::PreSale,
        PerformanceStatus::Unknown,
    ];

    pub fn from_wire(value: &str) -> Self {
        match value {
            "available" => PerformanceStatus::Available,
            "sold-out" => PerformanceStatus::SoldOut,
            "pre-sale" => PerformanceStatus::PreSale,
            _ => PerformanceStatus::Unknown,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            PerformanceStatus::Available => "available",
            PerformanceStatus::SoldOut => "sold-out",
            PerformanceStatus::PreSale => "pre-sale",
            PerformanceStatus::Unknown => "unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PerformanceStatus::Available => "○",
            PerformanceStatus::SoldOut => "×",
            PerformanceStatus::PreSale => "△",
            PerformanceStatus::Unknown => "?",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceStatus::Available => "空きあり",
            PerformanceStatus::SoldOut => "完売",
            PerformanceStatus::PreSale => "販売前",
            PerformanceStatus::Unknown => "不明",
        }
    }
}

impl From<Value> for PerformanceStatus {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => PerformanceStatus::from_wire(&s),
            _ => PerformanceStatus::Unknown,
        }
    }
}

impl fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}
