use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::status::PerformanceStatus;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticket_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub round: u32,
    #[serde(default)]
    pub status: PerformanceStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShowEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_show_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub performances: Vec<Performance>,
}

impl ShowEntry {
    pub fn performances_by_round(&self) -> Vec<&Performance> {
        let mut sorted: Vec<&Performance> = self.performances.iter().collect();
        sorted.sort_by_key(|p| p.round);
        sorted
    }
}

// Key: show code as sent by the API ("BBB", ...). Unknown codes are kept.
pub type DaySchedule = BTreeMap<String, ShowEntry>;

// Key: day of month as sent by the API ("1".."31").
pub type CalendarDataset = BTreeMap<String, DaySchedule>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Summary {
    #[serde(deserialize_with = "null_as_default")]
    pub total_tickets: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub available: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sold_out: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub unknown: u64,
}

impl Summary {
    pub fn is_displayable(&self) -> bool {
        self.total_tickets > 0
    }
}

/// Body of the calendar endpoint. Both fields may be absent or `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    #[serde(default)]
    pub master_data: Option<CalendarDataset>,
    #[serde(default)]
    pub summary: Option<Summary>,
}

impl CalendarResponse {
    pub fn into_parts(self) -> (CalendarDataset, Option<Summary>) {
        (self.master_data.unwrap_or_default(), self.summary)
    }

    pub fn into_dataset(self) -> CalendarDataset {
        self.into_parts().0
    }
}

// An explicit `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
