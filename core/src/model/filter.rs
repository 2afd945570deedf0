use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::model::show::{Park, ShowCode};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String")]
pub enum Month {
    #[default]
    July,
    August,
    September,
}

impl Month {
    pub const ALL: [Month; 3] = [Month::July, Month::August, Month::September];

    /// Value of the `month` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            Month::July => "7",
            Month::August => "8",
            Month::September => "9",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Month::July => "7月",
            Month::August => "8月",
            Month::September => "9月",
        }
    }

    pub fn next(&self) -> Month {
        match self {
            Month::July => Month::August,
            Month::August => Month::September,
            Month::September => Month::July,
        }
    }

    pub fn previous(&self) -> Month {
        match self {
            Month::July => Month::September,
            Month::August => Month::July,
            Month::September => Month::August,
        }
    }
}

impl FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "7" => Ok(Month::July),
            "8" => Ok(Month::August),
            "9" => Ok(Month::September),
            other => Err(ParseError::new("month", other, "7, 8, 9")),
        }
    }
}

impl Month {
    /// Month whose query value is the given digit key, if any.
    pub fn from_key(key: char) -> Option<Month> {
        Month::ALL
            .into_iter()
            .find(|m| m.as_param().starts_with(key))
    }
}

impl TryFrom<String> for Month {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String")]
pub enum ParkFilter {
    #[default]
    All,
    Only(Park),
}

impl ParkFilter {
    pub fn admits(&self, park: Option<Park>) -> bool {
        match self {
            ParkFilter::All => true,
            ParkFilter::Only(wanted) => park == Some(*wanted),
        }
    }

    pub fn next(&self) -> ParkFilter {
        match self {
            ParkFilter::All => ParkFilter::Only(Park::Land),
            ParkFilter::Only(Park::Land) => ParkFilter::Only(Park::Sea),
            ParkFilter::Only(Park::Sea) => ParkFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParkFilter::All => "全てのパーク",
            ParkFilter::Only(park) => park.label(),
        }
    }
}

impl FromStr for ParkFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "all" => Ok(ParkFilter::All),
            "land" => Ok(ParkFilter::Only(Park::Land)),
            "sea" => Ok(ParkFilter::Only(Park::Sea)),
            _ => Err(ParseError::new("park", s, "all, land, sea")),
        }
    }
}

impl TryFrom<String> for ParkFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ParkFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkFilter::All => f.write_str("all"),
            ParkFilter::Only(park) => f.write_str(park.as_wire()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShowFilter {
    #[default]
    All,
    Show(ShowCode),
}

impl ShowFilter {
    pub fn admits(&self, code: &str) -> bool {
        match self {
            ShowFilter::All => true,
            ShowFilter::Show(show) => show.code() == code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShowFilter::All => "すべてのショー",
            ShowFilter::Show(show) => show.display_name(),
        }
    }
}

impl FromStr for ShowFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(ShowFilter::All);
        }
        ShowCode::from_code(&s.to_uppercase())
            .map(ShowFilter::Show)
            .ok_or_else(|| ParseError::new("show", s, "all, BBB, MMW, CMB, DTF"))
    }
}

impl fmt::Display for ShowFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowFilter::All => f.write_str("all"),
            ShowFilter::Show(show) => f.write_str(show.code()),
        }
    }
}

/// The three user-selected filters.
///
/// Invariant: a concrete `show` always belongs to `park` (or `park` is `All`).
/// Only the `select_*` methods mutate, and they keep it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    month: Month,
    park: ParkFilter,
    show: ShowFilter,
}

impl FilterState {
    pub fn new(month: Month, park: ParkFilter, show: ShowFilter) -> Self {
        let mut state = Self {
            month,
            park,
            show,
        };
        state.restore_show_invariant();
        state
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn park(&self) -> ParkFilter {
        self.park
    }

    pub fn show(&self) -> ShowFilter {
        self.show
    }

    pub fn select_month(&mut self, month: Month) {
        self.month = month;
    }

    /// Switch park; a selected show that does not belong to it falls back to `All`.
    pub fn select_park(&mut self, park: ParkFilter) {
        self.park = park;
        self.restore_show_invariant();
    }

    /// Returns false (and changes nothing) when `show` is not offered under the current park.
    pub fn select_show(&mut self, show: ShowFilter) -> bool {
        if !is_show_valid(self.park, show) {
            return false;
        }
        self.show = show;
        true
    }

    fn restore_show_invariant(&mut self) {
        if !is_show_valid(self.park, self.show) {
            self.show = ShowFilter::All;
        }
    }
}

fn is_show_valid(park: ParkFilter, show: ShowFilter) -> bool {
    match show {
        ShowFilter::All => true,
        ShowFilter::Show(code) => park.admits(Some(code.park())),
    }
}
