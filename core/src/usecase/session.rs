use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::model::calendar::{CalendarDataset, CalendarResponse, Summary};
use crate::model::filter::{FilterState, Month, ParkFilter, ShowFilter};
use crate::service::filter::{filter_calendar, FilteredDay};

/// A fetch the host has to issue. Responses must echo `generation` back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub month: Month,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FetchStarted,
    FetchSucceeded {
        generation: u64,
        response: CalendarResponse,
        fetched_at: DateTime<Local>,
    },
    FetchFailed {
        generation: u64,
        message: String,
    },
    MonthSelected(Month),
    ParkSelected(ParkFilter),
    ShowSelected(ShowFilter),
    ExpansionToggled(String),
}

/// Everything one UI session knows. Only `reduce` produces new values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub filter: FilterState,
    pub expanded: BTreeSet<String>,
    pub dataset: CalendarDataset,
    pub summary: Option<Summary>,
    pub error: Option<String>,
    pub loading: bool,
    pub generation: u64,
    pub fetched_at: Option<DateTime<Local>>,
}

impl SessionState {
    pub fn new(filter: FilterState) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn current_request(&self) -> FetchRequest {
        FetchRequest {
            generation: self.generation,
            month: self.filter.month(),
        }
    }

    pub fn visible_days(&self) -> Vec<FilteredDay> {
        filter_calendar(&self.dataset, &self.filter)
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn displayable_summary(&self) -> Option<Summary> {
        self.summary.filter(|s| s.is_displayable())
    }

    /// True when the "no data for this month" notice should show.
    pub fn is_empty_notice(&self) -> bool {
        self.dataset.is_empty() && !self.loading && self.error.is_none()
    }
}

impl Event {
    /// Whether the host should follow this event with `FetchStarted`.
    pub fn triggers_fetch(&self, before: &SessionState) -> bool {
        matches!(self, Event::MonthSelected(month) if *month != before.filter.month())
    }
}

pub fn reduce(state: SessionState, event: Event) -> SessionState {
    let mut next = state;
    match event {
        Event::FetchStarted => {
            next.generation += 1;
            next.loading = true;
            next.error = None;
            debug!(generation = next.generation, month = %next.filter.month(), "fetch started");
        }
        Event::FetchSucceeded {
            generation,
            response,
            fetched_at,
        } => {
            if generation != next.generation {
                warn!(generation, current = next.generation, "discarding stale response");
                return next;
            }
            let (dataset, summary) = response.into_parts();
            info!(generation, days = dataset.len(), "calendar loaded");
            next.dataset = dataset;
            next.summary = summary;
            next.error = None;
            next.loading = false;
            next.fetched_at = Some(fetched_at);
        }
        Event::FetchFailed {
            generation,
            message,
        } => {
            if generation != next.generation {
                warn!(generation, current = next.generation, "discarding stale failure");
                return next;
            }
            warn!(generation, %message, "calendar fetch failed");
            next.dataset = CalendarDataset::new();
            next.summary = None;
            next.error = Some(message);
            next.loading = false;
        }
        Event::MonthSelected(month) => next.filter.select_month(month),
        Event::ParkSelected(park) => next.filter.select_park(park),
        Event::ShowSelected(show) => {
            if !next.filter.select_show(show) {
                debug!(%show, park = %next.filter.park(), "ignoring show outside selected park");
            }
        }
        Event::ExpansionToggled(key) => {
            if !next.expanded.remove(&key) {
                next.expanded.insert(key);
            }
        }
    }
    next
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
