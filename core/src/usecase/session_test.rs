use super::*;
use crate::model::calendar::{DaySchedule, Performance, ShowEntry};
use crate::model::show::{Park, ShowCode};
use crate::model::status::PerformanceStatus;
use chrono::Local;

fn response_with(days: &[(&str, Vec<&str>)]) -> CalendarResponse {
    let mut dataset = CalendarDataset::new();
    for (day, codes) in days {
        let schedule: DaySchedule = codes
            .iter()
            .map(|code| {
                (
                    code.to_string(),
                    ShowEntry {
                        full_show_name: code.to_string(),
                        performances: vec![Performance {
                            ticket_id: format!("{}-{}", day, code),
                            round: 1,
                            status: PerformanceStatus::SoldOut,
                        }],
                    },
                )
            })
            .collect();
        dataset.insert(day.to_string(), schedule);
    }
    CalendarResponse {
        master_data: Some(dataset),
        summary: Some(Summary {
            total_tickets: 3,
            available: 0,
            sold_out: 3,
            unknown: 0,
        }),
    }
}

fn succeeded(generation: u64, response: CalendarResponse) -> Event {
    Event::FetchSucceeded {
        generation,
        response,
        fetched_at: Local::now(),
    }
}

fn loaded() -> SessionState {
    let state = reduce(SessionState::default(), Event::FetchStarted);
    let generation = state.generation;
    reduce(state, succeeded(generation, response_with(&[("1", vec!["BBB", "CMB"]), ("2", vec!["DTF"])])))
}

#[test]
fn test_fetch_started_bumps_generation() {
    let state = SessionState {
        error: Some("boom".to_string()),
        ..SessionState::default()
    };
    let state = reduce(state, Event::FetchStarted);

    assert_eq!(state.generation, 1);
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.current_request(), FetchRequest { generation: 1, month: Month::July });
}

#[test]
fn test_success_replaces_dataset() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.dataset.len(), 2);
    assert_eq!(state.displayable_summary().map(|s| s.sold_out), Some(3));
    assert!(state.fetched_at.is_some());

    let state = reduce(state, Event::FetchStarted);
    let generation = state.generation;
    let state = reduce(state, succeeded(generation, response_with(&[("30", vec!["MMW"])])));
    assert_eq!(state.dataset.keys().collect::<Vec<_>>(), vec!["30"]);
}

#[test]
fn test_null_master_data_is_empty_not_error() {
    let state = reduce(loaded(), Event::FetchStarted);
    let generation = state.generation;
    let state = reduce(state, succeeded(generation, CalendarResponse::default()));

    assert!(state.dataset.is_empty());
    assert_eq!(state.error, None);
    assert!(state.is_empty_notice());
}

#[test]
fn test_failure_clears_dataset_and_summary() {
    let state = reduce(loaded(), Event::FetchStarted);
    let generation = state.generation;
    let state = reduce(
        state,
        Event::FetchFailed {
            generation,
            message: "API Error: 500 - oops".to_string(),
        },
    );

    assert!(state.dataset.is_empty());
    assert_eq!(state.summary, None);
    assert_eq!(state.error.as_deref(), Some("API Error: 500 - oops"));
    assert!(!state.loading);
    assert!(!state.is_empty_notice());
}

#[test]
fn test_stale_response_is_discarded() {
    // July request goes out, then the user switches to August before it returns.
    let state = reduce(SessionState::default(), Event::FetchStarted);
    let july = state.current_request();
    let state = reduce(state, Event::MonthSelected(Month::August));
    let state = reduce(state, Event::FetchStarted);
    let august = state.current_request();

    let state = reduce(state, succeeded(august.generation, response_with(&[("8", vec!["BBB"])])));
    let state = reduce(state, succeeded(july.generation, response_with(&[("7", vec!["BBB"])])));
    assert_eq!(state.dataset.keys().collect::<Vec<_>>(), vec!["8"]);

    let state = reduce(
        state,
        Event::FetchFailed {
            generation: july.generation,
            message: "late".to_string(),
        },
    );
    assert_eq!(state.error, None);
    assert_eq!(state.dataset.len(), 1);
}

#[test]
fn test_stale_response_keeps_loading() {
    let state = reduce(SessionState::default(), Event::FetchStarted);
    let state = reduce(state, Event::FetchStarted);
    let state = reduce(state, succeeded(1, response_with(&[("1", vec!["BBB"])])));
    assert!(state.loading);
    assert!(state.dataset.is_empty());
}

#[test]
fn test_park_change_resets_invalid_show() {
    let state = reduce(loaded(), Event::ShowSelected(ShowFilter::Show(ShowCode::CMB)));
    assert_eq!(state.filter.show(), ShowFilter::Show(ShowCode::CMB));

    let state = reduce(state, Event::ParkSelected(ParkFilter::Only(Park::Sea)));
    assert_eq!(state.filter.show(), ShowFilter::All);

    let days = state.visible_days();
    let codes: Vec<&str> = days
        .iter()
        .flat_map(|d| d.shows.keys().map(|k| k.as_str()))
        .collect();
    assert_eq!(codes, vec!["BBB", "DTF"]);
}

#[test]
fn test_show_outside_park_is_ignored() {
    let state = reduce(loaded(), Event::ParkSelected(ParkFilter::Only(Park::Land)));
    let state = reduce(state, Event::ShowSelected(ShowFilter::Show(ShowCode::DTF)));
    assert_eq!(state.filter.show(), ShowFilter::All);
}

#[test]
fn test_expansion_toggle() {
    let key = "1-BBB".to_string();
    let state = reduce(loaded(), Event::ExpansionToggled(key.clone()));
    assert!(state.is_expanded(&key));

    let state = reduce(state, Event::ExpansionToggled(key.clone()));
    assert!(!state.is_expanded(&key));
}

#[test]
fn test_triggers_fetch_only_on_month_change() {
    let state = SessionState::default();
    assert!(Event::MonthSelected(Month::September).triggers_fetch(&state));
    assert!(!Event::MonthSelected(Month::July).triggers_fetch(&state));
    assert!(!Event::ParkSelected(ParkFilter::All).triggers_fetch(&state));
}

#[test]
fn test_reduce_does_not_touch_filters_on_fetch() {
    let state = reduce(loaded(), Event::ParkSelected(ParkFilter::Only(Park::Land)));
    let before = state.filter;
    let state = reduce(state, Event::FetchStarted);
    assert_eq!(state.filter, before);
}
