use super::*;
use crate::model::calendar::{Performance, ShowEntry};
use crate::model::filter::Month;
use crate::model::show::Park;
use crate::model::status::PerformanceStatus;

fn entry(name: &str) -> ShowEntry {
    ShowEntry {
        full_show_name: name.to_string(),
        performances: vec![Performance {
            ticket_id: format!("{}-1", name),
            round: 1,
            status: PerformanceStatus::Available,
        }],
    }
}

fn day(codes: &[&str]) -> DaySchedule {
    codes.iter().map(|c| (c.to_string(), entry(c))).collect()
}

fn sample() -> CalendarDataset {
    let mut dataset = CalendarDataset::new();
    dataset.insert("9".to_string(), day(&["BBB", "CMB"]));
    dataset.insert("10".to_string(), day(&["MMW", "DTF", "XYZ"]));
    dataset.insert("2".to_string(), day(&["CMB"]));
    dataset
}

fn filter(park: ParkFilter, show: ShowFilter) -> FilterState {
    FilterState::new(Month::July, park, show)
}

fn days_of(result: &[FilteredDay]) -> Vec<&str> {
    result.iter().map(|d| d.day.as_str()).collect()
}

#[test]
fn test_days_sorted_numerically() {
    let result = filter_calendar(&sample(), &FilterState::default());
    assert_eq!(days_of(&result), vec!["2", "9", "10"]);
}

#[test]
fn test_all_filters_keep_everything() {
    let dataset = sample();
    let result = filter_calendar(&dataset, &filter(ParkFilter::All, ShowFilter::All));

    assert_eq!(result.len(), dataset.len());
    for filtered in &result {
        assert_eq!(&filtered.shows, &dataset[&filtered.day]);
    }
}

#[test]
fn test_land_excludes_sea_and_unknown_codes() {
    let result = filter_calendar(&sample(), &filter(ParkFilter::Only(Park::Land), ShowFilter::All));

    for filtered in &result {
        for code in filtered.shows.keys() {
            assert_eq!(park_of(code), Some(Park::Land), "{} on day {}", code, filtered.day);
        }
    }
    assert_eq!(days_of(&result), vec!["2", "9", "10"]);
}

#[test]
fn test_unknown_code_visible_under_all_parks() {
    let result = filter_calendar(&sample(), &FilterState::default());
    let ten = result.iter().find(|d| d.day == "10").unwrap();
    assert!(ten.shows.contains_key("XYZ"));
}

#[test]
fn test_empty_days_are_omitted() {
    let result = filter_calendar(
        &sample(),
        &filter(ParkFilter::All, ShowFilter::Show(ShowCode::CMB)),
    );
    assert_eq!(days_of(&result), vec!["2", "9"]);
    assert!(result.iter().all(|d| d.shows.len() == 1));
}

#[test]
fn test_filter_is_idempotent() {
    let dataset = sample();
    let state = filter(ParkFilter::Only(Park::Sea), ShowFilter::All);
    assert_eq!(filter_calendar(&dataset, &state), filter_calendar(&dataset, &state));
}

#[test]
fn test_park_switch_restores_sea_shows() {
    let mut state = filter(ParkFilter::Only(Park::Land), ShowFilter::Show(ShowCode::CMB));
    let day_nine = |state: &FilterState| {
        filter_calendar(&sample(), state)
            .into_iter()
            .find(|d| d.day == "9")
            .map(|d| d.shows.keys().cloned().collect::<Vec<_>>())
    };
    assert_eq!(day_nine(&state), Some(vec!["CMB".to_string()]));

    state.select_park(ParkFilter::Only(Park::Sea));
    assert_eq!(state.show(), ShowFilter::All);
    assert_eq!(day_nine(&state), Some(vec!["BBB".to_string()]));
}

#[test]
fn test_non_numeric_day_keys_sort_last() {
    let mut dataset = sample();
    dataset.insert("extra".to_string(), day(&["BBB"]));
    dataset.insert("05".to_string(), day(&["BBB"]));

    let result = filter_calendar(&dataset, &FilterState::default());
    assert_eq!(days_of(&result), vec!["2", "05", "9", "10", "extra"]);
}

#[test]
fn test_empty_dataset() {
    assert!(filter_calendar(&CalendarDataset::new(), &FilterState::default()).is_empty());
}

#[test]
fn test_show_filter_options() {
    assert_eq!(
        show_filter_options(ParkFilter::All),
        vec![
            ShowFilter::All,
            ShowFilter::Show(ShowCode::CMB),
            ShowFilter::Show(ShowCode::MMW),
            ShowFilter::Show(ShowCode::BBB),
            ShowFilter::Show(ShowCode::DTF),
        ]
    );
    assert_eq!(
        show_filter_options(ParkFilter::Only(Park::Sea)),
        vec![
            ShowFilter::All,
            ShowFilter::Show(ShowCode::BBB),
            ShowFilter::Show(ShowCode::DTF),
        ]
    );
}

#[test]
fn test_next_show_option_wraps() {
    let land = ParkFilter::Only(Park::Land);
    assert_eq!(next_show_option(land, ShowFilter::All), ShowFilter::Show(ShowCode::CMB));
    assert_eq!(next_show_option(land, ShowFilter::Show(ShowCode::MMW)), ShowFilter::All);
    // a show from the other park restarts the cycle
    assert_eq!(next_show_option(land, ShowFilter::Show(ShowCode::BBB)), ShowFilter::All);
}

#[test]
fn test_expansion_key() {
    assert_eq!(expansion_key("12", "DTF"), "12-DTF");
}
