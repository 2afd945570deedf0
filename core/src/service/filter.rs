use std::cmp::Ordering;

use crate::model::calendar::{CalendarDataset, DaySchedule};
use crate::model::filter::{FilterState, ParkFilter, ShowFilter};
use crate::model::show::{park_of, ShowCode};

/// One rendered day card: the day key and the shows that survived filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredDay {
    pub day: String,
    pub shows: DaySchedule,
}

/// Apply park and show filters to every day, dropping days left empty.
///
/// Days come back in numeric order ("9" before "10"). Keys that are not
/// numbers go last, ordered lexically.
pub fn filter_calendar(dataset: &CalendarDataset, filter: &FilterState) -> Vec<FilteredDay> {
    let park = filter.park();
    let show = filter.show();

    let mut days: Vec<FilteredDay> = dataset
        .iter()
        .filter_map(|(day, schedule)| {
            let shows: DaySchedule = schedule
                .iter()
                .filter(|(code, _)| is_visible(code, park, show))
                .map(|(code, entry)| (code.clone(), entry.clone()))
                .collect();
            if shows.is_empty() {
                None
            } else {
                Some(FilteredDay {
                    day: day.clone(),
                    shows,
                })
            }
        })
        .collect();

    days.sort_by(|a, b| compare_day_keys(&a.day, &b.day));
    days
}

fn is_visible(code: &str, park: ParkFilter, show: ShowFilter) -> bool {
    park.admits(park_of(code)) && show.admits(code)
}

fn compare_day_keys(a: &str, b: &str) -> Ordering {
    let na = a.trim().parse::<u32>().ok();
    let nb = b.trim().parse::<u32>().ok();
    match (na, nb) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Options for the show selector under a given park, `All` first.
pub fn show_filter_options(park: ParkFilter) -> Vec<ShowFilter> {
    std::iter::once(ShowFilter::All)
        .chain(
            ShowCode::ALL
                .into_iter()
                .filter(|code| park.admits(Some(code.park())))
                .map(ShowFilter::Show),
        )
        .collect()
}

/// Next entry of the show selector, wrapping around.
pub fn next_show_option(park: ParkFilter, current: ShowFilter) -> ShowFilter {
    let options = show_filter_options(park);
    let next = options
        .iter()
        .position(|o| *o == current)
        .map(|i| (i + 1) % options.len())
        .unwrap_or(0);
    options[next]
}

/// Key of a show card in the expanded set.
pub fn expansion_key(day: &str, code: &str) -> String {
    format!("{}-{}", day, code)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
