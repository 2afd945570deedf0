use showcal_core::{PerformanceStatus, SessionState, ShowCode, ShowEntry};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CalendarRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Show")]
    show: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Performances")]
    performances: String,
}

pub fn print_calendar(state: &SessionState) {
    let month = state.filter.month();
    let days = state.visible_days();

    if days.is_empty() {
        println!("{}の公演データがありません", month.label());
        return;
    }

    let rows: Vec<CalendarRow> = days
        .iter()
        .flat_map(|day| {
            day.shows.iter().map(move |(code, entry)| CalendarRow {
                day: format!("{}日", day.day),
                show: show_title(code, entry),
                status: status_cell(entry.overall_status()),
                performances: performance_cell(entry),
            })
        })
        .collect();

    println!(
        "\x1b[1;36m{}\x1b[0m  {} / {}",
        month.label(),
        state.filter.park().label(),
        state.filter.show().label()
    );

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    if let Some(summary) = state.displayable_summary() {
        println!(
            "総チケット数: {}  {}: {}  {}: {}  {}: {}",
            summary.total_tickets,
            PerformanceStatus::Available.label(),
            summary.available,
            PerformanceStatus::SoldOut.label(),
            summary.sold_out,
            PerformanceStatus::Unknown.label(),
            summary.unknown
        );
    }
    println!("{}", legend());
}

pub fn legend() -> String {
    PerformanceStatus::ALL
        .iter()
        .map(|s| format!("{} {}", s.icon(), s.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn show_title(code: &str, entry: &ShowEntry) -> String {
    match ShowCode::from_code(code) {
        Some(show) => show.short_name_lines().join("\n"),
        None if !entry.full_show_name.is_empty() => entry.full_show_name.clone(),
        None => code.to_string(),
    }
}

fn status_cell(status: PerformanceStatus) -> String {
    format!("{} {}", status.icon(), status.label())
}

fn performance_cell(entry: &ShowEntry) -> String {
    entry
        .performances_by_round()
        .iter()
        .map(|p| format!("第{}回 {}", p.round, p.status.icon()))
        .collect::<Vec<_>>()
        .join("  ")
}
