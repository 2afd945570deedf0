pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod usecase;

pub use config::Config;
pub use error::{FetchError, ParseError};
pub use model::calendar::{CalendarDataset, CalendarResponse, DaySchedule, Performance, ShowEntry, Summary};
pub use model::filter::{FilterState, Month, ParkFilter, ShowFilter};
pub use model::show::{park_of, Park, ShowCode};
pub use model::status::PerformanceStatus;
pub use repository::{CalendarSource, HttpCalendarSource, DEFAULT_API_URL};
pub use service::aggregate::{aggregate_status, aggregate_statuses};
pub use service::filter::{expansion_key, filter_calendar, next_show_option, show_filter_options, FilteredDay};
pub use usecase::session::{reduce, Event, FetchRequest, SessionState};
