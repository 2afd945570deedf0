pub mod http;
pub mod traits;

// Re-export
pub use http::{decode_body, HttpCalendarSource, DEFAULT_API_URL};
pub use traits::CalendarSource;
