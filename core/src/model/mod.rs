pub mod calendar;
pub mod filter;
pub mod show;
pub mod status;
