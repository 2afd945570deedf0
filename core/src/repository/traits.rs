use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::calendar::CalendarResponse;
use crate::model::filter::Month;

/// Where calendar data comes from. One call per month, no caching.
#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn fetch(&self, month: Month) -> Result<CalendarResponse, FetchError>;
}
