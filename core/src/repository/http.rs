use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::model::calendar::CalendarResponse;
use crate::model::filter::Month;
use crate::repository::traits::CalendarSource;

pub const DEFAULT_API_URL: &str =
    "https://zw5imfeelcfhupz6ctfpzgnqem0hxvdj.lambda-url.ap-northeast-1.on.aws";

#[derive(Clone)]
pub struct HttpCalendarSource {
    http: Client,
    api_url: String,
}

impl HttpCalendarSource {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl CalendarSource for HttpCalendarSource {
    async fn fetch(&self, month: Month) -> Result<CalendarResponse, FetchError> {
        info!(month = %month, url = %self.api_url, "fetching calendar");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("month", month.as_param())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "calendar response");

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        decode_body(&body)
    }
}

pub fn decode_body(body: &str) -> Result<CalendarResponse, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body() {
        let response = decode_body(r#"{"masterData": {"3": {}}}"#).unwrap();
        assert_eq!(response.into_dataset().len(), 1);
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode_body("<html>502</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_wrong_shape() {
        assert!(decode_body(r#"{"masterData": [1, 2, 3]}"#).is_err());
    }
}
