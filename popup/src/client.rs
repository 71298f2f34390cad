use crate::PopupError;
use common::{JobApplicationDetails, JobDetails, RuntimeMessage, SubmitOutcome, TabId, TabInfo};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub const DEFAULT_BACKGROUND_URL: &str = "http://127.0.0.1:3000";

/// HTTP client for the background coordinator's local API.
#[derive(Debug, Clone)]
pub struct BackgroundClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackgroundClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `None` when the browser has not reported any tab yet.
    pub async fn active_tab(&self) -> Result<Option<TabInfo>, PopupError> {
        let resp = self
            .client
            .get(format!("{}/tabs/active", self.base_url))
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        read_json(resp).await.map(Some)
    }

    /// Asks the tab's content script to scrape the page.
    pub async fn get_job_details(&self, tab_id: TabId) -> Result<JobDetails, PopupError> {
        let resp = self
            .client
            .post(format!("{}/tabs/{}/messages", self.base_url, tab_id))
            .json(&RuntimeMessage::GetJobDetails)
            .send()
            .await?;

        if resp.status() == StatusCode::NO_CONTENT {
            return Err(PopupError::NoReply(tab_id));
        }
        read_json(resp).await
    }

    pub async fn add_job_details_to_notion(
        &self,
        details: JobApplicationDetails,
    ) -> Result<SubmitOutcome, PopupError> {
        let message = RuntimeMessage::AddJobDetailsToNotion {
            job_details: details,
        };
        let resp = self
            .client
            .post(format!("{}/runtime/messages", self.base_url))
            .json(&message)
            .send()
            .await?;

        read_json(resp).await
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, PopupError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["error"].as_str().map(str::to_string))
            .unwrap_or(body);
        return Err(PopupError::Background {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json().await?)
}
