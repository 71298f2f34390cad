//! Minimal Notion REST client: create a page in the target database and
//! read that database's schema.

mod body;

pub use body::CreatePageRequest;

use crate::config::Config;
use common::JobApplicationDetails;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("request to Notion failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Notion returned {status} ({}): {message}", code.as_deref().unwrap_or("no code"))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

/// Error object Notion returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// The fields we care about from a created page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreatedPage {
    pub id: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NotionOptions {
    pub token: String,
    pub database_id: String,
    pub base_url: String,
}

impl From<&Config> for NotionOptions {
    fn from(config: &Config) -> Self {
        Self {
            token: config.notion_token.clone(),
            database_id: config.database_id.clone(),
            base_url: config.notion_api_url.trim_end_matches('/').to_string(),
        }
    }
}

pub struct NotionClient {
    client: reqwest::Client,
    options: NotionOptions,
}

impl NotionClient {
    pub fn new(options: NotionOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            options,
        }
    }

    /// Adds one row to the database. A single attempt; no retries.
    pub async fn create_page(
        &self,
        details: &JobApplicationDetails,
    ) -> Result<CreatedPage, NotionError> {
        let url = format!("{}/v1/pages", self.options.base_url);
        let body = CreatePageRequest::new(&self.options.database_id, details);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.options.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let page: CreatedPage = resp.json().await?;
        tracing::debug!(page_id = %page.id, "Notion page created");
        Ok(page)
    }

    /// Fetches the database object, including its property schema.
    pub async fn retrieve_database(&self) -> Result<Value, NotionError> {
        let url = format!(
            "{}/v1/databases/{}",
            self.options.base_url, self.options.database_id
        );

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.options.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, NotionError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let parsed: Option<ApiErrorBody> = serde_json::from_str(&text).ok();
    let (code, message) = match parsed {
        Some(ApiErrorBody { code, message }) => (code, message.unwrap_or(text)),
        None => (None, text),
    };

    Err(NotionError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}
