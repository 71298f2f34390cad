//! Popup for jobclip.
//!
//! On open, finds the active tab and, if it is a job-detail page, pre-fills
//! the form from a scrape of that tab. On submit, sends the form to the
//! background coordinator and reports what Notion said.

pub mod client;
pub mod form;

pub use client::{BackgroundClient, DEFAULT_BACKGROUND_URL};
pub use form::{FormError, JobForm};

use common::{SubmitOutcome, TabId, TabInfo, is_job_detail_url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopupError {
    #[error("could not reach the background: {0}")]
    Http(#[from] reqwest::Error),

    #[error("background returned {status}: {message}")]
    Background { status: u16, message: String },

    #[error("tab {0} did not answer")]
    NoReply(TabId),

    #[error("no active tab")]
    NoActiveTab,

    #[error(transparent)]
    Form(#[from] FormError),
}

pub struct Popup {
    client: BackgroundClient,
    tab: Option<TabInfo>,
    pub form: JobForm,
}

impl Popup {
    /// Opens the popup. A failed scrape leaves the form blank rather than
    /// failing the open.
    pub async fn open(client: BackgroundClient) -> Result<Self, PopupError> {
        let tab = client.active_tab().await?;
        let mut form = JobForm::default();

        match &tab {
            Some(tab) if is_job_detail_url(&tab.url) => {
                match client.get_job_details(tab.id).await {
                    Ok(details) => {
                        tracing::debug!(
                            tab_id = %tab.id,
                            title = %details.title,
                            "Pre-filled form"
                        );
                        form.prefill(&details);
                    }
                    Err(e) => tracing::warn!(tab_id = %tab.id, error = %e, "Could not scrape tab"),
                }
            }
            Some(tab) => tracing::debug!(url = %tab.url, "Active tab is not a job-detail page"),
            None => tracing::debug!("No active tab"),
        }

        Ok(Self { client, tab, form })
    }

    pub fn tab(&self) -> Option<&TabInfo> {
        self.tab.as_ref()
    }

    /// Submits the form. The URL recorded is the active tab's at submit time.
    pub async fn submit(&self) -> Result<SubmitOutcome, PopupError> {
        let tab = self
            .client
            .active_tab()
            .await?
            .ok_or(PopupError::NoActiveTab)?;
        let details = self.form.to_application(&tab.url)?;

        tracing::info!(title = %details.job.title, "Submitting job");
        self.client.add_job_details_to_notion(details).await
    }
}
