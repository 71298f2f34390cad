use crate::{scrape_job_details, ScrapeError};
use common::{JobDetails, RuntimeMessage};
use scraper::Html;

/// Message listener attached to a job-detail tab.
///
/// Holds no page state of its own: every request is answered from the
/// document the tab holds at that moment, so in-app navigation is picked up
/// without re-attaching. Whether a tab already has a listener is tracked by
/// whoever injects it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentScript;

impl ContentScript {
    pub fn new() -> Self {
        tracing::debug!("Content script attached");
        ContentScript
    }

    /// Answers `getJobDetails`; returns `None` for actions meant for other
    /// components.
    pub fn on_message(
        &self,
        message: &RuntimeMessage,
        url: &str,
        document: &str,
    ) -> Option<Result<JobDetails, ScrapeError>> {
        match message {
            RuntimeMessage::GetJobDetails => {
                tracing::debug!(url, "Scraping job details");
                let html = Html::parse_document(document);
                Some(scrape_job_details(&html, url))
            }
            other => {
                tracing::trace!(action = other.action(), "Ignoring message");
                None
            }
        }
    }
}
