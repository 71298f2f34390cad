//! The background coordinator.
//!
//! Injects the content script into job-detail tabs as they are navigated
//! to, routes popup requests to those tabs, and files submitted
//! applications in Notion.

use crate::error::{CoordinatorError, Result};
use crate::notion::NotionClient;
use crate::tabs::{Injection, TabRegistry};
use common::{
    JobApplicationDetails, JobDetails, NavigationEvent, RuntimeMessage, SubmitOutcome, TabId,
    TabInfo, is_job_detail_url,
};

pub struct Coordinator {
    tabs: TabRegistry,
    notion: NotionClient,
}

impl Coordinator {
    pub fn new(notion: NotionClient) -> Self {
        Self {
            tabs: TabRegistry::new(),
            notion,
        }
    }

    pub fn tabs(&self) -> &TabRegistry {
        &self.tabs
    }

    pub fn notion(&self) -> &NotionClient {
        &self.notion
    }

    /// Returns true when this navigation attached a new content script.
    pub fn on_navigation(&self, event: NavigationEvent) -> bool {
        let tab_id = event.tab_id;
        let matches = is_job_detail_url(&event.url);
        tracing::debug!(%tab_id, url = %event.url, matches, "Navigation");
        self.tabs.record_navigation(event);

        if !matches {
            return false;
        }

        match self.tabs.inject(tab_id) {
            Injection::Injected => {
                tracing::info!(%tab_id, "Injected content script");
                true
            }
            Injection::AlreadyInjected => {
                tracing::debug!(%tab_id, "Content script already present");
                false
            }
            Injection::UnknownTab => false,
        }
    }

    pub fn active_tab(&self) -> Option<TabInfo> {
        self.tabs.active()
    }

    /// Sends a message to a tab's content script. `Ok(None)` means the
    /// script received it but had nothing to say.
    pub fn send_to_tab(
        &self,
        tab_id: TabId,
        message: &RuntimeMessage,
    ) -> Result<Option<JobDetails>> {
        let replies = self
            .tabs
            .send(tab_id, message)
            .ok_or(CoordinatorError::NoSuchTab(tab_id))?;

        if self.tabs.listener_count(tab_id) == 0 {
            return Err(CoordinatorError::NoListener(tab_id));
        }
        if replies.len() > 1 {
            tracing::warn!(%tab_id, replies = replies.len(), "More than one reply from tab");
        }

        match replies.into_iter().next() {
            Some(reply) => Ok(Some(reply?)),
            None => Ok(None),
        }
    }

    /// Handles a runtime message addressed to the background. Messages for
    /// other components are ignored.
    pub async fn handle_message(&self, message: RuntimeMessage) -> Option<SubmitOutcome> {
        match message {
            RuntimeMessage::AddJobDetailsToNotion { job_details } => {
                Some(self.add_job_details_to_notion(&job_details).await)
            }
            other => {
                tracing::trace!(action = other.action(), "Ignoring message");
                None
            }
        }
    }

    pub async fn add_job_details_to_notion(
        &self,
        details: &JobApplicationDetails,
    ) -> SubmitOutcome {
        tracing::info!(
            title = %details.job.title,
            status = %details.status,
            "Adding job to Notion"
        );

        match self.notion.create_page(details).await {
            Ok(page) => {
                tracing::info!(page_id = %page.id, "Added job to Notion");
                SubmitOutcome::Created {
                    page_id: page.id,
                    url: page.url,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to add row");
                SubmitOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
