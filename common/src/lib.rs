//! Records and message types shared by the popup, the background
//! coordinator and the page scraper.
//!
//! The three components never share memory; every value here crosses a
//! process or task boundary as JSON.

pub mod protocol;

pub use protocol::{ProtocolError, RuntimeMessage};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path fragment that identifies a job-detail page on the portal.
pub const JOB_DETAIL_PATH: &str = "/students/app/jobs/detail/";

/// Returns true when `url` points at a job-detail view.
pub fn is_job_detail_url(url: &str) -> bool {
    url.contains(JOB_DETAIL_PATH)
}

/// Fields scraped from a job-detail page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct JobDetails {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    /// ISO-8601 UTC timestamp, e.g. `2024-12-30T05:00:00.000Z`.
    pub deadline: Option<String>,
    pub url: String,
}

/// A scraped posting plus what the user filled in about their application.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct JobApplicationDetails {
    #[serde(flatten)]
    pub job: JobDetails,
    pub status: String,
    // 0 is a real wage; only None means "not given"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_per_hour: Option<f64>,
    pub notes: String,
}

/// Browser tab identifier.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a tab arrived at its current URL.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    /// In-app route change; the page and its listeners survive.
    #[default]
    HistoryStateUpdated,
    /// Full page load; previously injected listeners are gone.
    Committed,
}

/// Navigation notification forwarded by the browser shim.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NavigationEvent {
    pub tab_id: TabId,
    pub url: String,
    /// Rendered HTML of the tab at the time of the event.
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub kind: NavigationKind,
}

/// What the popup learns about the active tab.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TabInfo {
    pub id: TabId,
    pub url: String,
}

/// Reply to an `addJobDetailsToNotion` message.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Created { page_id: String, url: Option<String> },
    Failed { error: String },
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created { .. })
    }
}
