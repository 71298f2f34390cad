//! Page scraper for NUWorks job-detail pages.
//!
//! Reads a fixed set of DOM nodes out of a rendered job-detail page and
//! turns them into a [`common::JobDetails`]. The [`ContentScript`] is the
//! listener the background attaches to a tab; it answers `getJobDetails`
//! requests against that tab's current document.

pub mod content_script;
pub mod deadline;
pub mod extract;
pub mod selectors;

pub use content_script::ContentScript;
pub use extract::{
    scrape_additional_details, scrape_description, scrape_job_details, AdditionalDetail,
};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// A field the page always renders was not found.
    #[error("required element for {field} not found: {selector}")]
    MissingElement {
        field: &'static str,
        selector: &'static str,
    },
}
