//! Field extraction from a parsed job-detail page.

use crate::deadline::{format_deadline, parse_deadline};
use crate::selectors::{
    self, COMPANY_SEL, DEADLINE_SEL, DESCRIPTION_SEL, DETAIL_CONTAINER_SEL, DETAIL_NAME_SEL,
    DETAIL_VALUE_SEL, JOB_TYPE_SEL, LOCATION_SEL, TITLE_SEL,
};
use crate::ScrapeError;
use common::JobDetails;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// A labelled value from the "additional details" block of a posting.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdditionalDetail {
    pub name: String,
    pub value: String,
}

/// Scrapes the fields the popup pre-fills. `url` is the page's own URL.
pub fn scrape_job_details(document: &Html, url: &str) -> Result<JobDetails, ScrapeError> {
    let deadline = first_text(document.root_element(), &DEADLINE_SEL).and_then(|text| {
        let parsed = parse_deadline(&text).map(format_deadline);
        if parsed.is_none() {
            tracing::warn!(deadline = %text, "Unrecognised deadline text, leaving it empty");
        }
        parsed
    });

    Ok(JobDetails {
        title: required(document, "title", &TITLE_SEL, selectors::TITLE)?,
        company: required(document, "company", &COMPANY_SEL, selectors::COMPANY)?,
        location: required(document, "location", &LOCATION_SEL, selectors::LOCATION)?,
        job_type: required(document, "type", &JOB_TYPE_SEL, selectors::JOB_TYPE)?,
        deadline,
        url: url.to_string(),
    })
}

/// Full posting description, if the page renders one.
pub fn scrape_description(document: &Html) -> Option<String> {
    first_text(document.root_element(), &DESCRIPTION_SEL).filter(|text| !text.is_empty())
}

/// Name/value pairs from every "additional details" block. Blocks missing
/// either half are skipped.
pub fn scrape_additional_details(document: &Html) -> Vec<AdditionalDetail> {
    document
        .select(&DETAIL_CONTAINER_SEL)
        .filter_map(|container| {
            let name = first_text(container, &DETAIL_NAME_SEL);
            let value = first_text(container, &DETAIL_VALUE_SEL);
            match (name, value) {
                (Some(name), Some(value)) => Some(AdditionalDetail { name, value }),
                _ => {
                    tracing::debug!("Skipping incomplete additional-details block");
                    None
                }
            }
        })
        .collect()
}

fn required(
    document: &Html,
    field: &'static str,
    selector: &Selector,
    css: &'static str,
) -> Result<String, ScrapeError> {
    first_text(document.root_element(), selector).ok_or(ScrapeError::MissingElement {
        field,
        selector: css,
    })
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

fn element_text(element: ElementRef<'_>) -> String {
    let raw = element.text().collect::<String>();
    WHITESPACE.replace_all(raw.trim(), " ").into_owned()
}
