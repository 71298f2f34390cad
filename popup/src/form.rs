//! The popup's job-details form.
//!
//! Fields hold raw input text, exactly as a user would see it; typing
//! happens when the form is turned into a [`JobApplicationDetails`].

use common::{JobApplicationDetails, JobDetails};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Used when the type input is left blank.
pub const DEFAULT_JOB_TYPE: &str = "Co-op";

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("pay per hour must be a number, got {0:?}")]
    InvalidPay(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobForm {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    /// `YYYY-MM-DD`, as a date input holds it.
    pub deadline: String,
    pub status: String,
    pub pay_per_hour: String,
    pub notes: String,
}

/// Date part of an ISO timestamp: `2024-12-30T05:00:00.000Z` → `2024-12-30`.
pub fn date_only(deadline: &str) -> &str {
    deadline.split('T').next().unwrap_or(deadline)
}

impl JobForm {
    /// Copies scraped fields into the form. Fields the scraper does not
    /// produce (status, pay, notes) are left alone.
    pub fn prefill(&mut self, details: &JobDetails) {
        self.title = details.title.clone();
        self.company = details.company.clone();
        self.location = details.location.clone();
        self.job_type = details.job_type.clone();
        if let Some(deadline) = details.deadline.as_deref().filter(|d| !d.is_empty()) {
            self.deadline = date_only(deadline).to_string();
        }
    }

    pub fn to_application(&self, url: &str) -> Result<JobApplicationDetails, FormError> {
        let job_type = if self.job_type.is_empty() {
            DEFAULT_JOB_TYPE.to_string()
        } else {
            self.job_type.clone()
        };

        Ok(JobApplicationDetails {
            job: JobDetails {
                title: self.title.clone(),
                company: self.company.clone(),
                location: self.location.clone(),
                job_type,
                deadline: Some(self.deadline.clone()).filter(|d| !d.is_empty()),
                url: url.to_string(),
            },
            status: self.status.clone(),
            pay_per_hour: parse_pay(&self.pay_per_hour)?,
            notes: self.notes.clone(),
        })
    }
}

fn parse_pay(raw: &str) -> Result<Option<f64>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(pay) if pay.is_finite() => Ok(Some(pay)),
        _ => Err(FormError::InvalidPay(raw.to_string())),
    }
}
