//! Runtime messages exchanged between components.
//!
//! Messages are JSON objects tagged by an `action` field. The set of
//! actions is closed: anything else is rejected when decoding, in every
//! component, so a typo never silently disappears.

use crate::JobApplicationDetails;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const GET_JOB_DETAILS: &str = "getJobDetails";
pub const ADD_JOB_DETAILS_TO_NOTION: &str = "addJobDetailsToNotion";

const ACTIONS: [&str; 2] = [GET_JOB_DETAILS, ADD_JOB_DETAILS_TO_NOTION];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "action")]
pub enum RuntimeMessage {
    /// Popup → content script: scrape the current page.
    #[serde(rename = "getJobDetails")]
    GetJobDetails,
    /// Popup → background: file this application in Notion.
    #[serde(rename = "addJobDetailsToNotion")]
    AddJobDetailsToNotion {
        #[serde(rename = "jobDetails")]
        job_details: JobApplicationDetails,
    },
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("message has no action tag")]
    MissingAction,

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("malformed {action} message: {source}")]
    Malformed {
        action: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RuntimeMessage {
    pub fn action(&self) -> &'static str {
        match self {
            RuntimeMessage::GetJobDetails => GET_JOB_DETAILS,
            RuntimeMessage::AddJobDetailsToNotion { .. } => ADD_JOB_DETAILS_TO_NOTION,
        }
    }

    /// Decodes a message, telling unknown actions apart from bad payloads.
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        let action = value
            .get("action")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingAction)?
            .to_string();

        if !ACTIONS.contains(&action.as_str()) {
            return Err(ProtocolError::UnknownAction(action));
        }

        serde_json::from_value(value).map_err(|source| ProtocolError::Malformed { action, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JobDetails;
    use serde_json::json;

    #[test]
    fn test_get_job_details_wire_shape() {
        let value = serde_json::to_value(RuntimeMessage::GetJobDetails).unwrap();
        assert_eq!(value, json!({ "action": "getJobDetails" }));
    }

    #[test]
    fn test_add_message_carries_job_details_key() {
        let message = RuntimeMessage::AddJobDetailsToNotion {
            job_details: JobApplicationDetails {
                job: JobDetails {
                    title: "Data Analyst".into(),
                    ..Default::default()
                },
                status: "Interested".into(),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["action"], json!("addJobDetailsToNotion"));
        assert_eq!(value["jobDetails"]["title"], json!("Data Analyst"));

        let decoded = RuntimeMessage::from_value(value).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let err = RuntimeMessage::from_value(json!({ "action": "addJobDetailsToSupabase" }))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownAction(a) if a == "addJobDetailsToSupabase"));
    }

    #[test]
    fn test_missing_action_is_rejected() {
        let err = RuntimeMessage::from_value(json!({ "jobDetails": {} })).unwrap_err();
        assert!(matches!(err, ProtocolError::MissingAction));
    }

    #[test]
    fn test_known_action_with_bad_payload_is_malformed() {
        let err = RuntimeMessage::from_value(json!({ "action": "addJobDetailsToNotion" }))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { .. }));
    }
}
