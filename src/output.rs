//! JSON output envelope and exit codes.

use serde::Serialize;

/// Exit code constants. The process always exits with `step_status.code`.
pub mod codes {
    /// Success or partial success.
    pub const SUCCESS: i32 = 0;

    /// Missing or invalid address input; nothing valid to look up.
    pub const INPUT_ERROR: i32 = 1;

    /// Missing credential, or every lookup failed.
    pub const API_ERROR: i32 = 2;
}

/// Status block of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepStatus {
    pub code: i32,
    pub message: String,
}

/// Payload slot that is always an object, never `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiObject<T> {
    Value(T),
    Empty {},
}

/// Top-level output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Output<T> {
    pub step_status: StepStatus,
    pub api_object: ApiObject<T>,
}

impl<T: Serialize> Output<T> {
    /// Build an output document; a missing payload becomes `{}`.
    pub fn new(code: i32, message: impl Into<String>, api_object: Option<T>) -> Self {
        Self {
            step_status: StepStatus {
                code,
                message: message.into(),
            },
            api_object: match api_object {
                Some(value) => ApiObject::Value(value),
                None => ApiObject::Empty {},
            },
        }
    }

    /// Failure with an empty payload.
    pub fn failed(code: i32, message: impl Into<String>) -> Self {
        Self::new(code, message, None)
    }

    pub fn code(&self) -> i32 {
        self.step_status.code
    }

    pub fn message(&self) -> &str {
        &self.step_status.message
    }

    /// Payload, if one was attached.
    pub fn payload(&self) -> Option<&T> {
        match &self.api_object {
            ApiObject::Value(value) => Some(value),
            ApiObject::Empty {} => None,
        }
    }

    /// Pretty-printed JSON, two-space indented.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
