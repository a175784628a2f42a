use serde::{Deserialize, Serialize};

/// Generic acknowledgment record.
///
/// Returned by operations that acknowledge without echoing a pet (the form
/// update), and used as the body shape for error responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub code: u16,
    pub message: String,
}

impl Ack {
    /// Create an acknowledgment with the given code and message.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The canonical success acknowledgment.
    pub fn success() -> Self {
        Self::new(200, "SUCCESS")
    }
}
