use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// No credential available; carries a remediation hint for the operator.
    #[error("{0}")]
    Configuration(String),

    /// The provider call failed (network, timeout, provider error, malformed body).
    #[error("Error calling chat completion API: {0}")]
    Upstream(String),
}

impl ChatError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}
