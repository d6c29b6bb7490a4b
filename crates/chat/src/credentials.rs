//! Credential lookup for the upstream provider.

/// Environment variable holding the provider API key by default.
pub const DEFAULT_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Supplies the provider credential at call time.
pub trait CredentialProvider: Send + Sync {
    /// The current credential, if any. Empty values count as absent.
    fn api_key(&self) -> Option<String>;

    /// Human-readable name of where the credential comes from.
    fn source(&self) -> String;
}

/// Reads the credential from the process environment on every call, so a key
/// exported after startup is honored by the next request.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR)
    }
}

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|v| !v.is_empty())
    }

    fn source(&self) -> String {
        format!("{} environment variable", self.var)
    }
}

/// Fixed credential (or fixed absence). Used by tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    key: Option<String>,
}

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    pub fn absent() -> Self {
        Self { key: None }
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.key.clone().filter(|v| !v.is_empty())
    }

    fn source(&self) -> String {
        "static API key".to_string()
    }
}
