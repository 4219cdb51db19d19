use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Authenticated session for the backend API
///
/// Holds the opaque bearer token for one signed-in user. The session is
/// passed explicitly to [`ApiClient::new`](crate::api::ApiClient::new);
/// nothing in this crate reads tokens from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    token: String,
}

impl Session {
    /// Create a session from an already-issued bearer token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The bearer token, as sent in the Authorization header
    pub fn token(&self) -> &str {
        &self.token
    }

    fn session_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fleet-track").join("session.json"))
    }

    /// Load a previously saved session, if any
    pub fn load() -> Option<Self> {
        let path = Self::session_path()?;
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Persist the session for the next run
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::session_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, serde_json::to_string_pretty(self)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_roundtrip() {
        let session = Session::new("eyJhbGciOiJIUzI1NiJ9.test");
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.token(), session.token());
    }
}
