//! Outcome of the backend's OAuth callback.
//!
//! After the Spotify redirect the backend sends the browser back to the page
//! with `?success=true` or `?error=<code>`. The login prompt reads it to tell
//! the user why they are still signed out.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCallback {
    /// Backend reported a completed token exchange.
    Succeeded,
    /// Backend reported a failure with this code.
    Failed(String),
}

impl AuthCallback {
    /// Parse a location query string, with or without the leading `?`.
    /// Returns `None` when the query carries no callback outcome.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params: HashMap<String, String> = serde_urlencoded::from_str(query).ok()?;

        if let Some(code) = params.get("error").filter(|c| !c.is_empty()) {
            return Some(AuthCallback::Failed(code.clone()));
        }
        match params.get("success").map(String::as_str) {
            Some("true") => Some(AuthCallback::Succeeded),
            _ => None,
        }
    }

    /// Notice for a visitor who landed here and is still anonymous.
    pub fn anonymous_notice(&self) -> String {
        match self {
            AuthCallback::Succeeded => {
                "Login finished but no session was found. Please try again.".to_string()
            }
            AuthCallback::Failed(code) => match code.as_str() {
                "access_denied" => "Spotify login was cancelled.".to_string(),
                "invalid_state" => "Login could not be verified. Please try again.".to_string(),
                "token_exchange_failed" => {
                    "Spotify accepted the login but the token exchange failed.".to_string()
                }
                "no_code" => "Spotify did not return an authorization code.".to_string(),
                other => format!("Spotify login failed: {other}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_is_extracted() {
        assert_eq!(
            AuthCallback::from_query("?error=access_denied"),
            Some(AuthCallback::Failed("access_denied".to_string()))
        );
        assert_eq!(
            AuthCallback::from_query("error=invalid_state&foo=1"),
            Some(AuthCallback::Failed("invalid_state".to_string()))
        );
    }

    #[test]
    fn error_wins_over_success() {
        assert_eq!(
            AuthCallback::from_query("?success=true&error=no_code"),
            Some(AuthCallback::Failed("no_code".to_string()))
        );
    }

    #[test]
    fn success_flag() {
        assert_eq!(
            AuthCallback::from_query("?success=true"),
            Some(AuthCallback::Succeeded)
        );
        assert_eq!(AuthCallback::from_query("?success=false"), None);
    }

    #[test]
    fn unrelated_queries_carry_nothing() {
        assert_eq!(AuthCallback::from_query(""), None);
        assert_eq!(AuthCallback::from_query("?"), None);
        assert_eq!(AuthCallback::from_query("?tab=artists"), None);
        assert_eq!(AuthCallback::from_query("?error="), None);
    }

    #[test]
    fn notices() {
        assert_eq!(
            AuthCallback::Failed("access_denied".to_string()).anonymous_notice(),
            "Spotify login was cancelled."
        );
        assert_eq!(
            AuthCallback::Failed("token_exchange_failed".to_string()).anonymous_notice(),
            "Spotify accepted the login but the token exchange failed."
        );
        assert_eq!(
            AuthCallback::Failed("server_error".to_string()).anonymous_notice(),
            "Spotify login failed: server_error"
        );
        assert!(AuthCallback::Succeeded
            .anonymous_notice()
            .starts_with("Login finished"));
    }

    #[test]
    fn percent_encoded_codes_are_decoded() {
        assert_eq!(
            AuthCallback::from_query("?error=bad%20thing"),
            Some(AuthCallback::Failed("bad thing".to_string()))
        );
    }
}
