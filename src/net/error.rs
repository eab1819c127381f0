use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("api error {code}: {msg}")]
    Api { code: i32, msg: String },
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid header {name}: {reason}")]
    Header { name: String, reason: String },
    #[error("no tokio runtime available for network work")]
    NoRuntime,
}

impl NetError {
    /// Short text fit for a toast.
    pub fn user_message(&self) -> String {
        match self {
            NetError::Request(e) if e.is_timeout() => {
                "Request timeout - the server took too long to respond".to_string()
            }
            NetError::Request(e) if e.is_connect() => {
                "Connection error - unable to reach the server".to_string()
            }
            NetError::Request(e) => format!("Network error: {}", e),
            NetError::Status { status, body } => match status {
                401 => "Authentication failed - please sign in again".to_string(),
                403 => "Access forbidden".to_string(),
                429 => "Too many requests - try again shortly".to_string(),
                500..=599 => format!("Server error ({})", status),
                _ => format!("HTTP error {}: {}", status, body),
            },
            NetError::Decode(_) => "Unexpected response from server".to_string(),
            NetError::Api { msg, .. } if !msg.is_empty() => msg.clone(),
            NetError::Api { code, .. } => format!("Request rejected ({})", code),
            NetError::Url(_) | NetError::Header { .. } | NetError::NoRuntime => {
                "Network is misconfigured".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages() {
        let err = NetError::Status {
            status: 429,
            body: String::new(),
        };
        assert_eq!(err.user_message(), "Too many requests - try again shortly");

        let err = NetError::Status {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.user_message(), "Server error (503)");

        let err = NetError::Status {
            status: 404,
            body: "nope".to_string(),
        };
        assert_eq!(err.user_message(), "HTTP error 404: nope");
    }

    #[test]
    fn api_message_prefers_server_text() {
        let err = NetError::Api {
            code: 7,
            msg: "subject closed".to_string(),
        };
        assert_eq!(err.user_message(), "subject closed");

        let err = NetError::Api {
            code: 7,
            msg: String::new(),
        };
        assert_eq!(err.user_message(), "Request rejected (7)");
    }
}
