//! HTTP fetch of the judge's submit page.
//!
//! One GET per call, no retries and no status checks: whatever body comes
//! back is handed to the extractor. Error pages therefore surface as
//! [`crate::LangError::BlockNotFound`] rather than as HTTP errors.

use std::io::IsTerminal;
use std::time::Duration;

use crate::extract::extract_langs;
use crate::types::{LangMap, LangResult};

/// Status line printed before each fetch.
pub const STATUS_LINE: &str = "Getting language list...";

/// Render [`STATUS_LINE`], in cyan when `color` is set.
pub fn status_line(color: bool) -> String {
    if color {
        format!("\x1b[36m{STATUS_LINE}\x1b[0m")
    } else {
        STATUS_LINE.to_string()
    }
}

// NO_COLOR: https://no-color.org
fn stdout_wants_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

const DEFAULT_USER_AGENT: &str = concat!("cf-langs/", env!("CARGO_PKG_VERSION"));

/// Options for [`LangClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Print [`STATUS_LINE`] to stdout before fetching, cyan on a terminal.
    pub announce: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            announce: true,
        }
    }
}

/// Fetches and parses the language selector of a submit page.
#[derive(Debug, Clone)]
pub struct LangClient {
    client: reqwest::Client,
    announce: bool,
}

impl LangClient {
    /// Build a client from `config`.
    pub fn new(config: ClientConfig) -> LangResult<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            announce: config.announce,
        })
    }

    /// Fetch `url` and return the language id to name mapping it lists.
    ///
    /// Network errors come back as [`crate::LangError::Http`], extraction
    /// failures as `BlockNotFound` or `NoLanguages`.
    /// No partial map is ever returned.
    pub async fn get_lang_list(&self, url: &str) -> LangResult<LangMap> {
        if self.announce {
            println!("{}", status_line(stdout_wants_color()));
        }
        tracing::debug!(%url, "fetching language list");

        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        tracing::debug!(status, bytes = body.len(), "received submit page");

        extract_langs(&body)
    }
}

/// Fetch with a default-configured client.
pub async fn get_lang_list(url: &str) -> LangResult<LangMap> {
    LangClient::new(ClientConfig::default())?
        .get_lang_list(url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LangError;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.timeout.is_none());
        assert!(config.announce);
        assert!(config.user_agent.starts_with("cf-langs/"));
    }

    #[test]
    fn test_status_line_colour() {
        assert_eq!(status_line(false), "Getting language list...");
        assert_eq!(
            status_line(true),
            "\x1b[36mGetting language list...\x1b[0m"
        );
    }

    #[test]
    fn test_client_creation_with_timeout() {
        let config = ClientConfig {
            timeout: Some(Duration::from_secs(5)),
            announce: false,
            ..ClientConfig::default()
        };
        assert!(LangClient::new(config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = LangClient::new(ClientConfig {
            timeout: Some(Duration::from_secs(2)),
            announce: false,
            ..ClientConfig::default()
        })
        .unwrap();
        let err = client.get_lang_list("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, LangError::Http(_)));
    }
}
