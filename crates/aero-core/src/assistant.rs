//! Query assistant collaborator.
//!
//! Search mode hands `(query, instruction)` to a [`QueryAssistant`] and
//! appends whatever lines come back. Failures are reported as lines too;
//! search never errors out of the session.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

/// Answers a search query with lines of text.
pub trait QueryAssistant {
    fn ask(&self, query: &str, instruction: &str) -> Vec<String>;
}

impl<T: QueryAssistant + ?Sized> QueryAssistant for Box<T> {
    fn ask(&self, query: &str, instruction: &str) -> Vec<String> {
        (**self).ask(query, instruction)
    }
}

/// Deterministic assistant that needs no network.
///
/// Produces three canned result lines for any non-empty query.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineAssistant;

impl QueryAssistant for OfflineAssistant {
    fn ask(&self, query: &str, _instruction: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        vec![
            format!("Result: {query} — overview"),
            format!("Docs: {query} reference"),
            format!("Guide: using {query} effectively"),
        ]
    }
}

#[derive(Serialize)]
struct AskRequest<'a> {
    query: &'a str,
    instruction: &'a str,
}

#[derive(Deserialize)]
struct AskResponse {
    #[serde(default)]
    lines: Option<Vec<String>>,
    #[serde(default)]
    summary: Option<String>,
}

/// Assistant backed by an HTTP summarization endpoint.
///
/// Sends `POST {endpoint}` with a JSON body `{"query", "instruction"}`.
/// Accepts either JSON (`{"lines": [...]}` or `{"summary": "..."}`) or a
/// plain-text body, which is split into lines.
pub struct HttpAssistant {
    endpoint: String,
    client: reqwest::Client,
    runtime: Runtime,
}

impl HttpAssistant {
    /// # Errors
    /// Returns an error if the HTTP client or its runtime cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start assistant runtime")?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
            runtime,
        })
    }

    async fn request(&self, query: &str, instruction: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskRequest { query, instruction })
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("assistant returned an error")?;
        response.text().await.context("failed to read response")
    }
}

impl QueryAssistant for HttpAssistant {
    fn ask(&self, query: &str, instruction: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        debug!(endpoint = %self.endpoint, query, "asking assistant");
        match self.runtime.block_on(self.request(query, instruction)) {
            Ok(body) => lines_from_body(&body),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "assistant request failed");
                vec![format!("search failed: {e:#}")]
            }
        }
    }
}

/// Turns a response body into transcript lines.
fn lines_from_body(body: &str) -> Vec<String> {
    if let Ok(parsed) = serde_json::from_str::<AskResponse>(body) {
        if let Some(lines) = parsed.lines {
            return lines;
        }
        if let Some(summary) = parsed.summary {
            return split_lines(&summary);
        }
    }
    split_lines(body)
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_assistant_results() {
        let lines = OfflineAssistant.ask("weather", "summarize");
        assert_eq!(
            lines,
            [
                "Result: weather — overview",
                "Docs: weather reference",
                "Guide: using weather effectively",
            ]
        );
    }

    #[test]
    fn test_offline_assistant_empty_query() {
        assert!(OfflineAssistant.ask("", "summarize").is_empty());
    }

    #[test]
    fn test_lines_from_json_lines() {
        let body = r#"{"lines": ["first", "second"]}"#;
        assert_eq!(lines_from_body(body), ["first", "second"]);
    }

    #[test]
    fn test_lines_from_json_summary() {
        let body = r#"{"summary": "a\n\nb\n"}"#;
        assert_eq!(lines_from_body(body), ["a", "b"]);
    }

    #[test]
    fn test_lines_from_plain_text() {
        assert_eq!(lines_from_body("one\r\ntwo  \n\n"), ["one", "two"]);
    }

    #[test]
    fn test_http_assistant_reports_failure_as_line() {
        // Nothing listens on the discard port.
        let assistant =
            HttpAssistant::new("http://127.0.0.1:9/summarize", Duration::from_secs(2)).unwrap();
        let lines = assistant.ask("weather", "summarize");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("search failed: "));
    }

    #[test]
    fn test_http_assistant_skips_empty_query() {
        let assistant =
            HttpAssistant::new("http://127.0.0.1:9/summarize", Duration::from_secs(2)).unwrap();
        assert!(assistant.ask("", "summarize").is_empty());
    }
}
