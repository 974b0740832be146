//! PostgREST client for a hosted Supabase table.

use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

use crate::books::{Book, NewBook};
use crate::config::CatalogConfig;
use crate::error::RemoteError;
use crate::table::BookTable;

/// `books` table served by PostgREST at `{url}/rest/v1/{table}`.
#[derive(Clone, Debug)]
pub struct RestTable {
    http: Client,
    config: CatalogConfig,
}

/// Error body PostgREST sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl RestTable {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured HTTP client (timeouts, proxy settings).
    pub fn with_client(http: Client, config: CatalogConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }
}

impl PartialEq for RestTable {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl BookTable for RestTable {
    async fn select_all_by_title(&self) -> Result<Vec<Book>, RemoteError> {
        tracing::debug!(table = %self.config.table, "selecting rows ordered by title");
        let request = self
            .http
            .get(self.endpoint())
            .query(&[("select", "*"), ("order", "title.asc")]);
        let response = check(self.authorized(request).send().await?).await?;
        response
            .json::<Vec<Book>>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn insert(&self, book: NewBook) -> Result<(), RemoteError> {
        tracing::debug!(table = %self.config.table, title = %book.title, "inserting row");
        let request = self
            .http
            .post(self.endpoint())
            .header("Prefer", "return=minimal")
            .json(&[book]);
        check(self.authorized(request).send().await?).await?;
        Ok(())
    }
}

/// Pass successful responses through; turn the rest into [`RemoteError`].
async fn check(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let error = error_from_body(status.as_u16(), &body);
    tracing::warn!(status = status.as_u16(), "catalog request failed: {}", error);
    Err(error)
}

fn error_from_body(status: u16, body: &str) -> RemoteError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            message: Some(message),
            code,
            details,
            hint,
        }) if !message.trim().is_empty() => RemoteError::Api {
            message,
            code,
            details,
            hint,
        },
        _ => RemoteError::Status(status),
    }
}
