use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Method;

use crate::{
    decode::decode_result_set,
    encode,
    row_map::{map_rows, FromRow},
    ClientOptions, DbFlags, Parameter, QueryResultSet, Result, RqliteError,
};

/// Builds the GET query path for one statement.
///
/// With flags: `/db/query?timings&q=...`; without: `/db/query?q=...`.
fn query_path(sql: &str, flags: DbFlags) -> String {
    let encoded = utf8_percent_encode(sql, NON_ALPHANUMERIC);
    let suffix = flags.to_query_string();
    if suffix.is_empty() {
        format!("/db/query?q={encoded}")
    } else {
        format!("/db/query{suffix}&q={encoded}")
    }
}

/// HTTP client for a single rqlite node.
///
/// Each method performs exactly one HTTP exchange; there is no internal
/// retry, caching or shared mutable state, and the client is cheap to
/// clone for concurrent use.
#[derive(Clone, Debug)]
pub struct RqliteClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl RqliteClient {
    /// Creates a client for the node reachable at `base_url`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rqlite_http::RqliteClient;
    ///
    /// let db = RqliteClient::new("http://localhost:4001");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    /// Creates a client over an externally configured `reqwest::Client`,
    /// for callers that manage pooling or TLS themselves.
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http,
            base_url,
            options: ClientOptions::default(),
        }
    }

    /// Applies client options such as the request timeout.
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Pings the node and returns the version it reports.
    ///
    /// A response without the `X-Rqlite-Version` header yields an empty
    /// string rather than an error; a liveness probe should not fail on a
    /// missing header. Transport failures still surface.
    pub async fn ping(&self) -> Result<String> {
        let url = format!("{}/status", self.base_url);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "pinging rqlite node");

        let response = self
            .http
            .get(&url)
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .send()
            .await
            .map_err(RqliteError::from)?;

        let version = response
            .headers()
            .get("X-Rqlite-Version")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        Ok(version)
    }

    /// Runs one query statement and returns its result set.
    pub async fn query(&self, sql: &str, flags: DbFlags) -> Result<QueryResultSet> {
        let path = query_path(sql, flags);
        let body = self.exchange(Method::GET, &path, None).await?;
        decode_result_set(&body)
    }

    /// Executes one or more statements and returns one result per statement.
    ///
    /// A SQL error in one statement is reported on that statement's
    /// [`QueryResult`](crate::QueryResult) and does not fail the call;
    /// inspect [`QueryResultSet::has_error`].
    pub async fn execute<S: AsRef<str>>(
        &self,
        statements: &[S],
        flags: DbFlags,
    ) -> Result<QueryResultSet> {
        let path = format!("/db/execute{}", flags.to_query_string());
        let body = encode::plain_body(statements);
        let text = self.exchange(Method::POST, &path, Some(body)).await?;
        decode_result_set(&text)
    }

    /// Runs one parametrized query statement.
    ///
    /// The parameter list must be non-empty and either all positional or
    /// all named. The request always carries the `timings` argument.
    pub async fn query_with_params(
        &self,
        sql: &str,
        params: &[Parameter],
    ) -> Result<QueryResultSet> {
        let body = encode::parametrized_body(sql, params)?;
        let text = self
            .exchange(Method::POST, "/db/query?timings", Some(body))
            .await?;
        decode_result_set(&text)
    }

    /// Runs one query statement and maps its rows onto `T`.
    ///
    /// Fails with [`RqliteError::MultipleResults`] when the response
    /// carries more than one result, and with [`RqliteError::Statement`]
    /// when the statement itself reported an error.
    pub async fn query_as<T: FromRow>(&self, sql: &str) -> Result<Vec<T>> {
        let set = self.query(sql, DbFlags::NONE).await?;
        if set.results.len() > 1 {
            return Err(RqliteError::MultipleResults(set.results.len()));
        }
        let Some(result) = set.results.first() else {
            return Ok(Vec::new());
        };
        if let Some(error) = result.error.as_ref().filter(|error| !error.is_empty()) {
            return Err(RqliteError::Statement(error.clone()));
        }
        map_rows(result)
    }

    async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);

        #[cfg(feature = "tracing")]
        tracing::debug!(%method, %url, "sending rqlite request");

        let mut request = self
            .http
            .request(method, &url)
            .timeout(Duration::from_millis(self.options.timeout_ms));
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(RqliteError::from)?;
        let status = response.status();
        let text = response.text().await.map_err(RqliteError::from)?;

        if !status.is_success() {
            return Err(RqliteError::Http {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::query_path;
    use crate::DbFlags;

    #[test]
    fn query_path_without_flags_starts_at_q() {
        assert_eq!(
            query_path("SELECT 1", DbFlags::NONE),
            "/db/query?q=SELECT%201"
        );
    }

    #[test]
    fn query_path_with_flags_appends_q() {
        assert_eq!(
            query_path("SELECT 1", DbFlags::NONE.with_timings()),
            "/db/query?timings&q=SELECT%201"
        );
    }

    #[test]
    fn query_path_escapes_reserved_characters() {
        let path = query_path("SELECT * FROM t WHERE name = 'a&b'", DbFlags::NONE);
        assert!(!path.contains('\''));
        assert!(path.ends_with("SELECT%20%2A%20FROM%20t%20WHERE%20name%20%3D%20%27a%26b%27"));
    }
}
