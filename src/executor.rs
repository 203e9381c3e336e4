//! Request execution pipeline.
//!
//! The [`Executor`] is the single orchestration point for every API call: it
//! validates inputs, substitutes `[key]` placeholders in the URL pattern,
//! optionally signs the request, performs the GET, and decodes the JSON body
//! into the caller's result shape. Per-endpoint service clients are thin typed
//! wrappers over the convenience methods here.

use bon::Builder;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{AUTHORIZATION, Credentials, Signer, X_IEX_DATE};
use crate::error::Error;
use crate::query::QueryBuilder;
use crate::{CLOUD_HOST, Result, serde_helpers};

/// Connection settings shared by every service client.
///
/// # Example
///
/// ```
/// use iex_client_sdk::auth::Credentials;
/// use iex_client_sdk::executor::Config;
///
/// let config = Config::builder()
///     .credentials(Credentials::new("pk_123", "sk_456"))
///     .sign_requests(true)
///     .build();
/// ```
#[derive(Clone, Debug, Builder)]
pub struct Config {
    /// Base URL of the API, ending with `/`. Defaults to [`crate::CLOUD_HOST`];
    /// use [`crate::SANDBOX_HOST`] for sandbox credentials.
    #[builder(into, default = CLOUD_HOST.to_owned())]
    pub host: String,
    pub credentials: Credentials,
    /// When enabled, every request carries `x-iex-date` and `Authorization`
    /// headers; when disabled, the publishable token travels as a `token`
    /// query parameter instead. Fixed for the lifetime of the client.
    #[builder(default)]
    pub sign_requests: bool,
}

/// Executes logical calls against the API.
///
/// Two modes, fixed at construction: signing-enabled and signing-disabled.
/// Each call is an independent async operation; auth headers are attached to
/// the individual request, so concurrent signed calls cannot race on shared
/// client state.
#[derive(Clone, Debug)]
pub struct Executor {
    client: ReqwestClient,
    host: Url,
    publishable: String,
    signer: Option<Signer>,
}

impl Executor {
    pub fn new(config: &Config) -> Result<Self> {
        let host = Url::parse(&config.host)?;

        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("iex_client_sdk"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        let client = ReqwestClient::builder().default_headers(headers).build()?;

        let signer = config.sign_requests.then(|| {
            Signer::new(
                host.host_str().unwrap_or_default(),
                config.credentials.secret().clone(),
            )
        });

        Ok(Self {
            client,
            host,
            publishable: config.credentials.publishable().to_owned(),
            signer,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Core execute: substitutes `path_params` into `url_pattern`, renders
    /// `query`, performs the GET and decodes the JSON body into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        url_pattern: &str,
        path_params: &[(&str, &str)],
        query: &QueryBuilder,
    ) -> Result<T> {
        let body = self.dispatch(url_pattern, path_params, query).await?;
        serde_helpers::decode(&body)
    }

    /// Call with no path parameters, e.g. `ref-data/symbols`.
    pub async fn no_param_execute<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.execute(url, &[], &self.token_query()).await
    }

    /// Call with a single `[symbol]` path parameter.
    pub async fn symbol_execute<T: DeserializeOwned>(
        &self,
        url_pattern: &str,
        symbol: &str,
    ) -> Result<T> {
        self.execute(url_pattern, &[("symbol", symbol)], &self.token_query())
            .await
    }

    /// Call with a comma-joined `symbols` query parameter. Symbols travel in
    /// the query string, not the path, as exactly one parameter.
    pub async fn symbols_execute<T: DeserializeOwned>(
        &self,
        url_pattern: &str,
        symbols: &[&str],
    ) -> Result<T> {
        let mut query = self.token_query();
        query.add("symbols", symbols.join(","));
        self.execute(url_pattern, &[], &query).await
    }

    /// Call with `[symbol]` and `[last]` path parameters, `last` rendered as
    /// its decimal string form.
    pub async fn symbol_last_execute<T: DeserializeOwned>(
        &self,
        url_pattern: &str,
        symbol: &str,
        last: u32,
    ) -> Result<T> {
        let last = last.to_string();
        self.execute(
            url_pattern,
            &[("symbol", symbol), ("last", &last)],
            &self.token_query(),
        )
        .await
    }

    /// Call with `[symbol]`, `[last]` and `[field]` path parameters. The API
    /// returns the bare field value, so the body is returned as-is rather
    /// than decoded into a structured shape.
    pub async fn symbol_last_field_execute(
        &self,
        url_pattern: &str,
        symbol: &str,
        last: u32,
        field: &str,
    ) -> Result<String> {
        let last = last.to_string();
        self.dispatch(
            url_pattern,
            &[("symbol", symbol), ("last", &last), ("field", field)],
            &self.token_query(),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, path_params, query),
            fields(pattern = url_pattern, status_code)
        )
    )]
    async fn dispatch(
        &self,
        url_pattern: &str,
        path_params: &[(&str, &str)],
        query: &QueryBuilder,
    ) -> Result<String> {
        let path = substitute(url_pattern, path_params)?;
        let path_and_query = format!("{path}{}", query.build());

        let mut request = self
            .client
            .request(Method::GET, format!("{}{path_and_query}", self.host))
            .build()?;

        if let Some(signer) = &self.signer {
            let (iex_date, authorization) = signer.headers(
                &self.publishable,
                Method::GET.as_str(),
                &path_and_query,
                Utc::now().timestamp_millis(),
            )?;
            let headers = request.headers_mut();
            headers.insert(X_IEX_DATE, iex_date.parse()?);
            headers.insert(AUTHORIZATION, authorization.parse()?);
        }

        let response = self.client.execute(request).await?;
        let status_code = response.status();

        #[cfg(feature = "tracing")]
        tracing::Span::current().record("status_code", status_code.as_u16());

        if !status_code.is_success() {
            let message = response.text().await.unwrap_or_default();

            #[cfg(feature = "tracing")]
            tracing::warn!(
                status = %status_code,
                path = %path,
                message = %message,
                "API request failed"
            );

            return Err(Error::status(status_code, Method::GET, path, message));
        }

        Ok(response.text().await?)
    }

    // Token auth fallback: the publishable token is carried as a query
    // parameter only when signing is disabled and the token is non-empty.
    fn token_query(&self) -> QueryBuilder {
        let mut query = QueryBuilder::new();
        if self.signer.is_none() && !self.publishable.is_empty() {
            query.add("token", self.publishable.as_str());
        }
        query
    }
}

/// Pure validation and placeholder substitution. Every supplied key must have
/// a literal `[key]` occurrence in the pattern; every occurrence is replaced
/// with the value. Fails before any I/O, without mutating the caller's inputs.
fn substitute(url_pattern: &str, path_params: &[(&str, &str)]) -> Result<String> {
    if url_pattern.trim().is_empty() {
        return Err(Error::invalid_argument("url pattern cannot be blank"));
    }

    let mut path = url_pattern.to_owned();
    for (key, value) in path_params {
        if key.trim().is_empty() {
            return Err(Error::invalid_argument("path parameter key cannot be blank"));
        }
        if value.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "path parameter `{key}` value cannot be blank"
            )));
        }

        let placeholder = format!("[{key}]");
        if !path.contains(&placeholder) {
            return Err(Error::invalid_argument(format!(
                "url pattern does not contain `{placeholder}`"
            )));
        }
        path = path.replace(&placeholder, value);
    }

    Ok(path)
}
