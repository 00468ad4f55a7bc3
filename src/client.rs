//! Europeana Search API client and request execution.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};

use crate::error::EuropeanaError;
use crate::response::SearchResponse;

/// Default authority and path of the search endpoint. The scheme is picked
/// by the client's `use_https` setting.
const SEARCH_ENDPOINT: &str = "www.europeana.eu/api/v2/search.json";

/// The Europeana Search API client.
///
/// Holds the API credentials and the HTTP transport shared by every search
/// request built from it. The client is immutable after construction and can
/// be borrowed by any number of requests.
///
/// # Example
///
/// ```rust,no_run
/// use europeana_api_client::{OffsetSearchRequest, SearchClient, SearchRequestExt};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SearchClient::new("XXXX", "");
///     let request = OffsetSearchRequest::new(&client, "open", "minimal", "", "")?;
///     let response = request.get("tierstimmenarchiv").await?;
///     println!("{} results", response.total_results);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SearchClient {
    http_client: ClientWithMiddleware,
    endpoint: String,
    use_https: bool,
    api_key: String,
    private_key: Option<SecretString>,
}

impl SearchClient {
    /// Create a new client with default settings.
    ///
    /// The private key may be empty; search requests only need the API key.
    /// Use [`SearchClient::builder()`] for transport-level configuration.
    pub fn new(api_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self::builder(api_key).private_key(private_key).build()
    }

    /// Create a new client builder.
    pub fn builder(api_key: impl Into<String>) -> SearchClientBuilder {
        SearchClientBuilder::new(api_key)
    }

    /// The API key sent as the `wskey` query parameter.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The private key, if one was configured.
    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_ref().map(|key| key.expose_secret())
    }

    /// Whether a private key was configured.
    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Base query URL for the search endpoint, keyed with `wskey`.
    ///
    /// Pure function of the client state; no network I/O.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{}://{}?wskey={}", scheme, self.endpoint, self.api_key)
    }

    /// Append the form-encoded query text to a search URL, issue the GET and
    /// decode the body into a [`SearchResponse`].
    pub(crate) async fn fetch(
        &self,
        search_url: &str,
        query: &str,
    ) -> Result<SearchResponse, EuropeanaError> {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("query", query)
            .finish();
        let request_url = format!("{search_url}&{encoded}");

        tracing::debug!(url = %request_url, "sending search request");

        let response = self.http_client.get(&request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EuropeanaError::from_status(status));
        }

        // Decode from the buffered body so that when the full schema fails to
        // parse we can still surface the API's own failure report.
        let body = response.text().await?;
        let parsed: SearchResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(err) => match serde_json::from_str::<ApiFailure>(&body) {
                Ok(failure) if failure.success == Some(false) => {
                    return Err(EuropeanaError::Api {
                        message: failure.error.unwrap_or_default(),
                    });
                }
                _ => return Err(err.into()),
            },
        };

        if !parsed.success {
            return Err(EuropeanaError::Api {
                message: parsed.error.unwrap_or_default(),
            });
        }

        Ok(parsed)
    }
}

impl std::fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("endpoint", &self.endpoint)
            .field("use_https", &self.use_https)
            .field("api_key", &self.api_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Builder for [`SearchClient`].
pub struct SearchClientBuilder {
    api_key: String,
    private_key: Option<SecretString>,
    endpoint: String,
    use_https: bool,
    user_agent: Option<String>,
    http_client: Option<ClientWithMiddleware>,
}

impl SearchClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            private_key: None,
            endpoint: SEARCH_ENDPOINT.to_string(),
            use_https: true,
            user_agent: None,
            http_client: None,
        }
    }

    /// Set the private key paired with the API key. An empty key is treated
    /// as absent.
    pub fn private_key(mut self, private_key: impl Into<String>) -> Self {
        let private_key = private_key.into();
        self.private_key = (!private_key.is_empty()).then(|| SecretString::from(private_key));
        self
    }

    /// Override the endpoint authority and path (useful for testing with a
    /// mock server). The scheme stays controlled by [`use_https`].
    ///
    /// [`use_https`]: SearchClientBuilder::use_https
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Toggle between https (the default) and plain http.
    pub fn use_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a pre-built transport instead of the default one. Timeouts,
    /// proxies and connection pooling are configured there.
    pub fn http_client(mut self, http_client: ClientWithMiddleware) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the client.
    pub fn build(self) -> SearchClient {
        let Self {
            api_key,
            private_key,
            endpoint,
            use_https,
            user_agent,
            http_client,
        } = self;

        let http_client = http_client.unwrap_or_else(|| {
            let mut headers = HeaderMap::new();
            let user_agent = user_agent
                .unwrap_or_else(|| format!("europeana-api-client/{}", env!("CARGO_PKG_VERSION")));
            let header_value = HeaderValue::from_str(&user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("europeana-api-client"));
            headers.insert(USER_AGENT, header_value);

            let reqwest_client = reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new());

            ClientBuilder::new(reqwest_client)
                .with(TracingMiddleware::default())
                .build()
        });

        SearchClient {
            http_client,
            endpoint,
            use_https,
            api_key,
            private_key,
        }
    }
}

/// Lenient view of a response body, used when the full schema fails to
/// decode but the API reported its own failure.
#[derive(Debug, serde::Deserialize)]
struct ApiFailure {
    success: Option<bool>,
    error: Option<String>,
}
