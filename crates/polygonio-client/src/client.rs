use std::borrow::Cow;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::{Position, Url};

use crate::config::{ClientConfig, API_KEY_ENV};
use crate::http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, ResponseMeta, StatusClass,
};
use crate::query::Query;
use crate::ClientError;

/// Outcome of one executed request.
///
/// Delivered exactly once per call that passed URL assembly. Any combination
/// of the three slots may be present: a transport failure after headers
/// arrived carries both `response` and `error`. A 4xx/5xx status is not an
/// error here; inspect [`Completion::status_class`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    body: Option<Vec<u8>>,
    response: Option<ResponseMeta>,
    error: Option<HttpError>,
}

impl Completion {
    pub fn new(
        body: Option<Vec<u8>>,
        response: Option<ResponseMeta>,
        error: Option<HttpError>,
    ) -> Self {
        Self {
            body,
            response,
            error,
        }
    }

    fn from_outcome(outcome: Result<HttpResponse, HttpError>) -> Self {
        match outcome {
            Ok(response) => Self::new(Some(response.body), Some(response.meta), None),
            Err(error) => Self::new(None, error.response().cloned(), Some(error)),
        }
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn response(&self) -> Option<&ResponseMeta> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&HttpError> {
        self.error.as_ref()
    }

    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|meta| meta.status)
    }

    pub fn status_class(&self) -> Option<StatusClass> {
        self.response.as_ref().map(ResponseMeta::status_class)
    }

    /// No transport error and a 2xx status.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.status_class() == Some(StatusClass::Success)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        self.body.as_deref().map(String::from_utf8_lossy)
    }

    pub fn into_parts(self) -> (Option<Vec<u8>>, Option<ResponseMeta>, Option<HttpError>) {
        (self.body, self.response, self.error)
    }
}

/// A request that passed URL assembly and is ready for the transport.
struct PreparedRequest {
    endpoint: &'static str,
    address: String,
    url: Url,
}

/// Polygon.io REST client.
///
/// Holds the API key and a shared transport. Cloning is cheap and every
/// clone can issue any number of concurrent calls.
#[derive(Clone)]
pub struct PolygonClient {
    api_key: Arc<str>,
    config: Arc<ClientConfig>,
    http_client: Arc<dyn HttpClient>,
}

impl Debug for PolygonClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolygonClient")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl PolygonClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(config.user_agent()));
        Self {
            api_key: Arc::from(api_key.into()),
            config: Arc::new(config),
            http_client,
        }
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Arc::from(api_key.into()),
            config: Arc::new(ClientConfig::default()),
            http_client,
        }
    }

    /// Reads the key from `POLYGONIO_API_KEY` and the optional base url
    /// override from `POLYGONIO_BASE_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ClientError::MissingApiKey { var: API_KEY_ENV })?;
        Ok(Self::with_config(api_key, ClientConfig::from_env()?))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full request URL: base url, address fragment, then the key value.
    pub fn url_for(&self, query: &Query) -> Result<Url, ClientError> {
        self.prepare(query).map(|prepared| prepared.url)
    }

    /// Executes `query` and waits for its [`Completion`].
    ///
    /// `Err` is only returned when the URL cannot be assembled, in which case
    /// nothing is sent. Transport failures are reported inside the completion.
    pub async fn get(&self, query: impl Into<Query>) -> Result<Completion, ClientError> {
        let prepared = self.prepare(&query.into())?;
        Ok(dispatch(self.http_client.as_ref(), prepared).await)
    }

    /// Executes `query` on a spawned Tokio task and hands the outcome to
    /// `completion`, which runs exactly once.
    ///
    /// URL assembly happens before spawning; on `Err` the task is never
    /// created and `completion` never runs. Outside a Tokio runtime this
    /// returns [`ClientError::NoRuntime`].
    pub fn get_with<F>(
        &self,
        query: impl Into<Query>,
        completion: F,
    ) -> Result<JoinHandle<()>, ClientError>
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| ClientError::NoRuntime)?;
        let prepared = self.prepare(&query.into())?;
        let http_client = Arc::clone(&self.http_client);

        Ok(runtime.spawn(async move {
            let outcome = dispatch(http_client.as_ref(), prepared).await;
            completion(outcome);
        }))
    }

    fn prepare(&self, query: &Query) -> Result<PreparedRequest, ClientError> {
        let address = query.address();
        let raw = format!("{}{}{}", self.config.base_url(), address, self.api_key);

        // Characters the URL parser would rewrite rather than reject.
        if let Some(ch) = raw
            .chars()
            .find(|ch| ch.is_whitespace() || ch.is_control() || matches!(*ch, '#' | '\\'))
        {
            return Err(ClientError::UnencodableParameter { address, ch });
        }

        let url = match Url::parse(&raw) {
            Ok(url) => url,
            Err(source) => return Err(ClientError::InvalidUrl { address, source }),
        };

        // Dot segments and percent-encoding are applied silently; anything
        // other than the base path followed by the exact address is refused.
        let prefix = match Url::parse(self.config.base_url()) {
            Ok(base) => base.path().trim_end_matches('/').to_owned(),
            Err(source) => return Err(ClientError::InvalidUrl { address, source }),
        };
        let expected = format!("{prefix}{address}{}", self.api_key);
        if url[Position::BeforePath..] != expected {
            return Err(ClientError::RewrittenUrl { address });
        }

        Ok(PreparedRequest {
            endpoint: query.name(),
            address,
            url,
        })
    }
}

async fn dispatch(http_client: &dyn HttpClient, prepared: PreparedRequest) -> Completion {
    let PreparedRequest {
        endpoint,
        address,
        url,
    } = prepared;

    debug!(endpoint, address = %address, "dispatching polygon request");
    let outcome = http_client.execute(HttpRequest::get(url)).await;
    let completion = Completion::from_outcome(outcome);

    if let Some(error) = completion.error() {
        warn!(
            endpoint,
            address = %address,
            kind = ?error.kind(),
            "polygon transport error: {}",
            error.message()
        );
    }

    if let Some(status) = completion.status() {
        match StatusClass::of(status) {
            StatusClass::ClientError => {
                warn!(endpoint, address = %address, status, "polygon client error response");
            }
            StatusClass::ServerError => {
                warn!(endpoint, address = %address, status, "polygon server error response");
            }
            _ => debug!(endpoint, status, "polygon response received"),
        }
    }

    completion
}
