use thiserror::Error;

/// Errors raised when parsing API vocabulary from its wire form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid market '{value}', expected one of STOCKS, FOREX, CRYPTO or empty")]
    InvalidMarket { value: String },
    #[error("invalid sort '{value}', expected asc or desc")]
    InvalidSort { value: String },
    #[error("invalid timespan '{value}', expected one of minute, hour, day, week, month, quarter, year")]
    InvalidTimespan { value: String },
    #[error("invalid direction '{value}', expected gainers or losers")]
    InvalidDirection { value: String },
    #[error("invalid financials period '{value}', expected one of Y, YA, Q, QA, T, TA")]
    InvalidFinancialsPeriod { value: String },
    #[error("invalid financials sort '{value}', expected one of reportPeriod, -reportPeriod, calendarDate, -calendarDate")]
    InvalidFinancialsSort { value: String },
    #[error("invalid ticker record type '{value}', expected trades or quotes")]
    InvalidTickerRecordType { value: String },
}

/// Errors returned by the client before a request reaches the transport.
///
/// None of these variants ever carry the API key; `address` is the
/// descriptor's address fragment only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("environment variable {var} is not set")]
    MissingApiKey { var: &'static str },

    #[error("base url must use https: '{url}'")]
    InsecureBaseUrl { url: String },

    #[error("request url for '{address}' is invalid: {source}")]
    InvalidUrl {
        address: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request url for '{address}' contains unencodable character {ch:?}")]
    UnencodableParameter { address: String, ch: char },

    /// The url parser would have sent the request somewhere other than the
    /// assembled address, e.g. by resolving `..` segments.
    #[error("request url for '{address}' would be rewritten by the url parser")]
    RewrittenUrl { address: String },

    #[error("no Tokio runtime is available to run the request")]
    NoRuntime,
}
