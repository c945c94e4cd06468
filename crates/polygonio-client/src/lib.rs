//! # Polygon.io Client
//!
//! Typed request catalog and HTTP client for the Polygon.io REST API.
//!
//! ## Overview
//!
//! - **Domain value types** for the API vocabulary (tickers, dates, sorts, timespans)
//! - **Query catalog**: one immutable descriptor per endpoint, unified as [`Query`]
//! - **Domain facades** ([`REFERENCE`], [`EQUITIES`], [`FOREX`], [`CRYPTO`]) building descriptors with service defaults
//! - **Client** that appends the API key, sends one GET and classifies the status
//!
//! Response bodies are returned raw. Decoding is left to the caller.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`PolygonClient`] and the [`Completion`] outcome |
//! | [`config`] | Base url, user agent and environment lookup |
//! | [`domain`] | Value types and enumerated vocabulary |
//! | [`error`] | Validation and client errors |
//! | [`facade`] | Per-domain descriptor factories |
//! | [`http_client`] | Transport trait and reqwest implementation |
//! | [`query`] | Endpoint descriptors and the [`Query`] sum type |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use polygonio_client::{CalendarDate, PolygonClient, Timespan, EQUITIES};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PolygonClient::from_env()?;
//!
//!     let query = EQUITIES
//!         .aggregate_bars("AAPL", 1, Timespan::Day, CalendarDate::new(2021, 1, 1), CalendarDate::new(2021, 1, 31))
//!         .with_limit(50);
//!     let completion = client.get(query).await?;
//!
//!     if let Some(error) = completion.error() {
//!         eprintln!("transport failed: {error}");
//!     } else if let Some(body) = completion.text() {
//!         println!("{} -> {}", completion.status().unwrap_or_default(), body);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! | Condition | Surfaces as |
//! |-----------|-------------|
//! | URL cannot be assembled, or would be rewritten by the parser | [`ClientError`] returned before anything is sent |
//! | [`PolygonClient::get_with`] outside a Tokio runtime | [`ClientError::NoRuntime`] |
//! | DNS, connect, TLS, timeout | [`Completion::error`] |
//! | HTTP 4xx / 5xx | `warn!` log event; body still delivered in the [`Completion`] |
//!
//! ## Logging
//!
//! Events are emitted through `tracing`; the crate never installs a
//! subscriber. The API key is never part of a log event or error message.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod facade;
pub mod http_client;
pub mod query;

pub use client::{Completion, PolygonClient};

pub use config::ClientConfig;

pub use domain::{
    AssetClass, CalendarDate, Direction, FinancialsPeriodType, FinancialsSort, Market, Sort,
    Ticker, TickerRecordType, Timespan,
};

pub use error::{ClientError, ValidationError};

pub use facade::{Crypto, Equities, Forex, Reference, CRYPTO, EQUITIES, FOREX, REFERENCE};

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient, ResponseMeta, StatusClass,
};

pub use query::{Domain, Query};
