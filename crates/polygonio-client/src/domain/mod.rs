//! # Domain Value Types
//!
//! Small immutable values that make up the request vocabulary of the API.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Ticker`] | Asset identifier tagged as stock, forex or crypto |
//! | [`CalendarDate`] | Date rendered as `YYYY-MM-DD` |
//! | [`Market`] | Market filter (`STOCKS`, `FOREX`, `CRYPTO`, any) |
//! | [`Sort`] | Aggregate ordering (`asc`, `desc`) |
//! | [`Timespan`] | Aggregate window size |
//! | [`Direction`] | Snapshot gainers or losers |
//! | [`FinancialsPeriodType`] | Statement period (`Y`, `Q`, `T`, ...) |
//! | [`FinancialsSort`] | Statement ordering |
//! | [`TickerRecordType`] | Condition mapping kind (`trades`, `quotes`) |
//!
//! Free-form strings (tickers, currency symbols, search terms) are never
//! validated locally. A malformed value surfaces as an HTTP error from the
//! service, not as a local error.

mod date;
mod ticker;
mod vocabulary;

pub use date::CalendarDate;
pub use ticker::{AssetClass, Ticker};
pub use vocabulary::{
    Direction, FinancialsPeriodType, FinancialsSort, Market, Sort, TickerRecordType, Timespan,
};
