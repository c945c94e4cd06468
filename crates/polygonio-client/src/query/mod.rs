//! # Query Catalog
//!
//! One immutable descriptor per REST endpoint, unified behind the [`Query`]
//! sum type.
//!
//! Every descriptor renders an *address fragment*: the path plus the query
//! string, always ending in `apiKey=`. The client prepends the base url and
//! appends the key value.
//!
//! ## Wire rules
//!
//! - Query parameters appear in the endpoint's declared order.
//! - Optional values that are unset (`timestamp`, `timestampLimit`,
//!   `offset`) are still emitted, with an empty value.
//! - Values are not percent-encoded; callers pass plain tokens.
//!
//! ```rust,ignore
//! use polygonio_client::{CalendarDate, Query, Timespan, EQUITIES};
//!
//! let query: Query = EQUITIES
//!     .aggregate_bars("AAPL", 1, Timespan::Day, CalendarDate::new(2021, 1, 1), CalendarDate::new(2021, 1, 31))
//!     .into();
//! assert_eq!(
//!     query.address(),
//!     "/v2/aggs/ticker/AAPL/range/1/day/2021-01-01/2021-01-31?unadjusted=true&sort=asc&limit=120&apiKey=",
//! );
//! ```

mod address;
pub mod aggregates;
pub mod crypto;
pub mod equities;
pub mod forex;
pub mod reference;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use address::API_KEY_PARAM;
pub use aggregates::{AggregateBars, PreviousClose};
pub use crypto::{
    CryptoDailyOpenClose, CryptoGroupedDailyBars, CryptoHistoricTrades, CryptoLastTrade,
    CryptoSnapshotAllTickers, CryptoSnapshotFullBook, CryptoSnapshotGainersLosers,
    CryptoSnapshotTicker,
};
pub use equities::{
    StockDailyOpenClose, StockGroupedDailyBars, StockLastQuote, StockLastTrade, StockQuotes,
    StockSnapshotAllTickers, StockSnapshotGainersLosers, StockSnapshotTicker, StockTrades,
};
pub use forex::{
    ForexConversion, ForexGroupedDailyBars, ForexHistoricTicks, ForexLastQuote,
    ForexSnapshotAllTickers, ForexSnapshotGainersLosers, ForexSnapshotTicker,
};
pub use reference::{
    ConditionMappings, CryptoExchanges, Locales, MarketHolidays, MarketStatus, Markets,
    StockDividends, StockExchanges, StockFinancials, StockSplits, TickerDetails, TickerNews,
    TickerTypes, Tickers,
};

use crate::AssetClass;

/// API area an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Reference,
    Equities,
    Forex,
    Crypto,
}

impl Domain {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Equities => "equities",
            Self::Forex => "forex",
            Self::Crypto => "crypto",
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<AssetClass> for Domain {
    fn from(value: AssetClass) -> Self {
        match value {
            AssetClass::Stock => Self::Equities,
            AssetClass::Forex => Self::Forex,
            AssetClass::Crypto => Self::Crypto,
        }
    }
}

macro_rules! catalog {
    (
        fixed {
            $( $variant:ident($ty:ty) => $name:literal, $domain:ident; )+
        }
        routed {
            $( $routed:ident($rty:ty) => [$stock:literal, $forex:literal, $crypto:literal]; )+
        }
    ) => {
        /// Every endpoint the client can call.
        ///
        /// Aggregate bars and previous close share one path across asset
        /// classes; their endpoint name and domain follow the ticker.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Query {
            $( $variant($ty), )+
            $( $routed($rty), )+
        }

        impl Query {
            /// Path and query string, ending in `apiKey=`.
            pub fn address(&self) -> String {
                match self {
                    $( Self::$variant(query) => query.address(), )+
                    $( Self::$routed(query) => query.address(), )+
                }
            }

            /// Stable endpoint identifier used in logs.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $name, )+
                    $(
                        Self::$routed(query) => match query.ticker().asset_class() {
                            AssetClass::Stock => $stock,
                            AssetClass::Forex => $forex,
                            AssetClass::Crypto => $crypto,
                        },
                    )+
                }
            }

            pub fn domain(&self) -> Domain {
                match self {
                    $( Self::$variant(_) => Domain::$domain, )+
                    $( Self::$routed(query) => Domain::from(query.ticker().asset_class()), )+
                }
            }
        }
    };
}

catalog! {
    fixed {
        Tickers(Tickers) => "tickers", Reference;
        TickerTypes(TickerTypes) => "ticker_types", Reference;
        TickerDetails(TickerDetails) => "ticker_details", Reference;
        TickerNews(TickerNews) => "ticker_news", Reference;
        Markets(Markets) => "markets", Reference;
        Locales(Locales) => "locales", Reference;
        StockSplits(StockSplits) => "stock_splits", Reference;
        StockDividends(StockDividends) => "stock_dividends", Reference;
        StockFinancials(StockFinancials) => "stock_financials", Reference;
        MarketHolidays(MarketHolidays) => "market_holidays", Reference;
        MarketStatus(MarketStatus) => "market_status", Reference;
        StockExchanges(StockExchanges) => "stock_exchanges", Reference;
        ConditionMappings(ConditionMappings) => "condition_mappings", Reference;
        CryptoExchanges(CryptoExchanges) => "crypto_exchanges", Reference;

        StockTrades(StockTrades) => "stock_trades", Equities;
        StockQuotes(StockQuotes) => "stock_quotes", Equities;
        StockLastTrade(StockLastTrade) => "stock_last_trade", Equities;
        StockLastQuote(StockLastQuote) => "stock_last_quote", Equities;
        StockDailyOpenClose(StockDailyOpenClose) => "stock_daily_open_close", Equities;
        StockGroupedDailyBars(StockGroupedDailyBars) => "stock_grouped_daily_bars", Equities;
        StockSnapshotAllTickers(StockSnapshotAllTickers) => "stock_snapshot_all_tickers", Equities;
        StockSnapshotTicker(StockSnapshotTicker) => "stock_snapshot_ticker", Equities;
        StockSnapshotGainersLosers(StockSnapshotGainersLosers) => "stock_snapshot_gainers_losers", Equities;

        ForexHistoricTicks(ForexHistoricTicks) => "forex_historic_ticks", Forex;
        ForexConversion(ForexConversion) => "forex_conversion", Forex;
        ForexLastQuote(ForexLastQuote) => "forex_last_quote", Forex;
        ForexGroupedDailyBars(ForexGroupedDailyBars) => "forex_grouped_daily_bars", Forex;
        ForexSnapshotTicker(ForexSnapshotTicker) => "forex_snapshot_ticker", Forex;
        ForexSnapshotAllTickers(ForexSnapshotAllTickers) => "forex_snapshot_all_tickers", Forex;
        ForexSnapshotGainersLosers(ForexSnapshotGainersLosers) => "forex_snapshot_gainers_losers", Forex;

        CryptoDailyOpenClose(CryptoDailyOpenClose) => "crypto_daily_open_close", Crypto;
        CryptoHistoricTrades(CryptoHistoricTrades) => "crypto_historic_trades", Crypto;
        CryptoGroupedDailyBars(CryptoGroupedDailyBars) => "crypto_grouped_daily_bars", Crypto;
        CryptoSnapshotAllTickers(CryptoSnapshotAllTickers) => "crypto_snapshot_all_tickers", Crypto;
        CryptoSnapshotTicker(CryptoSnapshotTicker) => "crypto_snapshot_ticker", Crypto;
        CryptoSnapshotFullBook(CryptoSnapshotFullBook) => "crypto_snapshot_full_book", Crypto;
        CryptoSnapshotGainersLosers(CryptoSnapshotGainersLosers) => "crypto_snapshot_gainers_losers", Crypto;
        CryptoLastTrade(CryptoLastTrade) => "crypto_last_trade", Crypto;
    }

    routed {
        AggregateBars(AggregateBars) =>
            ["stock_aggregate_bars", "forex_aggregate_bars", "crypto_aggregate_bars"];
        PreviousClose(PreviousClose) =>
            ["stock_previous_close", "forex_previous_close", "crypto_previous_close"];
    }
}

macro_rules! into_query {
    ($( $ty:ident ),+ $(,)?) => {
        $(
            impl From<$ty> for Query {
                fn from(value: $ty) -> Self {
                    Self::$ty(value)
                }
            }
        )+
    };
}

into_query!(
    Tickers,
    TickerTypes,
    TickerDetails,
    TickerNews,
    Markets,
    Locales,
    StockSplits,
    StockDividends,
    StockFinancials,
    MarketHolidays,
    MarketStatus,
    StockExchanges,
    ConditionMappings,
    CryptoExchanges,
    StockTrades,
    StockQuotes,
    StockLastTrade,
    StockLastQuote,
    StockDailyOpenClose,
    StockGroupedDailyBars,
    StockSnapshotAllTickers,
    StockSnapshotTicker,
    StockSnapshotGainersLosers,
    ForexHistoricTicks,
    ForexConversion,
    ForexLastQuote,
    ForexGroupedDailyBars,
    ForexSnapshotTicker,
    ForexSnapshotAllTickers,
    ForexSnapshotGainersLosers,
    CryptoDailyOpenClose,
    CryptoHistoricTrades,
    CryptoGroupedDailyBars,
    CryptoSnapshotAllTickers,
    CryptoSnapshotTicker,
    CryptoSnapshotFullBook,
    CryptoSnapshotGainersLosers,
    CryptoLastTrade,
);

into_query!(AggregateBars, PreviousClose);

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.address())
    }
}
