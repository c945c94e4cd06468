//! # Domain Facades
//!
//! Stateless factories grouping the catalog by API area. Each method wraps
//! its ticker argument in the matching [`Ticker`] variant and returns the
//! descriptor with the service defaults applied; optional parameters are
//! then adjusted with the descriptor's `with_*` methods.
//!
//! The process-wide [`REFERENCE`], [`EQUITIES`], [`FOREX`] and [`CRYPTO`]
//! instances are plain immutable values.

use crate::query::{
    AggregateBars, ConditionMappings, CryptoDailyOpenClose, CryptoExchanges,
    CryptoGroupedDailyBars, CryptoHistoricTrades, CryptoLastTrade, CryptoSnapshotAllTickers,
    CryptoSnapshotFullBook, CryptoSnapshotGainersLosers, CryptoSnapshotTicker, ForexConversion,
    ForexGroupedDailyBars, ForexHistoricTicks, ForexLastQuote, ForexSnapshotAllTickers,
    ForexSnapshotGainersLosers, ForexSnapshotTicker, Locales, MarketHolidays, MarketStatus,
    Markets, PreviousClose, StockDailyOpenClose, StockDividends, StockExchanges, StockFinancials,
    StockGroupedDailyBars, StockLastQuote, StockLastTrade, StockQuotes, StockSnapshotAllTickers,
    StockSnapshotGainersLosers, StockSnapshotTicker, StockSplits, StockTrades, TickerDetails,
    TickerNews, TickerTypes, Tickers,
};
use crate::{CalendarDate, Direction, Ticker, TickerRecordType, Timespan};

pub static REFERENCE: Reference = Reference;
pub static EQUITIES: Equities = Equities;
pub static FOREX: Forex = Forex;
pub static CRYPTO: Crypto = Crypto;

/// Reference data endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reference;

impl Reference {
    pub fn tickers(&self) -> Tickers {
        Tickers::new()
    }

    pub fn ticker_types(&self) -> TickerTypes {
        TickerTypes
    }

    pub fn ticker_details(&self, ticker: impl Into<String>) -> TickerDetails {
        TickerDetails::new(Ticker::stock(ticker))
    }

    pub fn ticker_news(&self, ticker: impl Into<String>) -> TickerNews {
        TickerNews::new(Ticker::stock(ticker))
    }

    pub fn markets(&self) -> Markets {
        Markets
    }

    pub fn locales(&self) -> Locales {
        Locales
    }

    pub fn stock_splits(&self, ticker: impl Into<String>) -> StockSplits {
        StockSplits::new(Ticker::stock(ticker))
    }

    pub fn stock_dividends(&self, ticker: impl Into<String>) -> StockDividends {
        StockDividends::new(Ticker::stock(ticker))
    }

    pub fn stock_financials(&self, ticker: impl Into<String>) -> StockFinancials {
        StockFinancials::new(Ticker::stock(ticker))
    }

    pub fn market_holidays(&self) -> MarketHolidays {
        MarketHolidays
    }

    pub fn market_status(&self) -> MarketStatus {
        MarketStatus
    }

    pub fn stock_exchanges(&self) -> StockExchanges {
        StockExchanges
    }

    pub fn condition_mappings(&self, record_type: TickerRecordType) -> ConditionMappings {
        ConditionMappings::new(record_type)
    }

    pub fn crypto_exchanges(&self) -> CryptoExchanges {
        CryptoExchanges
    }
}

/// Equities endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equities;

impl Equities {
    pub fn trades(&self, ticker: impl Into<String>, date: CalendarDate) -> StockTrades {
        StockTrades::new(Ticker::stock(ticker), date)
    }

    pub fn quotes(&self, ticker: impl Into<String>, date: CalendarDate) -> StockQuotes {
        StockQuotes::new(Ticker::stock(ticker), date)
    }

    pub fn last_trade(&self, ticker: impl Into<String>) -> StockLastTrade {
        StockLastTrade::new(Ticker::stock(ticker))
    }

    pub fn last_quote(&self, ticker: impl Into<String>) -> StockLastQuote {
        StockLastQuote::new(Ticker::stock(ticker))
    }

    pub fn daily_open_close(
        &self,
        ticker: impl Into<String>,
        date: CalendarDate,
    ) -> StockDailyOpenClose {
        StockDailyOpenClose::new(Ticker::stock(ticker), date)
    }

    pub fn grouped_daily_bars(&self, date: CalendarDate) -> StockGroupedDailyBars {
        StockGroupedDailyBars::new(date)
    }

    pub fn previous_close(&self, ticker: impl Into<String>) -> PreviousClose {
        PreviousClose::new(Ticker::stock(ticker))
    }

    pub fn aggregate_bars(
        &self,
        ticker: impl Into<String>,
        multiplier: u32,
        timespan: Timespan,
        from: CalendarDate,
        to: CalendarDate,
    ) -> AggregateBars {
        AggregateBars::new(Ticker::stock(ticker), multiplier, timespan, from, to)
    }

    pub fn snapshot_all_tickers<I, S>(&self, tickers: I) -> StockSnapshotAllTickers
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StockSnapshotAllTickers::new(tickers)
    }

    pub fn snapshot_ticker(&self, ticker: impl Into<String>) -> StockSnapshotTicker {
        StockSnapshotTicker::new(Ticker::stock(ticker))
    }

    pub fn snapshot_gainers_losers(&self, direction: Direction) -> StockSnapshotGainersLosers {
        StockSnapshotGainersLosers::new(direction)
    }
}

/// Foreign exchange endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Forex;

impl Forex {
    pub fn historic_ticks(&self, pair: impl Into<String>, date: CalendarDate) -> ForexHistoricTicks {
        ForexHistoricTicks::new(Ticker::forex(pair), date)
    }

    pub fn realtime_conversion(&self, pair: impl Into<String>) -> ForexConversion {
        ForexConversion::new(Ticker::forex(pair))
    }

    pub fn last_quote(&self, pair: impl Into<String>) -> ForexLastQuote {
        ForexLastQuote::new(Ticker::forex(pair))
    }

    pub fn grouped_daily_bars(&self, date: CalendarDate) -> ForexGroupedDailyBars {
        ForexGroupedDailyBars::new(date)
    }

    pub fn previous_close(&self, ticker: impl Into<String>) -> PreviousClose {
        PreviousClose::new(Ticker::forex(ticker))
    }

    pub fn aggregate_bars(
        &self,
        ticker: impl Into<String>,
        multiplier: u32,
        timespan: Timespan,
        from: CalendarDate,
        to: CalendarDate,
    ) -> AggregateBars {
        AggregateBars::new(Ticker::forex(ticker), multiplier, timespan, from, to)
    }

    pub fn snapshot_ticker(&self, ticker: impl Into<String>) -> ForexSnapshotTicker {
        ForexSnapshotTicker::new(Ticker::forex(ticker))
    }

    pub fn snapshot_all_tickers<I, S>(&self, tickers: I) -> ForexSnapshotAllTickers
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ForexSnapshotAllTickers::new(tickers)
    }

    pub fn snapshot_gainers_losers(&self, direction: Direction) -> ForexSnapshotGainersLosers {
        ForexSnapshotGainersLosers::new(direction)
    }
}

/// Cryptocurrency endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crypto;

impl Crypto {
    pub fn daily_open_close(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
        date: CalendarDate,
    ) -> CryptoDailyOpenClose {
        CryptoDailyOpenClose::new(from, to, date)
    }

    pub fn historic_trades(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
        date: CalendarDate,
    ) -> CryptoHistoricTrades {
        CryptoHistoricTrades::new(from, to, date)
    }

    pub fn grouped_daily_bars(&self, date: CalendarDate) -> CryptoGroupedDailyBars {
        CryptoGroupedDailyBars::new(date)
    }

    pub fn previous_close(&self, ticker: impl Into<String>) -> PreviousClose {
        PreviousClose::new(Ticker::crypto(ticker))
    }

    pub fn aggregate_bars(
        &self,
        ticker: impl Into<String>,
        multiplier: u32,
        timespan: Timespan,
        from: CalendarDate,
        to: CalendarDate,
    ) -> AggregateBars {
        AggregateBars::new(Ticker::crypto(ticker), multiplier, timespan, from, to)
    }

    pub fn snapshot_all_tickers<I, S>(&self, tickers: I) -> CryptoSnapshotAllTickers
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CryptoSnapshotAllTickers::new(tickers)
    }

    pub fn snapshot_ticker(&self, ticker: impl Into<String>) -> CryptoSnapshotTicker {
        CryptoSnapshotTicker::new(Ticker::crypto(ticker))
    }

    pub fn snapshot_full_book(&self, ticker: impl Into<String>) -> CryptoSnapshotFullBook {
        CryptoSnapshotFullBook::new(Ticker::crypto(ticker))
    }

    pub fn snapshot_gainers_losers(&self, direction: Direction) -> CryptoSnapshotGainersLosers {
        CryptoSnapshotGainersLosers::new(direction)
    }

    pub fn last_trade(&self, from: impl Into<String>, to: impl Into<String>) -> CryptoLastTrade {
        CryptoLastTrade::new(from, to)
    }
}
