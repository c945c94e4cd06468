//! Equities endpoints: ticks, last trade/quote, daily bars and snapshots.
//!
//! Aggregate and previous-close descriptors live in
//! [`aggregates`](super::aggregates).

use super::address::AddressBuilder;
use crate::{CalendarDate, Direction, Ticker};

/// Tick history parameters shared by trades and NBBO quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TickWindow {
    ticker: Ticker,
    date: CalendarDate,
    timestamp: Option<i64>,
    timestamp_limit: Option<i64>,
    reverse: bool,
    limit: u32,
}

impl TickWindow {
    fn new(ticker: Ticker, date: CalendarDate) -> Self {
        Self {
            ticker,
            date,
            timestamp: None,
            timestamp_limit: None,
            reverse: true,
            limit: 10,
        }
    }

    fn address(&self, feed: &str) -> String {
        AddressBuilder::new(format!(
            "/v2/ticks/stocks/{feed}/{}/{}",
            self.ticker, self.date
        ))
        .optional("timestamp", self.timestamp)
        .optional("timestampLimit", self.timestamp_limit)
        .param("reverse", self.reverse)
        .param("limit", self.limit)
        .finish()
    }
}

macro_rules! tick_window_builders {
    ($name:ident) => {
        impl $name {
            pub fn new(ticker: Ticker, date: CalendarDate) -> Self {
                Self(TickWindow::new(ticker, date))
            }

            /// Offset timestamp (nanoseconds) to page from.
            pub fn with_timestamp(mut self, timestamp: i64) -> Self {
                self.0.timestamp = Some(timestamp);
                self
            }

            /// Upper bound timestamp (nanoseconds).
            pub fn with_timestamp_limit(mut self, timestamp_limit: i64) -> Self {
                self.0.timestamp_limit = Some(timestamp_limit);
                self
            }

            pub fn with_reverse(mut self, reverse: bool) -> Self {
                self.0.reverse = reverse;
                self
            }

            pub fn with_limit(mut self, limit: u32) -> Self {
                self.0.limit = limit;
                self
            }
        }
    };
}

/// `GET /v2/ticks/stocks/trades/{ticker}/{date}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockTrades(TickWindow);

tick_window_builders!(StockTrades);

impl StockTrades {
    pub fn address(&self) -> String {
        self.0.address("trades")
    }
}

/// `GET /v2/ticks/stocks/nbbo/{ticker}/{date}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuotes(TickWindow);

tick_window_builders!(StockQuotes);

impl StockQuotes {
    pub fn address(&self) -> String {
        self.0.address("nbbo")
    }
}

/// `GET /v1/last/stocks/{ticker}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLastTrade {
    ticker: Ticker,
}

impl StockLastTrade {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/last/stocks/{}", self.ticker)).finish()
    }
}

/// `GET /v1/last_quote/stocks/{ticker}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLastQuote {
    ticker: Ticker,
}

impl StockLastQuote {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/last_quote/stocks/{}", self.ticker)).finish()
    }
}

/// `GET /v1/open-close/{ticker}/{date}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockDailyOpenClose {
    ticker: Ticker,
    date: CalendarDate,
}

impl StockDailyOpenClose {
    pub fn new(ticker: Ticker, date: CalendarDate) -> Self {
        Self { ticker, date }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/open-close/{}/{}", self.ticker, self.date)).finish()
    }
}

/// `GET /v2/aggs/grouped/locale/us/market/stocks/{date}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockGroupedDailyBars {
    date: CalendarDate,
    unadjusted: bool,
}

impl StockGroupedDailyBars {
    pub fn new(date: CalendarDate) -> Self {
        Self {
            date,
            unadjusted: true,
        }
    }

    pub fn with_unadjusted(mut self, unadjusted: bool) -> Self {
        self.unadjusted = unadjusted;
        self
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/aggs/grouped/locale/us/market/stocks/{}",
            self.date
        ))
        .param("unadjusted", self.unadjusted)
        .finish()
    }
}

/// `GET /v2/snapshot/locale/us/markets/stocks/tickers`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockSnapshotAllTickers {
    tickers: Vec<String>,
}

impl StockSnapshotAllTickers {
    /// An empty list asks for every ticker.
    pub fn new<I, S>(tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tickers: tickers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new("/v2/snapshot/locale/us/markets/stocks/tickers")
            .param("tickers", self.tickers.join(","))
            .finish()
    }
}

/// `GET /v2/snapshot/locale/us/markets/stocks/tickers/{ticker}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockSnapshotTicker {
    ticker: Ticker,
}

impl StockSnapshotTicker {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/snapshot/locale/us/markets/stocks/tickers/{}",
            self.ticker
        ))
        .finish()
    }
}

/// `GET /v2/snapshot/locale/us/markets/stocks/{direction}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockSnapshotGainersLosers {
    direction: Direction,
}

impl StockSnapshotGainersLosers {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/snapshot/locale/us/markets/stocks/{}",
            self.direction
        ))
        .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trades_emit_empty_timestamps_when_unset() {
        let query = StockTrades::new(Ticker::stock("AAPL"), CalendarDate::new(2021, 2, 3));
        assert_eq!(
            query.address(),
            "/v2/ticks/stocks/trades/AAPL/2021-02-03?timestamp=&timestampLimit=&reverse=true&limit=10&apiKey="
        );
    }

    #[test]
    fn quotes_use_nbbo_feed() {
        let query = StockQuotes::new(Ticker::stock("AAPL"), CalendarDate::new(2021, 2, 3))
            .with_timestamp(1_612_360_800_000_000_000)
            .with_reverse(false)
            .with_limit(50);
        assert_eq!(
            query.address(),
            "/v2/ticks/stocks/nbbo/AAPL/2021-02-03?timestamp=1612360800000000000&timestampLimit=&reverse=false&limit=50&apiKey="
        );
    }

    #[test]
    fn snapshot_all_joins_tickers_with_commas() {
        let query = StockSnapshotAllTickers::new(["AAPL", "MSFT"]);
        assert_eq!(
            query.address(),
            "/v2/snapshot/locale/us/markets/stocks/tickers?tickers=AAPL,MSFT&apiKey="
        );
        assert_eq!(
            StockSnapshotAllTickers::default().address(),
            "/v2/snapshot/locale/us/markets/stocks/tickers?tickers=&apiKey="
        );
    }
}
