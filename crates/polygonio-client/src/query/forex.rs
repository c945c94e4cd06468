//! Foreign exchange endpoints.

use super::address::AddressBuilder;
use crate::{CalendarDate, Direction, Ticker};

/// `GET /v1/historic/forex/{pair}/{date}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForexHistoricTicks {
    pair: Ticker,
    date: CalendarDate,
    offset: Option<i64>,
    limit: u32,
}

impl ForexHistoricTicks {
    pub fn new(pair: Ticker, date: CalendarDate) -> Self {
        Self {
            pair,
            date,
            offset: None,
            limit: 120,
        }
    }

    /// Timestamp offset used for pagination.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/historic/forex/{}/{}", self.pair, self.date))
            .optional("offset", self.offset)
            .param("limit", self.limit)
            .finish()
    }
}

/// `GET /v1/conversion/{pair}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForexConversion {
    pair: Ticker,
    amount: u64,
    precision: u32,
}

impl ForexConversion {
    pub fn new(pair: Ticker) -> Self {
        Self {
            pair,
            amount: 100,
            precision: 2,
        }
    }

    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/conversion/{}", self.pair))
            .param("amount", self.amount)
            .param("precision", self.precision)
            .finish()
    }
}

/// `GET /v1/last_quote/currencies/{pair}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForexLastQuote {
    pair: Ticker,
}

impl ForexLastQuote {
    pub fn new(pair: Ticker) -> Self {
        Self { pair }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/last_quote/currencies/{}", self.pair))
            .empty_lead()
            .finish()
    }
}

/// `GET /v2/aggs/grouped/locale/global/market/fx/{date}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForexGroupedDailyBars {
    date: CalendarDate,
    unadjusted: bool,
}

impl ForexGroupedDailyBars {
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
            "/v2/aggs/grouped/locale/global/market/fx/{}",
            self.date
        ))
        .param("unadjusted", self.unadjusted)
        .finish()
    }
}

/// `GET /v2/snapshot/locale/global/markets/forex/tickers/{ticker}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForexSnapshotTicker {
    ticker: Ticker,
}

impl ForexSnapshotTicker {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/snapshot/locale/global/markets/forex/tickers/{}",
            self.ticker
        ))
        .empty_lead()
        .finish()
    }
}

/// `GET /v2/snapshot/locale/global/markets/forex/tickers`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForexSnapshotAllTickers {
    tickers: Vec<String>,
}

impl ForexSnapshotAllTickers {
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
        AddressBuilder::new("/v2/snapshot/locale/global/markets/forex/tickers")
            .param("tickers", self.tickers.join(","))
            .finish()
    }
}

/// `GET /v2/snapshot/locale/global/markets/forex/{direction}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForexSnapshotGainersLosers {
    direction: Direction,
}

impl ForexSnapshotGainersLosers {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/snapshot/locale/global/markets/forex/{}",
            self.direction
        ))
        .empty_lead()
        .finish()
    }
}
