//! Cryptocurrency endpoints.
//!
//! Several endpoints address a pair as two path segments (`{from}/{to}`),
//! e.g. `BTC/USD`; snapshot endpoints take a single `X:BTCUSD` style ticker.

use super::address::AddressBuilder;
use crate::{CalendarDate, Direction, Ticker};

/// `GET /v1/open-close/crypto/{from}/{to}/{date}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoDailyOpenClose {
    from: String,
    to: String,
    date: CalendarDate,
    unadjusted: bool,
}

impl CryptoDailyOpenClose {
    pub fn new(from: impl Into<String>, to: impl Into<String>, date: CalendarDate) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
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
            "/v1/open-close/crypto/{}/{}/{}",
            self.from, self.to, self.date
        ))
        .param("unadjusted", self.unadjusted)
        .finish()
    }
}

/// `GET /v1/historic/crypto/{from}/{to}/{date}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoHistoricTrades {
    from: String,
    to: String,
    date: CalendarDate,
    offset: Option<i64>,
    limit: u32,
}

impl CryptoHistoricTrades {
    pub fn new(from: impl Into<String>, to: impl Into<String>, date: CalendarDate) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            date,
            offset: None,
            limit: 100,
        }
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v1/historic/crypto/{}/{}/{}",
            self.from, self.to, self.date
        ))
        .optional("offset", self.offset)
        .param("limit", self.limit)
        .finish()
    }
}

/// `GET /v2/aggs/grouped/locale/global/market/crypto/{date}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoGroupedDailyBars {
    date: CalendarDate,
    unadjusted: bool,
}

impl CryptoGroupedDailyBars {
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
            "/v2/aggs/grouped/locale/global/market/crypto/{}",
            self.date
        ))
        .param("unadjusted", self.unadjusted)
        .finish()
    }
}

/// `GET /v2/snapshot/locale/global/markets/crypto/tickers`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CryptoSnapshotAllTickers {
    tickers: Vec<String>,
}

impl CryptoSnapshotAllTickers {
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
        AddressBuilder::new("/v2/snapshot/locale/global/markets/crypto/tickers")
            .param("tickers", self.tickers.join(","))
            .finish()
    }
}

/// `GET /v2/snapshot/locale/global/markets/crypto/tickers/{ticker}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoSnapshotTicker {
    ticker: Ticker,
}

impl CryptoSnapshotTicker {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/snapshot/locale/global/markets/crypto/tickers/{}",
            self.ticker
        ))
        .empty_lead()
        .finish()
    }
}

/// `GET /v2/snapshot/locale/global/markets/crypto/tickers/{ticker}/book`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoSnapshotFullBook {
    ticker: Ticker,
}

impl CryptoSnapshotFullBook {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/snapshot/locale/global/markets/crypto/tickers/{}/book",
            self.ticker
        ))
        .empty_lead()
        .finish()
    }
}

/// `GET /v2/snapshot/locale/global/markets/crypto/{direction}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoSnapshotGainersLosers {
    direction: Direction,
}

impl CryptoSnapshotGainersLosers {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/snapshot/locale/global/markets/crypto/{}",
            self.direction
        ))
        .empty_lead()
        .finish()
    }
}

/// `GET /v1/last/crypto/{from}/{to}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CryptoLastTrade {
    from: String,
    to: String,
}

impl CryptoLastTrade {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/last/crypto/{}/{}", self.from, self.to))
            .empty_lead()
            .finish()
    }
}
