//! Aggregate endpoints whose path is shared by every asset class.
//!
//! The [`Ticker`] variant decides the endpoint name and domain a descriptor
//! reports once it is a [`Query`](super::Query).

use super::address::AddressBuilder;
use crate::{CalendarDate, Sort, Ticker, Timespan};

/// `GET /v2/aggs/ticker/{ticker}/range/{multiplier}/{timespan}/{from}/{to}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateBars {
    ticker: Ticker,
    multiplier: u32,
    timespan: Timespan,
    from: CalendarDate,
    to: CalendarDate,
    unadjusted: bool,
    sort: Sort,
    limit: u32,
}

impl AggregateBars {
    pub fn new(
        ticker: Ticker,
        multiplier: u32,
        timespan: Timespan,
        from: CalendarDate,
        to: CalendarDate,
    ) -> Self {
        Self {
            ticker,
            multiplier,
            timespan,
            from,
            to,
            unadjusted: true,
            sort: Sort::Asc,
            limit: 120,
        }
    }

    pub fn with_unadjusted(mut self, unadjusted: bool) -> Self {
        self.unadjusted = unadjusted;
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!(
            "/v2/aggs/ticker/{}/range/{}/{}/{}/{}",
            self.ticker, self.multiplier, self.timespan, self.from, self.to
        ))
        .param("unadjusted", self.unadjusted)
        .param("sort", self.sort)
        .param("limit", self.limit)
        .finish()
    }
}

/// `GET /v2/aggs/ticker/{ticker}/prev`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviousClose {
    ticker: Ticker,
    unadjusted: bool,
}

impl PreviousClose {
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            unadjusted: true,
        }
    }

    pub fn with_unadjusted(mut self, unadjusted: bool) -> Self {
        self.unadjusted = unadjusted;
        self
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v2/aggs/ticker/{}/prev", self.ticker))
            .param("unadjusted", self.unadjusted)
            .finish()
    }
}
