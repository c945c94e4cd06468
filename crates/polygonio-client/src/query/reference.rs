//! Reference data endpoints: tickers, markets, exchanges and corporate data.

use super::address::AddressBuilder;
use crate::{FinancialsPeriodType, FinancialsSort, Market, Ticker, TickerRecordType};

/// `GET /v2/reference/tickers`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tickers {
    sort: String,
    ticker_type: String,
    market: Market,
    locale: String,
    search: String,
    per_page: u32,
    page: u32,
    active: bool,
}

impl Default for Tickers {
    fn default() -> Self {
        Self {
            sort: String::new(),
            ticker_type: String::new(),
            market: Market::Stocks,
            locale: String::new(),
            search: String::new(),
            per_page: 50,
            page: 1,
            active: true,
        }
    }
}

impl Tickers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn with_type(mut self, ticker_type: impl Into<String>) -> Self {
        self.ticker_type = ticker_type.into();
        self
    }

    pub fn with_market(mut self, market: Market) -> Self {
        self.market = market;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn address(&self) -> String {
        AddressBuilder::new("/v2/reference/tickers")
            .param("sort", &self.sort)
            .param("type", &self.ticker_type)
            .param("market", self.market)
            .param("locale", &self.locale)
            .param("search", &self.search)
            .param("perpage", self.per_page)
            .param("page", self.page)
            .param("active", self.active)
            .finish()
    }
}

/// `GET /v2/reference/types`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickerTypes;

impl TickerTypes {
    pub fn address(&self) -> String {
        AddressBuilder::new("/v2/reference/types").finish()
    }
}

/// `GET /v1/meta/symbols/{ticker}/company`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerDetails {
    ticker: Ticker,
}

impl TickerDetails {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/meta/symbols/{}/company", self.ticker)).finish()
    }
}

/// `GET /v1/meta/symbols/{ticker}/news`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerNews {
    ticker: Ticker,
    per_page: u32,
    page: u32,
}

impl TickerNews {
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            per_page: 50,
            page: 1,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/meta/symbols/{}/news", self.ticker))
            .param("perpage", self.per_page)
            .param("page", self.page)
            .finish()
    }
}

/// `GET /v2/reference/markets`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markets;

impl Markets {
    pub fn address(&self) -> String {
        AddressBuilder::new("/v2/reference/markets").finish()
    }
}

/// `GET /v2/reference/locales`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locales;

impl Locales {
    pub fn address(&self) -> String {
        AddressBuilder::new("/v2/reference/locales").finish()
    }
}

/// `GET /v2/reference/splits/{ticker}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockSplits {
    ticker: Ticker,
}

impl StockSplits {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v2/reference/splits/{}", self.ticker)).finish()
    }
}

/// `GET /v2/reference/dividends/{ticker}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockDividends {
    ticker: Ticker,
}

impl StockDividends {
    pub fn new(ticker: Ticker) -> Self {
        Self { ticker }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v2/reference/dividends/{}", self.ticker)).finish()
    }
}

/// `GET /v2/reference/financials/{ticker}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockFinancials {
    ticker: Ticker,
    limit: u32,
    period_type: FinancialsPeriodType,
    sort: FinancialsSort,
}

impl StockFinancials {
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            limit: 5,
            period_type: FinancialsPeriodType::Year,
            sort: FinancialsSort::AscReportPeriod,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_period_type(mut self, period_type: FinancialsPeriodType) -> Self {
        self.period_type = period_type;
        self
    }

    pub fn with_sort(mut self, sort: FinancialsSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v2/reference/financials/{}", self.ticker))
            .param("limit", self.limit)
            .param("type", self.period_type)
            .param("sort", self.sort)
            .finish()
    }
}

/// `GET /v1/marketstatus/upcoming`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarketHolidays;

impl MarketHolidays {
    pub fn address(&self) -> String {
        AddressBuilder::new("/v1/marketstatus/upcoming").finish()
    }
}

/// `GET /v1/marketstatus/now`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarketStatus;

impl MarketStatus {
    pub fn address(&self) -> String {
        AddressBuilder::new("/v1/marketstatus/now").finish()
    }
}

/// `GET /v1/meta/exchanges`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockExchanges;

impl StockExchanges {
    pub fn address(&self) -> String {
        AddressBuilder::new("/v1/meta/exchanges").finish()
    }
}

/// `GET /v1/meta/conditions/{ticker_type}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionMappings {
    record_type: TickerRecordType,
}

impl ConditionMappings {
    pub fn new(record_type: TickerRecordType) -> Self {
        Self { record_type }
    }

    pub fn address(&self) -> String {
        AddressBuilder::new(format!("/v1/meta/conditions/{}", self.record_type)).finish()
    }
}

/// `GET /v1/meta/crypto-exchanges`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CryptoExchanges;

impl CryptoExchanges {
    pub fn address(&self) -> String {
        AddressBuilder::new("/v1/meta/crypto-exchanges").finish()
    }
}
