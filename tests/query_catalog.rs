//! Golden address fragments for every endpoint in the catalog.
//!
//! Each fragment must match the service's path template and parameter order
//! byte for byte.

use polygonio_client::{
    CalendarDate, Direction, Domain, FinancialsPeriodType, FinancialsSort, Market, Query, Sort,
    TickerRecordType, Timespan, CRYPTO, EQUITIES, FOREX, REFERENCE,
};

fn address(query: impl Into<Query>) -> String {
    query.into().address()
}

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day)
}

// =============================================================================
// Reference
// =============================================================================

#[test]
fn reference_endpoints_render_golden_fragments() {
    assert_eq!(
        address(
            REFERENCE
                .tickers()
                .with_sort("ticker")
                .with_type("etp")
                .with_market(Market::Crypto)
                .with_locale("us")
                .with_search("bit")
                .with_per_page(10)
                .with_page(2)
                .with_active(false)
        ),
        "/v2/reference/tickers?sort=ticker&type=etp&market=CRYPTO&locale=us&search=bit&perpage=10&page=2&active=false&apiKey="
    );
    assert_eq!(
        address(REFERENCE.tickers().with_market(Market::Any)),
        "/v2/reference/tickers?sort=&type=&market=&locale=&search=&perpage=50&page=1&active=true&apiKey="
    );
    assert_eq!(address(REFERENCE.ticker_types()), "/v2/reference/types?apiKey=");
    assert_eq!(
        address(REFERENCE.ticker_details("AAPL")),
        "/v1/meta/symbols/AAPL/company?apiKey="
    );
    assert_eq!(
        address(REFERENCE.ticker_news("AAPL").with_per_page(5).with_page(3)),
        "/v1/meta/symbols/AAPL/news?perpage=5&page=3&apiKey="
    );
    assert_eq!(address(REFERENCE.markets()), "/v2/reference/markets?apiKey=");
    assert_eq!(address(REFERENCE.locales()), "/v2/reference/locales?apiKey=");
    assert_eq!(
        address(REFERENCE.stock_splits("TSLA")),
        "/v2/reference/splits/TSLA?apiKey="
    );
    assert_eq!(
        address(REFERENCE.stock_dividends("MSFT")),
        "/v2/reference/dividends/MSFT?apiKey="
    );
    assert_eq!(
        address(REFERENCE.stock_financials("AAPL")),
        "/v2/reference/financials/AAPL?limit=5&type=Y&sort=reportPeriod&apiKey="
    );
    assert_eq!(
        address(
            REFERENCE
                .stock_financials("AAPL")
                .with_limit(1)
                .with_period_type(FinancialsPeriodType::Trailing)
                .with_sort(FinancialsSort::DescCalendarDate)
        ),
        "/v2/reference/financials/AAPL?limit=1&type=T&sort=-calendarDate&apiKey="
    );
    assert_eq!(
        address(REFERENCE.market_holidays()),
        "/v1/marketstatus/upcoming?apiKey="
    );
    assert_eq!(address(REFERENCE.market_status()), "/v1/marketstatus/now?apiKey=");
    assert_eq!(address(REFERENCE.stock_exchanges()), "/v1/meta/exchanges?apiKey=");
    assert_eq!(
        address(REFERENCE.condition_mappings(TickerRecordType::Quotes)),
        "/v1/meta/conditions/quotes?apiKey="
    );
    assert_eq!(
        address(REFERENCE.crypto_exchanges()),
        "/v1/meta/crypto-exchanges?apiKey="
    );
}

// =============================================================================
// Equities
// =============================================================================

#[test]
fn equities_endpoints_render_golden_fragments() {
    assert_eq!(
        address(
            EQUITIES
                .trades("AAPL", date(2020, 10, 14))
                .with_timestamp(1_602_681_600_000_000_000)
                .with_timestamp_limit(1_602_700_000_000_000_000)
        ),
        "/v2/ticks/stocks/trades/AAPL/2020-10-14?timestamp=1602681600000000000&timestampLimit=1602700000000000000&reverse=true&limit=10&apiKey="
    );
    assert_eq!(
        address(EQUITIES.quotes("AAPL", date(2020, 10, 14))),
        "/v2/ticks/stocks/nbbo/AAPL/2020-10-14?timestamp=&timestampLimit=&reverse=true&limit=10&apiKey="
    );
    assert_eq!(address(EQUITIES.last_trade("AAPL")), "/v1/last/stocks/AAPL?apiKey=");
    assert_eq!(
        address(EQUITIES.last_quote("AAPL")),
        "/v1/last_quote/stocks/AAPL?apiKey="
    );
    assert_eq!(
        address(EQUITIES.daily_open_close("AAPL", date(2020, 10, 14))),
        "/v1/open-close/AAPL/2020-10-14?apiKey="
    );
    assert_eq!(
        address(EQUITIES.grouped_daily_bars(date(2020, 10, 14)).with_unadjusted(false)),
        "/v2/aggs/grouped/locale/us/market/stocks/2020-10-14?unadjusted=false&apiKey="
    );
    assert_eq!(
        address(EQUITIES.previous_close("AAPL")),
        "/v2/aggs/ticker/AAPL/prev?unadjusted=true&apiKey="
    );
    assert_eq!(
        address(EQUITIES.aggregate_bars(
            "AAPL",
            1,
            Timespan::Day,
            date(2021, 1, 1),
            date(2021, 1, 31)
        )),
        "/v2/aggs/ticker/AAPL/range/1/day/2021-01-01/2021-01-31?unadjusted=true&sort=asc&limit=120&apiKey="
    );
    assert_eq!(
        address(EQUITIES.snapshot_all_tickers(["AAPL", "TSLA", "MSFT"])),
        "/v2/snapshot/locale/us/markets/stocks/tickers?tickers=AAPL,TSLA,MSFT&apiKey="
    );
    assert_eq!(
        address(EQUITIES.snapshot_ticker("AAPL")),
        "/v2/snapshot/locale/us/markets/stocks/tickers/AAPL?apiKey="
    );
    assert_eq!(
        address(EQUITIES.snapshot_gainers_losers(Direction::Losers)),
        "/v2/snapshot/locale/us/markets/stocks/losers?apiKey="
    );
}

// =============================================================================
// Forex
// =============================================================================

#[test]
fn forex_endpoints_render_golden_fragments() {
    assert_eq!(
        address(
            FOREX
                .historic_ticks("AUD/USD", date(2020, 10, 14))
                .with_offset(1_602_681_600_000)
                .with_limit(5)
        ),
        "/v1/historic/forex/AUD/USD/2020-10-14?offset=1602681600000&limit=5&apiKey="
    );
    assert_eq!(
        address(FOREX.realtime_conversion("AUD/USD")),
        "/v1/conversion/AUD/USD?amount=100&precision=2&apiKey="
    );
    assert_eq!(
        address(FOREX.realtime_conversion("AUD/USD").with_amount(250).with_precision(4)),
        "/v1/conversion/AUD/USD?amount=250&precision=4&apiKey="
    );
    assert_eq!(
        address(FOREX.last_quote("AUD/USD")),
        "/v1/last_quote/currencies/AUD/USD?&apiKey="
    );
    assert_eq!(
        address(FOREX.grouped_daily_bars(date(2020, 10, 14))),
        "/v2/aggs/grouped/locale/global/market/fx/2020-10-14?unadjusted=true&apiKey="
    );
    assert_eq!(
        address(FOREX.previous_close("C:EURUSD")),
        "/v2/aggs/ticker/C:EURUSD/prev?unadjusted=true&apiKey="
    );
    assert_eq!(
        address(
            FOREX
                .aggregate_bars("C:EURUSD", 15, Timespan::Minute, date(2021, 7, 1), date(2021, 7, 2))
                .with_unadjusted(false)
                .with_sort(Sort::Desc)
                .with_limit(1000)
        ),
        "/v2/aggs/ticker/C:EURUSD/range/15/minute/2021-07-01/2021-07-02?unadjusted=false&sort=desc&limit=1000&apiKey="
    );
    assert_eq!(
        address(FOREX.snapshot_ticker("C:EURUSD")),
        "/v2/snapshot/locale/global/markets/forex/tickers/C:EURUSD?&apiKey="
    );
    assert_eq!(
        address(FOREX.snapshot_all_tickers(Vec::<String>::new())),
        "/v2/snapshot/locale/global/markets/forex/tickers?tickers=&apiKey="
    );
    assert_eq!(
        address(FOREX.snapshot_gainers_losers(Direction::Gainers)),
        "/v2/snapshot/locale/global/markets/forex/gainers?&apiKey="
    );
}

// =============================================================================
// Crypto
// =============================================================================

#[test]
fn crypto_endpoints_render_golden_fragments() {
    assert_eq!(
        address(CRYPTO.daily_open_close("BTC", "USD", date(2020, 10, 14))),
        "/v1/open-close/crypto/BTC/USD/2020-10-14?unadjusted=true&apiKey="
    );
    assert_eq!(
        address(CRYPTO.historic_trades("BTC", "USD", date(2020, 10, 14)).with_offset(42)),
        "/v1/historic/crypto/BTC/USD/2020-10-14?offset=42&limit=100&apiKey="
    );
    assert_eq!(
        address(CRYPTO.grouped_daily_bars(date(2020, 10, 14))),
        "/v2/aggs/grouped/locale/global/market/crypto/2020-10-14?unadjusted=true&apiKey="
    );
    assert_eq!(
        address(CRYPTO.previous_close("X:BTCUSD").with_unadjusted(false)),
        "/v2/aggs/ticker/X:BTCUSD/prev?unadjusted=false&apiKey="
    );
    assert_eq!(
        address(CRYPTO.aggregate_bars("X:BTCUSD", 1, Timespan::Hour, date(2021, 1, 1), date(2021, 1, 2))),
        "/v2/aggs/ticker/X:BTCUSD/range/1/hour/2021-01-01/2021-01-02?unadjusted=true&sort=asc&limit=120&apiKey="
    );
    assert_eq!(
        address(CRYPTO.snapshot_all_tickers(["X:BTCUSD", "X:ETHUSD"])),
        "/v2/snapshot/locale/global/markets/crypto/tickers?tickers=X:BTCUSD,X:ETHUSD&apiKey="
    );
    assert_eq!(
        address(CRYPTO.snapshot_ticker("X:BTCUSD")),
        "/v2/snapshot/locale/global/markets/crypto/tickers/X:BTCUSD?&apiKey="
    );
    assert_eq!(
        address(CRYPTO.snapshot_full_book("X:BTCUSD")),
        "/v2/snapshot/locale/global/markets/crypto/tickers/X:BTCUSD/book?&apiKey="
    );
    assert_eq!(
        address(CRYPTO.snapshot_gainers_losers(Direction::Losers)),
        "/v2/snapshot/locale/global/markets/crypto/losers?&apiKey="
    );
    assert_eq!(
        address(CRYPTO.last_trade("BTC", "USD")),
        "/v1/last/crypto/BTC/USD?&apiKey="
    );
}

// =============================================================================
// Catalog-wide properties
// =============================================================================

fn every_endpoint() -> Vec<Query> {
    let day = date(2021, 3, 4);
    vec![
        REFERENCE.tickers().into(),
        REFERENCE.ticker_types().into(),
        REFERENCE.ticker_details("AAPL").into(),
        REFERENCE.ticker_news("AAPL").into(),
        REFERENCE.markets().into(),
        REFERENCE.locales().into(),
        REFERENCE.stock_splits("AAPL").into(),
        REFERENCE.stock_dividends("AAPL").into(),
        REFERENCE.stock_financials("AAPL").into(),
        REFERENCE.market_holidays().into(),
        REFERENCE.market_status().into(),
        REFERENCE.stock_exchanges().into(),
        REFERENCE.condition_mappings(TickerRecordType::Trades).into(),
        REFERENCE.crypto_exchanges().into(),
        EQUITIES.trades("AAPL", day).into(),
        EQUITIES.quotes("AAPL", day).into(),
        EQUITIES.last_trade("AAPL").into(),
        EQUITIES.last_quote("AAPL").into(),
        EQUITIES.daily_open_close("AAPL", day).into(),
        EQUITIES.grouped_daily_bars(day).into(),
        EQUITIES.previous_close("AAPL").into(),
        EQUITIES.aggregate_bars("AAPL", 1, Timespan::Day, day, day).into(),
        EQUITIES.snapshot_all_tickers(["AAPL"]).into(),
        EQUITIES.snapshot_ticker("AAPL").into(),
        EQUITIES.snapshot_gainers_losers(Direction::Gainers).into(),
        FOREX.historic_ticks("AUD/USD", day).into(),
        FOREX.realtime_conversion("AUD/USD").into(),
        FOREX.last_quote("AUD/USD").into(),
        FOREX.grouped_daily_bars(day).into(),
        FOREX.previous_close("C:EURUSD").into(),
        FOREX.aggregate_bars("C:EURUSD", 1, Timespan::Day, day, day).into(),
        FOREX.snapshot_ticker("C:EURUSD").into(),
        FOREX.snapshot_all_tickers(["C:EURUSD"]).into(),
        FOREX.snapshot_gainers_losers(Direction::Gainers).into(),
        CRYPTO.daily_open_close("BTC", "USD", day).into(),
        CRYPTO.historic_trades("BTC", "USD", day).into(),
        CRYPTO.grouped_daily_bars(day).into(),
        CRYPTO.previous_close("X:BTCUSD").into(),
        CRYPTO.aggregate_bars("X:BTCUSD", 1, Timespan::Day, day, day).into(),
        CRYPTO.snapshot_all_tickers(["X:BTCUSD"]).into(),
        CRYPTO.snapshot_ticker("X:BTCUSD").into(),
        CRYPTO.snapshot_full_book("X:BTCUSD").into(),
        CRYPTO.snapshot_gainers_losers(Direction::Gainers).into(),
        CRYPTO.last_trade("BTC", "USD").into(),
    ]
}

#[test]
fn every_fragment_ends_with_a_single_api_key_parameter() {
    for query in every_endpoint() {
        let address = query.address();
        assert!(address.starts_with('/'), "{} must be host-relative", query.name());
        assert!(address.ends_with("apiKey="), "{} must end with apiKey=", query.name());
        assert_eq!(
            address.matches("apiKey=").count(),
            1,
            "{} must carry exactly one apiKey parameter",
            query.name()
        );
    }
}

#[test]
fn endpoint_names_are_unique_and_domains_are_complete() {
    let queries = every_endpoint();
    let mut names: Vec<&str> = queries.iter().map(Query::name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), queries.len(), "endpoint names must be unique");

    let count = |domain: Domain| queries.iter().filter(|q| q.domain() == domain).count();
    assert_eq!(count(Domain::Reference), 14);
    assert_eq!(count(Domain::Equities), 11);
    assert_eq!(count(Domain::Forex), 9);
    assert_eq!(count(Domain::Crypto), 10);
}

#[test]
fn rendering_is_pure() {
    for query in every_endpoint() {
        assert_eq!(query.address(), query.address());
        assert_eq!(query.clone().address(), query.to_string());
    }
}
