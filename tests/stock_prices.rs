#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Integration tests for the price and news endpoints.

pub mod common;

use chrono::{TimeZone as _, Utc};
use httpmock::{Method::GET, MockServer};
use iex_client_sdk::stock_prices::Client;
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use serde_json::json;

use crate::common::config;

#[tokio::test]
async fn quote_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&config(&server))?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/aapl/quote");
        then.status(StatusCode::OK).json_body(json!({
            "symbol": "AAPL",
            "companyName": "Apple Inc.",
            "primaryExchange": "NASDAQ",
            "latestPrice": 120.96,
            "latestSource": "IEX real time price",
            "latestTime": "12:07:42 PM",
            "latestUpdate": 1_608_073_662_331_i64,
            "latestVolume": 36_169_631,
            "open": 121.15,
            "close": null,
            "high": 121.99,
            "low": 120.32,
            "previousClose": 121.78,
            "change": -0.82,
            "changePercent": -0.00673,
            "avgTotalVolume": 102_413_854,
            "marketCap": 2_056_707_338_160_i64,
            "peRatio": 36.86,
            "week52High": 137.98,
            "week52Low": 52.83,
            "ytdChange": 0.6514,
            "isUSMarketOpen": true
        }));
    });

    let quote = client.quote("aapl").await?;

    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.latest_price, Some(dec!(120.96)));
    assert_eq!(quote.change_percent, Some(dec!(-0.00673)));
    assert_eq!(
        quote.latest_update,
        Some(Utc.timestamp_millis_opt(1_608_073_662_331).unwrap())
    );
    // null close maps to unset, not a decode error
    assert_eq!(quote.close, None);
    assert_eq!(quote.is_us_market_open, Some(true));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn previous_day_price_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&config(&server))?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/aapl/previous");
        then.status(StatusCode::OK).json_body(json!({
            "symbol": "AAPL",
            "date": "2020-12-15",
            "open": 124.34,
            "close": 127.88,
            "high": 128.27,
            "low": 124.13,
            "volume": 157_572_262,
            "unadjustedVolume": 157_572_262,
            "change": 6.16,
            "changePercent": 0.0506
        }));
    });

    let previous = client.previous_day_price("aapl").await?;

    assert_eq!(previous.symbol, "AAPL");
    assert_eq!(
        previous.date,
        Some(chrono::NaiveDate::from_ymd_opt(2020, 12, 15).unwrap())
    );
    assert_eq!(previous.close, Some(dec!(127.88)));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn ohlc_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&config(&server))?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/aapl/ohlc");
        then.status(StatusCode::OK).json_body(json!({
            "open": { "price": 121.15, "time": 1_608_042_600_551_i64 },
            "close": { "price": 127.88, "time": 1_608_066_000_305_i64 },
            "high": 128.27,
            "low": 124.13
        }));
    });

    let ohlc = client.ohlc("aapl").await?;

    assert_eq!(
        ohlc.open.as_ref().and_then(|point| point.price),
        Some(dec!(121.15))
    );
    assert_eq!(ohlc.high, Some(dec!(128.27)));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn largest_trades_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&config(&server))?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/aapl/largest-trades");
        then.status(StatusCode::OK).json_body(json!([
            {
                "price": 186.39,
                "size": 10_000,
                "time": 1_527_090_690_175_i64,
                "timeLabel": "11:51:30",
                "venue": "EDGX",
                "venueName": "Cboe EDGX"
            }
        ]));
    });

    let trades = client.largest_trades("aapl").await?;

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].price, Some(dec!(186.39)));
    assert_eq!(trades[0].venue.as_deref(), Some("EDGX"));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn news_substitutes_symbol_and_last() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&config(&server))?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/aapl/news/last/2");
        then.status(StatusCode::OK).json_body(json!([
            {
                "datetime": 1_545_215_400_000_i64,
                "headline": "Voice Search Technology Gains Ground",
                "source": "Benzinga",
                "url": "https://cloud.iexapis.com/v1/news/article/1",
                "summary": "Voice search is likely to grow by leap and bounds",
                "related": "AAPL,AMZN,GOOG",
                "lang": "en",
                "hasPaywall": false
            },
            {
                "headline": "Apple Supplier Updates Guidance",
                "source": "Reuters"
            }
        ]));
    });

    let news = client.news("aapl", 2).await?;

    assert_eq!(news.len(), 2);
    assert_eq!(
        news[0].headline.as_deref(),
        Some("Voice Search Technology Gains Ground")
    );
    assert_eq!(news[0].has_paywall, Some(false));
    assert_eq!(news[1].datetime, None);
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn news_field_returns_raw_body() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = Client::new(&config(&server))?;

    let mock = server.mock(|when, then| {
        when.method(GET).path("/stock/aapl/news/last/1/headline");
        then.status(StatusCode::OK)
            .body("Voice Search Technology Gains Ground");
    });

    let headline = client.news_field("aapl", 1, "headline").await?;

    assert_eq!(headline, "Voice Search Technology Gains Ground");
    mock.assert();

    Ok(())
}
