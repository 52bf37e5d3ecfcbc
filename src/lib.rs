//! # Daybrief
//!
//! A terminal briefing tool that fetches cryptocurrency prices, news
//! headlines, and weather reports from public web pages and HTTP APIs.
//!
//! ## Features
//!
//! - Scrapes ranked asset prices from the CoinMarketCap listing page
//! - Searches articles by topic through a NewsAPI-style search endpoint
//! - Fetches current weather for any location from OpenWeatherMap
//! - Scrapes crypto headlines as a standalone library capability
//! - Runs the price, news, and weather fetches concurrently and merges
//!   them into one [`models::Digest`]
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... WEATHER_API_KEY=... daybrief
//! ```
//!
//! ## Architecture
//!
//! The binary runs a one-shot interactive menu ([`shell`]) that invokes a
//! single scraper per run. The library additionally exposes
//! [`digest::fetch_all`], the concurrent composite fetch, for consumers
//! that want the whole briefing in one await; the menu never calls it.

pub mod cli;
pub mod config;
pub mod digest;
pub mod models;
pub mod scrapers;
pub mod shell;
pub mod utils;
