//! # Linkcaster
//!
//! A content-discovery bot: finds candidate links through web search and
//! crawling, filters them by domain trust, history and a per-run cap, and
//! posts short promotional messages to X (or only logs them in safe mode).
//!
//! ## Architecture
//!
//! ```text
//! Discovery → Screening → Trust learning → Fetch chain → Message → Publisher
//!                               ↕
//!                             Store
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export SERPAPI_KEY=... FIRECRAWL_KEY=...
//!
//! # Dry run: everything except the actual post
//! linkcaster run
//!
//! # Post for real, at most one message
//! X_BEARER_TOKEN=... linkcaster run --live --cap 1
//!
//! # Inspect the bookkeeping
//! linkcaster status
//! linkcaster blacklist list
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires configuration,
/// credentials and the store into a [`Runner`](pipeline::Runner).
pub mod app;

/// Command-line interface using clap.
///
/// - `run [--live|--safe] [--cap N] [--no-pacing]` - One bot run
/// - `status` - Store locations and counts
/// - `history [--limit N]` - Posted URLs
/// - `trusted` - Built-in and learned domains
/// - `blacklist list|add|remove` - Manual blacklist edits
pub mod cli;

/// REST clients for SerpAPI, Firecrawl and the X API.
pub mod clients;

/// Configuration file and environment credentials.
pub mod config;

/// Candidate URL sources.
///
/// - [`SerpApiSource`](discovery::SerpApiSource): Google results via SerpAPI
/// - [`FirecrawlSearchSource`](discovery::FirecrawlSearchSource): Firecrawl web search
/// - [`FirecrawlCrawlSource`](discovery::FirecrawlCrawlSource): Crawl of seed pages
pub mod discovery;

/// Core domain models: candidates, page entries, host normalization,
/// trusted domains and the blacklist.
pub mod domain;

/// Turning a candidate URL into postable pages through an ordered chain of
/// strategies.
pub mod fetcher;

/// Message templates and length limits.
pub mod message;

/// Posting cadence: random off days and randomized delays before each post,
/// configured with interval strings like `"4h"`.
pub mod pacing;

/// One bot run: screening, learning, dedup, cap and escalation.
pub mod pipeline;

/// Message sinks: the X API or the safe-mode log.
pub mod publisher;

/// JSON file persistence for history, learned domains and blacklist.
///
/// - [`Store`](store::Store): Trait defining storage operations
/// - [`JsonStore`](store::JsonStore): Flat-file implementation
pub mod store;
