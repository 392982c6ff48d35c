//! travel-cli
//! ==========
//!
//! Command-line interface for the `travel-core` recommendation engine.
//!
//! This crate primarily provides a binary (`travel`). The library target is
//! kept so docs render an overview page.
//!
//! Basic usage:
//!
//! ```text
//! travel --help
//! travel search beaches
//! travel --input ./travel_recommendation_api.json search japan
//! travel stats
//! travel interactive
//! ```
//!
//! For programmatic access use the [`travel-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
