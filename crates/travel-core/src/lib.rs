// crates/travel-core/src/lib.rs

//! travel-core
//! ===========
//!
//! Travel destination dataset (beaches, temples, countries and their
//! cities), keyword normalization, a capped recommendation query, per-zone
//! clock formatting, and the search/reset controller behind the widget.
//!
//! ```rust
//! use travel_core::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! let db = Dataset::from_json_str(r#"{"countries": [{"name": "Japan", "cities": [
//!     {"name": "Tokyo, Japan", "imageUrl": "t.jpg", "description": "", "timeZone": "Asia/Tokyo"}
//! ]}]}"#).unwrap();
//!
//! let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! let view = render(&db.recommend("japan"), &clock);
//! assert_eq!(view.cards()[0].current_time, "9:00:00 AM");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod controller;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod render;
pub mod search;
pub mod text;
pub mod time;
pub mod traits;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::error::{Result, TravelError};
pub use crate::model::{City, Country, Dataset, Place, ResultRecord};
pub use crate::search::{recommend, Category, RESULT_CAP};
pub use crate::traits::RecommendationSearch;
