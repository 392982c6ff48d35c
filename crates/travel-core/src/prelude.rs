// crates/travel-core/src/prelude.rs
pub use crate::common::DatasetStats;
pub use crate::controller::{Command, Controller, Notice, Transition, UiState};
pub use crate::error::{Result, TravelError};
pub use crate::loader::DatasetSource;
#[cfg(feature = "json")]
pub use crate::loader::{FileSource, JsonSource};
pub use crate::model::{City, Country, Dataset, Place, ResultRecord};
pub use crate::render::{render, Card, View};
pub use crate::search::{recommend, Category, RESULT_CAP};
pub use crate::text::normalize_keyword;
pub use crate::time::{format_now, Clock, FixedClock, SystemClock};
pub use crate::traits::{NameMatch, RecommendationSearch};
