// crates/travel-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded dataset.
///
/// Returned by [`RecommendationSearch::stats`](crate::traits::RecommendationSearch::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub beaches: usize,
    pub temples: usize,
    pub countries: usize,
    pub cities: usize,
}
