// crates/travel-core/src/traits.rs
use crate::common::DatasetStats;
use crate::model::{City, Country, Place, ResultRecord};
use crate::text::{contains_folded, fold_ascii_lower};

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get case-insensitive helpers:
/// - [`NameMatch::is_named`]: equality on the ASCII-folded form
/// - [`NameMatch::name_contains`]: substring match on the ASCII-folded form
///
/// # Examples
/// ```rust
/// use travel_core::traits::NameMatch;
///
/// struct Spot(&'static str);
/// impl NameMatch for Spot {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Spot("Kyoto").is_named("KYOTO"));
/// assert!(Spot("Rio de Janeiro").name_contains("JANEIRO"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str().eq_ignore_ascii_case(q)
    }

    /// Case-insensitive substring match. `q` is folded before comparing.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_folded(self.name_str(), &fold_ascii_lower(q))
    }
}

impl NameMatch for Place {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// A city paired with the country that owns it.
pub type CityContext<'a> = (&'a City, &'a Country);

/// An iterator that yields cities with their owning country, in dataset order.
pub type CitiesIter<'a> = Box<dyn Iterator<Item = CityContext<'a>> + 'a>;

/// Query operations over a loaded dataset.
pub trait RecommendationSearch {
    fn stats(&self) -> DatasetStats;

    /// Iterate over every city together with its country.
    ///
    /// Countries are visited in dataset order, and cities within each country
    /// in dataset order.
    fn cities(&self) -> CitiesIter<'_>;

    /// Find a country by name, case-insensitive exact match.
    fn find_country(&self, name: &str) -> Option<&Country>;

    /// All cities whose own name or country name contains `substr`
    /// (case-insensitive). Not capped.
    fn find_cities_by_substring(&self, substr: &str) -> Vec<CityContext<'_>>;

    /// Recommend at most [`RESULT_CAP`](crate::search::RESULT_CAP) records
    /// for a raw, un-normalized keyword.
    ///
    /// # Example
    ///
    /// ```rust
    /// use travel_core::prelude::*;
    ///
    /// let db = Dataset::from_json_str(r#"{
    ///     "beaches": [
    ///         {"name": "A", "imageUrl": "a.jpg", "description": "a"},
    ///         {"name": "B", "imageUrl": "b.jpg", "description": "b"},
    ///         {"name": "C", "imageUrl": "c.jpg", "description": "c"}
    ///     ]
    /// }"#).unwrap();
    ///
    /// let names: Vec<_> = db.recommend("Beaches").into_iter().map(|r| r.name).collect();
    /// assert_eq!(names, ["A", "B"]);
    /// ```
    fn recommend(&self, raw_keyword: &str) -> Vec<ResultRecord>;
}
