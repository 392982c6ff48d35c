// crates/travel-core/src/search.rs
use crate::common::DatasetStats;
use crate::model::{Country, Dataset, ResultRecord};
use crate::text::{fold_ascii_lower, normalize_keyword};
use crate::traits::{CitiesIter, CityContext, NameMatch, RecommendationSearch};

/// Maximum number of records a recommendation query returns.
pub const RESULT_CAP: usize = 2;

/// What a normalized keyword asks for.
///
/// Reserved words are checked in this order: `beach`, `temple`, `country`.
/// Anything else is matched against city and country names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Beach,
    Temple,
    Country,
    FreeText(String),
}

impl Category {
    /// Classify a raw keyword (normalization is applied here).
    pub fn from_keyword(raw: &str) -> Self {
        let keyword = normalize_keyword(raw);
        match keyword.as_str() {
            "beach" => Category::Beach,
            "temple" => Category::Temple,
            "country" => Category::Country,
            _ => Category::FreeText(keyword),
        }
    }
}

/// Recommend records for `raw_keyword`; see [`RecommendationSearch::recommend`].
pub fn recommend(db: &Dataset, raw_keyword: &str) -> Vec<ResultRecord> {
    db.recommend(raw_keyword)
}

impl RecommendationSearch for Dataset {
    fn stats(&self) -> DatasetStats {
        DatasetStats {
            beaches: self.beaches.len(),
            temples: self.temples.len(),
            countries: self.countries.len(),
            cities: self.countries.iter().map(|c| c.cities.len()).sum(),
        }
    }

    fn cities(&self) -> CitiesIter<'_> {
        Box::new(
            self.countries
                .iter()
                .flat_map(|country| country.cities.iter().map(move |city| (city, country))),
        )
    }

    fn find_country(&self, name: &str) -> Option<&Country> {
        let name = name.trim();
        self.countries.iter().find(|c| c.is_named(name))
    }

    fn find_cities_by_substring(&self, substr: &str) -> Vec<CityContext<'_>> {
        let q = fold_ascii_lower(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.cities()
            .filter(|(city, country)| city.name_contains(&q) || country.name_contains(&q))
            .collect()
    }

    fn recommend(&self, raw_keyword: &str) -> Vec<ResultRecord> {
        let category = Category::from_keyword(raw_keyword);
        log::debug!("recommend: {raw_keyword:?} -> {category:?}");

        // Everything is lazy up to `take`, so we never shape more than the cap.
        match &category {
            Category::Beach => self.beaches.iter().take(RESULT_CAP).map(Into::into).collect(),
            Category::Temple => self.temples.iter().take(RESULT_CAP).map(Into::into).collect(),
            Category::Country => self
                .cities()
                .take(RESULT_CAP)
                .map(|(city, _)| city.into())
                .collect(),
            // An empty keyword ("s", "es") matches every city.
            Category::FreeText(q) => self
                .cities()
                .filter(|(city, country)| city.name_contains(q) || country.name_contains(q))
                .take(RESULT_CAP)
                .map(|(city, _)| city.into())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Place;

    fn place(name: &str, tz: Option<&str>) -> Place {
        Place {
            name: name.to_string(),
            image_url: format!("{}.jpg", name.to_lowercase()),
            description: format!("About {name}"),
            time_zone: tz.map(str::to_string),
        }
    }

    fn country(name: &str, cities: &[(&str, &str)]) -> Country {
        Country {
            name: name.to_string(),
            cities: cities.iter().map(|(n, tz)| place(n, Some(tz))).collect(),
        }
    }

    fn fixture() -> Dataset {
        Dataset {
            beaches: vec![place("Bora Bora", None), place("Copacabana", Some("America/Sao_Paulo")), place("Whitehaven", None)],
            temples: vec![place("Angkor Wat", Some("Asia/Phnom_Penh"))],
            countries: vec![
                country("Australia", &[("Sydney, Australia", "Australia/Sydney"), ("Melbourne, Australia", "Australia/Melbourne")]),
                country("Japan", &[("Tokyo, Japan", "Asia/Tokyo"), ("Kyoto, Japan", "Asia/Tokyo"), ("Osaka, Japan", "Asia/Tokyo")]),
                country("Brazil", &[("Rio de Janeiro, Brazil", "America/Sao_Paulo")]),
            ],
        }
    }

    fn names(records: &[ResultRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn classifies_reserved_words_after_normalization() {
        assert_eq!(Category::from_keyword("Beaches"), Category::Beach);
        assert_eq!(Category::from_keyword("beach"), Category::Beach);
        assert_eq!(Category::from_keyword("TEMPLES"), Category::Temple);
        assert_eq!(Category::from_keyword("countries"), Category::FreeText("countri".into()));
        assert_eq!(Category::from_keyword("Country"), Category::Country);
        assert_eq!(Category::from_keyword("Japan"), Category::FreeText("japan".into()));
    }

    #[test]
    fn beach_returns_first_two_beaches_unmodified() {
        let db = fixture();
        let out = db.recommend("beaches");
        assert_eq!(names(&out), ["Bora Bora", "Copacabana"]);
        assert_eq!(out[1], ResultRecord::from(&db.beaches[1]));
    }

    #[test]
    fn temple_with_single_entry_is_not_padded() {
        let out = fixture().recommend("Temple");
        assert_eq!(names(&out), ["Angkor Wat"]);
        assert_eq!(out[0].time_zone(), Some("Asia/Phnom_Penh"));
    }

    #[test]
    fn country_flattens_in_dataset_order() {
        let out = fixture().recommend("country");
        assert_eq!(names(&out), ["Sydney, Australia", "Melbourne, Australia"]);
        assert!(out.iter().all(|r| r.time_zone.is_some()));
    }

    #[test]
    fn country_name_matches_its_cities() {
        let out = fixture().recommend("Japan");
        assert_eq!(names(&out), ["Tokyo, Japan", "Kyoto, Japan"]);
    }

    #[test]
    fn city_name_substring_matches() {
        let out = fixture().recommend("rio");
        assert_eq!(names(&out), ["Rio de Janeiro, Brazil"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(fixture().recommend("Atlantis").is_empty());
    }

    #[test]
    fn empty_normalized_keyword_matches_all_cities() {
        let out = fixture().recommend("s");
        assert_eq!(names(&out), ["Sydney, Australia", "Melbourne, Australia"]);
    }

    #[test]
    fn over_aggressive_singularization_is_kept() {
        // "Paris" -> "pari" still finds a city named Paris.
        let db = Dataset {
            countries: vec![country("France", &[("Paris, France", "Europe/Paris")])],
            ..Dataset::default()
        };
        assert_eq!(names(&db.recommend("Paris")), ["Paris, France"]);
    }

    #[test]
    fn query_is_idempotent() {
        let db = fixture();
        for kw in ["beach", "country", "japan", "nothing"] {
            assert_eq!(db.recommend(kw), db.recommend(kw));
        }
    }

    #[test]
    fn results_never_exceed_cap() {
        let db = fixture();
        for kw in ["", "a", "e", "beach", "temple", "country", "japan", "australia", "o"] {
            assert!(db.recommend(kw).len() <= RESULT_CAP, "keyword {kw:?}");
        }
    }

    #[test]
    fn stats_count_everything() {
        let stats = fixture().stats();
        assert_eq!(
            stats,
            DatasetStats { beaches: 3, temples: 1, countries: 3, cities: 6 }
        );
    }

    #[test]
    fn find_country_ignores_case() {
        let db = fixture();
        assert_eq!(db.find_country("japan").map(|c| c.name()), Some("Japan"));
        assert!(db.find_country("Atlantis").is_none());
    }

    #[test]
    fn substring_lookup_is_uncapped_and_skips_empty_queries() {
        let db = fixture();
        assert_eq!(db.find_cities_by_substring("japan").len(), 3);
        assert!(db.find_cities_by_substring("  ").is_empty());
    }

    #[test]
    fn free_function_matches_trait() {
        let db = fixture();
        assert_eq!(recommend(&db, "Japan"), db.recommend("Japan"));
    }
}
