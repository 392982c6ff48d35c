// crates/travel-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A single destination: a beach, a temple, or a city inside a country.
///
/// Field names follow the dataset document (`imageUrl`, `timeZone`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    pub image_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Cities carry exactly the same fields as other places.
pub type City = Place;

/// A country entry: a name and its cities in dataset order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub cities: Vec<City>,
}

/// The full travel document.
///
/// A dataset is loaded fresh for every search and dropped once the search
/// has been rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub beaches: Vec<Place>,
    #[serde(default)]
    pub temples: Vec<Place>,
    #[serde(default)]
    pub countries: Vec<Country>,
}

/// The shaped `{name, imageUrl, description, timeZone}` projection shown per card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub name: String,
    pub image_url: String,
    pub description: String,
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl From<&Place> for ResultRecord {
    fn from(p: &Place) -> Self {
        ResultRecord {
            name: p.name.clone(),
            image_url: p.image_url.clone(),
            description: p.description.clone(),
            time_zone: p.time_zone.clone(),
        }
    }
}

impl Dataset {
    pub fn beaches(&self) -> &[Place] {
        &self.beaches
    }

    pub fn temples(&self) -> &[Place] {
        &self.temples
    }

    /// All countries in the dataset.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

impl Place {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
}

impl ResultRecord {
    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
}
