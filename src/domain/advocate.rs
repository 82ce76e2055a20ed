use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A directory entry for a single advocate.
///
/// Records are owned by the store and immutable from the application's
/// perspective; the only writer is the bulk importer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Ordered list of specialty tags, possibly empty.
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: String,
    pub created_at: NaiveDateTime,
}

impl Advocate {
    /// Returns true when the advocate carries every one of the given
    /// specialty tags, in any order.
    pub fn has_specialties(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.specialties.contains(tag))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: String,
}

impl NewAdvocate {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        city: String,
        degree: String,
        specialties: Vec<String>,
        years_of_experience: i32,
        phone_number: String,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            city: city.trim().to_string(),
            degree: degree.trim().to_string(),
            specialties: specialties
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            years_of_experience: years_of_experience.max(0),
            phone_number: phone_number.trim().to_string(),
        }
    }
}

/// Distinct attribute values across the whole store, used to populate the
/// filter controls. Independent of any particular query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub degrees: Vec<String>,
    pub specialties: Vec<String>,
}
