use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub years_of_experience: i32,
    pub phone_number: String,
    /// JSON-encoded list of specialty tags.
    pub specialties: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub years_of_experience: i32,
    pub phone_number: &'a str,
    pub specialties: String,
}

/// Decodes the specialty column. A payload that is not a JSON string array
/// counts as "no specialties" for that record rather than a query failure.
pub(crate) fn decode_specialties(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

impl From<Advocate> for DomainAdvocate {
    fn from(advocate: Advocate) -> Self {
        Self {
            id: advocate.id,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties: decode_specialties(&advocate.specialties),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
            created_at: advocate.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    fn from(advocate: &'a DomainNewAdvocate) -> Self {
        Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number.as_str(),
            specialties: serde_json::to_string(&advocate.specialties)
                .unwrap_or_else(|_| "[]".to_string()),
        }
    }
}
