//! Property records
//!
//! `cost_per_night` is always in minor currency units (cents), both on the
//! way in and on the way out.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::require_text;
use super::ValidationError;

const MAX_TEXT_LEN: usize = 255;

/// Row from `properties`
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Property with its mean review rating, as returned by search.
///
/// `average_rating` is `None` only on the owner path, for properties with no
/// reviews; filtered search never returns unreviewed properties.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Insert payload for `properties`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Cents
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
}

impl NewProperty {
    /// Reject blank required text and negative money or counts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("title", &self.title),
            ("thumbnail_photo_url", &self.thumbnail_photo_url),
            ("cover_photo_url", &self.cover_photo_url),
            ("street", &self.street),
            ("city", &self.city),
            ("province", &self.province),
            ("post_code", &self.post_code),
            ("country", &self.country),
        ] {
            require_text(field, value, MAX_TEXT_LEN)?;
        }

        for (field, value) in [
            ("cost_per_night", self.cost_per_night),
            ("parking_spaces", self.parking_spaces),
            ("number_of_bathrooms", self.number_of_bathrooms),
            ("number_of_bedrooms", self.number_of_bedrooms),
        ] {
            if value < 0 {
                return Err(ValidationError::Negative {
                    field,
                    value: i64::from(value),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_new_property(owner_id: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: "Speed lamp".into(),
        description: Some("description".into()),
        thumbnail_photo_url: "https://images.example.com/2086676/thumb.jpeg".into(),
        cover_photo_url: "https://images.example.com/2086676/cover.jpeg".into(),
        cost_per_night: 93_061,
        street: "536 Namsub Highway".into(),
        city: "Sotboske".into(),
        province: "Quebec".into(),
        post_code: "28142".into(),
        country: "Canada".into(),
        parking_spaces: 6,
        number_of_bathrooms: 4,
        number_of_bedrooms: 8,
    }
}
