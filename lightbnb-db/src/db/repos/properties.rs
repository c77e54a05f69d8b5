//! Property repository
//!
//! Search renders a `PropertySearch` plan; insert pairs every column with
//! its value by name in a single listing.

use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::DbResult;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::search::PropertySearch;

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Run a planned search. An empty result is `Ok(vec![])`.
    #[instrument(skip_all, fields(limit = search.limit().get()), err)]
    pub async fn search(&self, search: &PropertySearch) -> DbResult<Vec<PropertyListing>> {
        let mut qb = search.to_query();
        debug!(sql = qb.sql(), "property search");

        let rows: Vec<PropertyListing> = qb.build_query_as().fetch_all(self.pool).await?;

        debug!(rows = rows.len(), "property search finished");
        Ok(rows)
    }

    /// Insert a property and return the inserted rows (always one).
    #[instrument(skip_all, fields(owner_id = property.owner_id), err)]
    pub async fn create(&self, property: &NewProperty) -> DbResult<Vec<Property>> {
        property.validate()?;

        let rows = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id,
                title,
                description,
                thumbnail_photo_url,
                cover_photo_url,
                cost_per_night,
                street,
                city,
                province,
                post_code,
                country,
                parking_spaces,
                number_of_bathrooms,
                number_of_bedrooms
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(property.description.as_deref())
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "property created");
        Ok(rows)
    }
}
