//! Property search - the one query with more than one shape
//!
//! `SearchOptions` is what callers send. It is planned into a
//! `PropertySearch`: either the owner listing, or an ordered set of
//! predicates each owning its bind values. Rendering walks the plan once and
//! uses `QueryBuilder::push_bind`, so every `$n` is emitted at the same time
//! its value is bound. The limit is always bound last.

use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::models::Limit;

const SELECT_LISTING: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating FROM properties";

/// Caller-facing search filters. Prices are in major currency units.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchOptions {
    /// When set, every other filter is ignored
    pub owner_id: Option<i32>,
    pub city: Option<String>,
    pub minimum_price_per_night: Option<i64>,
    pub maximum_price_per_night: Option<i64>,
    pub minimum_rating: Option<f64>,
}

/// Row filter in the `WHERE` clause of a filtered search
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Literal substring of `city`; LIKE wildcards in the input are escaped
    CityContains(String),
    /// Inclusive, in cents
    PriceBetween { min_cents: i64, max_cents: i64 },
}

impl Predicate {
    fn push_onto(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::CityContains(city) => {
                qb.push("properties.city LIKE ")
                    .push_bind(format!("%{}%", escape_like(city)))
                    .push(r" ESCAPE '\'");
            }
            Self::PriceBetween {
                min_cents,
                max_cents,
            } => {
                qb.push("properties.cost_per_night >= ")
                    .push_bind(*min_cents)
                    .push(" AND properties.cost_per_night <= ")
                    .push_bind(*max_cents);
            }
        }
    }
}

/// Planned search, ready to render
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySearch {
    /// Everything `owner_id` owns, reviewed or not
    Owner { owner_id: i32, limit: Limit },
    /// Reviewed properties matching all predicates, cheapest first
    Filtered {
        predicates: Vec<Predicate>,
        min_rating: Option<f64>,
        limit: Limit,
    },
}

impl PropertySearch {
    /// Turn caller options into a plan.
    ///
    /// - `owner_id` short-circuits to the owner listing
    /// - an empty `city` is treated as absent
    /// - the price range applies only when both bounds are given
    pub fn plan(options: &SearchOptions, limit: Limit) -> Self {
        if let Some(owner_id) = options.owner_id {
            return Self::Owner { owner_id, limit };
        }

        let mut predicates = Vec::new();

        if let Some(city) = options.city.as_deref().filter(|c| !c.is_empty()) {
            predicates.push(Predicate::CityContains(city.to_owned()));
        }

        if let (Some(min), Some(max)) = (
            options.minimum_price_per_night,
            options.maximum_price_per_night,
        ) {
            predicates.push(Predicate::PriceBetween {
                min_cents: to_cents(min),
                max_cents: to_cents(max),
            });
        }

        Self::Filtered {
            predicates,
            min_rating: options.minimum_rating,
            limit,
        }
    }

    pub fn limit(&self) -> Limit {
        match self {
            Self::Owner { limit, .. } | Self::Filtered { limit, .. } => *limit,
        }
    }

    /// Render the plan into a query builder with all values bound.
    pub fn to_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SELECT_LISTING);

        match self {
            Self::Owner { owner_id, .. } => {
                qb.push(" LEFT JOIN property_reviews ON property_reviews.property_id = properties.id");
                qb.push(" WHERE properties.owner_id = ").push_bind(*owner_id);
                qb.push(" GROUP BY properties.id");
                qb.push(" ORDER BY properties.id");
            }
            Self::Filtered {
                predicates,
                min_rating,
                ..
            } => {
                qb.push(" JOIN property_reviews ON property_reviews.property_id = properties.id");

                for (i, predicate) in predicates.iter().enumerate() {
                    qb.push(if i == 0 { " WHERE " } else { " AND " });
                    predicate.push_onto(&mut qb);
                }

                qb.push(" GROUP BY properties.id");

                if let Some(rating) = min_rating {
                    qb.push(" HAVING avg(property_reviews.rating)::float8 >= ")
                        .push_bind(*rating);
                }

                qb.push(" ORDER BY properties.cost_per_night, properties.id");
            }
        }

        qb.push(" LIMIT ").push_bind(self.limit().as_i64());
        qb
    }
}

/// Escape `\`, `%` and `_` so they match literally under `ESCAPE '\'`
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Major units to minor units, saturating rather than wrapping
fn to_cents(major: i64) -> i64 {
    major.saturating_mul(100)
}
