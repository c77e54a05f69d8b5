//! Reservation repository

use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::DbResult;
use crate::models::{GuestReservation, Limit};

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// A guest's reservations joined to their properties, earliest stay first.
    #[instrument(skip(self, limit), fields(limit = limit.get()), err)]
    pub async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> DbResult<Vec<GuestReservation>> {
        let rows = sqlx::query_as::<_, GuestReservation>(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.start_date,
                reservations.end_date,
                properties.*
            FROM reservations
            JOIN properties ON properties.id = reservations.property_id
            WHERE reservations.guest_id = $1
            ORDER BY reservations.start_date, reservations.id
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.as_i64())
        .fetch_all(self.pool)
        .await?;

        debug!(rows = rows.len(), "reservations listed");
        Ok(rows)
    }
}
