//! Reservation records

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::Property;

/// A guest's reservation joined to the property it books
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct GuestReservation {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    pub property: Property,
}

