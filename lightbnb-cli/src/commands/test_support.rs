//! In-memory `Store` double for command tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use lightbnb_db::{
    DbError, DbResult, GuestReservation, Limit, NewProperty, NewUser, Property, PropertyListing,
    SearchOptions, Store, User,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    properties: Vec<Property>,
    reservations: Vec<GuestReservation>,
    last_search: Option<(SearchOptions, Limit)>,
    last_limit: Option<Limit>,
}

/// Owner filtering and limits only; no price, city or rating logic.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

pub fn sample_new_property(owner_id: i32) -> NewProperty {
    NewProperty {
        owner_id,
        title: "Tidal shed".into(),
        description: None,
        thumbnail_photo_url: "https://images.example.com/99/thumb.jpeg".into(),
        cover_photo_url: "https://images.example.com/99/cover.jpeg".into(),
        cost_per_night: 12_345,
        street: "12 Harbour Way".into(),
        city: "Tofino".into(),
        province: "British Columbia".into(),
        post_code: "V0R 2Z0".into(),
        country: "Canada".into(),
        parking_spaces: 2,
        number_of_bathrooms: 1,
        number_of_bedrooms: 3,
    }
}

fn to_property(id: i32, p: &NewProperty) -> Property {
    Property {
        id,
        owner_id: p.owner_id,
        title: p.title.clone(),
        description: p.description.clone(),
        thumbnail_photo_url: p.thumbnail_photo_url.clone(),
        cover_photo_url: p.cover_photo_url.clone(),
        cost_per_night: p.cost_per_night,
        street: p.street.clone(),
        city: p.city.clone(),
        province: p.province.clone(),
        post_code: p.post_code.clone(),
        country: p.country.clone(),
        parking_spaces: p.parking_spaces,
        number_of_bathrooms: p.number_of_bathrooms,
        number_of_bedrooms: p.number_of_bedrooms,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

impl MemoryStore {
    /// Three users; owner 1 has two properties; guest 3 has two stays.
    pub fn seeded() -> Self {
        let users = ["Devin Sanders", "Iva Harrison", "Eliza Wood"]
            .iter()
            .zip(["devin@example.com", "iva@example.com", "eliza@example.com"])
            .enumerate()
            .map(|(i, (name, email))| User {
                id: i as i32 + 1,
                name: (*name).to_owned(),
                email: email.to_owned(),
                password: "$2a$10$hash".to_owned(),
            })
            .collect();

        let mut speed_lamp = to_property(1, &sample_new_property(1));
        speed_lamp.title = "Speed lamp".into();
        let mut habit_mix = to_property(2, &sample_new_property(1));
        habit_mix.title = "Habit mix".into();

        let reservations = vec![
            GuestReservation {
                reservation_id: 2,
                guest_id: 3,
                start_date: date(2018, 9, 11),
                end_date: date(2018, 9, 26),
                property: speed_lamp.clone(),
            },
            GuestReservation {
                reservation_id: 1,
                guest_id: 3,
                start_date: date(2019, 1, 4),
                end_date: date(2019, 2, 1),
                property: habit_mix.clone(),
            },
        ];

        Self {
            state: Mutex::new(State {
                users,
                properties: vec![speed_lamp, habit_mix],
                reservations,
                ..State::default()
            }),
        }
    }

    pub fn users(&self) -> Vec<User> {
        self.state.lock().unwrap().users.clone()
    }

    pub fn last_search(&self) -> Option<(SearchOptions, Limit)> {
        self.state.lock().unwrap().last_search.clone()
    }

    pub fn last_limit(&self) -> Option<Limit> {
        self.state.lock().unwrap().last_limit
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn user_with_email(&self, email: &str) -> DbResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn user_with_id(&self, id: i32) -> DbResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn add_user(&self, user: &NewUser) -> DbResult<User> {
        user.validate()?;
        let mut state = self.state.lock().unwrap();

        if state
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(user.email.as_str()))
        {
            return Err(DbError::ConstraintViolation {
                constraint: Some("users_email_lower_key".into()),
                message: "duplicate key value violates unique constraint".into(),
            });
        }

        let created = User {
            id: state.users.len() as i32 + 1,
            name: user.name.clone(),
            email: user.email.to_string(),
            password: user.password.clone(),
        };
        state.users.push(created.clone());
        Ok(created)
    }

    async fn reservations_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> DbResult<Vec<GuestReservation>> {
        let mut state = self.state.lock().unwrap();
        state.last_limit = Some(limit);
        Ok(state
            .reservations
            .iter()
            .filter(|r| r.guest_id == guest_id)
            .take(limit.get() as usize)
            .cloned()
            .collect())
    }

    async fn search_properties(
        &self,
        options: &SearchOptions,
        limit: Limit,
    ) -> DbResult<Vec<PropertyListing>> {
        let mut state = self.state.lock().unwrap();
        state.last_search = Some((options.clone(), limit));
        Ok(state
            .properties
            .iter()
            .filter(|p| options.owner_id.map_or(true, |owner| p.owner_id == owner))
            .take(limit.get() as usize)
            .map(|p| PropertyListing {
                property: p.clone(),
                average_rating: None,
            })
            .collect())
    }

    async fn add_property(&self, property: &NewProperty) -> DbResult<Vec<Property>> {
        property.validate()?;
        let mut state = self.state.lock().unwrap();
        let created = to_property(state.properties.len() as i32 + 1, property);
        state.properties.push(created.clone());
        Ok(vec![created])
    }
}
