//! Filter criteria and the predicate they compile to
//!
//! A [`ShipFilter`] holds every optional filter input. It compiles into a
//! [`Predicate`], the AND of one [`Condition`] per supplied input, which the
//! store evaluates before sorting and paging.
//!
//! Range bounds are exclusive on both sides: `minSpeed=0.5` keeps ships with
//! a speed strictly greater than 0.5.
//!
//! # Example
//!
//! ```rust,ignore
//! // GET /rest/ships?planet=Mars&minSpeed=0.5&maxCrewSize=100
//! let predicate = PredicateBuilder::new()
//!     .with(Condition::PlanetContains("Mars".into()))
//!     .with(Condition::SpeedAbove(0.5))
//!     .with(Condition::CrewSizeBelow(100))
//!     .build();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::core::error::ShipError;
use crate::core::ship::{Ship, ShipType};

/// Optional filter inputs, named as on the query string
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipFilter {
    /// Case-sensitive substring of the name
    pub name: Option<String>,
    /// Case-sensitive substring of the planet
    pub planet: Option<String>,
    /// Case-insensitive
    #[serde(default, deserialize_with = "ship_type_from_str")]
    pub ship_type: Option<ShipType>,
    /// Produced strictly after this epoch-millisecond timestamp
    pub after: Option<i64>,
    /// Produced strictly before this epoch-millisecond timestamp
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Compile the supplied inputs into a single predicate
    ///
    /// Fails only when `after` or `before` is not a representable timestamp.
    pub fn to_predicate(&self) -> Result<Predicate, ShipError> {
        let after = self.after.map(|ms| timestamp("after", ms)).transpose()?;
        let before = self.before.map(|ms| timestamp("before", ms)).transpose()?;

        Ok(PredicateBuilder::new()
            .with_opt(self.name.clone(), Condition::NameContains)
            .with_opt(self.planet.clone(), Condition::PlanetContains)
            .with_opt(self.ship_type, Condition::ShipTypeIs)
            .with_opt(self.is_used, Condition::UsedIs)
            .with_opt(self.min_speed, Condition::SpeedAbove)
            .with_opt(self.max_speed, Condition::SpeedBelow)
            .with_opt(self.min_crew_size, Condition::CrewSizeAbove)
            .with_opt(self.max_crew_size, Condition::CrewSizeBelow)
            .with_opt(self.min_rating, Condition::RatingAbove)
            .with_opt(self.max_rating, Condition::RatingBelow)
            .with_opt(after, Condition::ProducedAfter)
            .with_opt(before, Condition::ProducedBefore)
            .build())
    }
}

fn ship_type_from_str<'de, D>(deserializer: D) -> Result<Option<ShipType>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| raw.parse().map_err(serde::de::Error::custom))
        .transpose()
}

fn timestamp(field: &str, millis: i64) -> Result<DateTime<Utc>, ShipError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        ShipError::InvalidQuery(format!("'{}' is not a valid timestamp: {}", field, millis))
    })
}

/// One typed predicate fragment
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    NameContains(String),
    PlanetContains(String),
    ShipTypeIs(ShipType),
    UsedIs(bool),
    SpeedAbove(f64),
    SpeedBelow(f64),
    CrewSizeAbove(i32),
    CrewSizeBelow(i32),
    RatingAbove(f64),
    RatingBelow(f64),
    ProducedAfter(DateTime<Utc>),
    ProducedBefore(DateTime<Utc>),
}

impl Condition {
    pub fn matches(&self, ship: &Ship) -> bool {
        match self {
            Condition::NameContains(needle) => ship.name.contains(needle.as_str()),
            Condition::PlanetContains(needle) => ship.planet.contains(needle.as_str()),
            Condition::ShipTypeIs(ship_type) => ship.ship_type == *ship_type,
            Condition::UsedIs(is_used) => ship.is_used == *is_used,
            Condition::SpeedAbove(bound) => ship.speed > *bound,
            Condition::SpeedBelow(bound) => ship.speed < *bound,
            Condition::CrewSizeAbove(bound) => ship.crew_size > *bound,
            Condition::CrewSizeBelow(bound) => ship.crew_size < *bound,
            Condition::RatingAbove(bound) => ship.rating > *bound,
            Condition::RatingBelow(bound) => ship.rating < *bound,
            Condition::ProducedAfter(bound) => ship.prod_date > *bound,
            Condition::ProducedBefore(bound) => ship.prod_date < *bound,
        }
    }

    /// Wire name of the field this fragment constrains
    pub fn field(&self) -> &'static str {
        match self {
            Condition::NameContains(_) => "name",
            Condition::PlanetContains(_) => "planet",
            Condition::ShipTypeIs(_) => "shipType",
            Condition::UsedIs(_) => "isUsed",
            Condition::SpeedAbove(_) | Condition::SpeedBelow(_) => "speed",
            Condition::CrewSizeAbove(_) | Condition::CrewSizeBelow(_) => "crewSize",
            Condition::RatingAbove(_) | Condition::RatingBelow(_) => "rating",
            Condition::ProducedAfter(_) | Condition::ProducedBefore(_) => "prodDate",
        }
    }
}

/// Conjunction of conditions; the empty predicate matches every ship
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// Predicate without constraints
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, ship: &Ship) -> bool {
        self.conditions.iter().all(|c| c.matches(ship))
    }

    /// Fragments for stores that translate the predicate into their own query language
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }
}

/// Accumulates conditions into a [`Predicate`]
#[derive(Debug, Default)]
pub struct PredicateBuilder {
    conditions: Vec<Condition>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add a condition only when `value` is present
    pub fn with_opt<T>(self, value: Option<T>, make: impl FnOnce(T) -> Condition) -> Self {
        match value {
            Some(value) => self.with(make(value)),
            None => self,
        }
    }

    pub fn build(self) -> Predicate {
        Predicate {
            conditions: self.conditions,
        }
    }
}
