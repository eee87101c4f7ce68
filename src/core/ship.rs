//! Ship records and the payload used to create or edit them

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ShipError;
use crate::core::rating;
use crate::core::validation::ValidationError;

/// Store-assigned identifier of a ship, always greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ShipId(u64);

impl ShipId {
    /// Returns `None` for zero
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for ShipId {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        ShipId::new(value).ok_or_else(|| "ship id must be greater than zero".to_string())
    }
}

impl From<ShipId> for u64 {
    fn from(id: ShipId) -> Self {
        id.0
    }
}

impl FromStr for ShipId {
    type Err = ShipError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ShipError::InvalidId {
            raw: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("identifier is empty"));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("identifier is not a positive integer"));
        }

        let value = raw
            .parse::<u64>()
            .map_err(|_| invalid("identifier is out of range"))?;

        ShipId::new(value).ok_or_else(|| invalid("identifier must be greater than zero"))
    }
}

/// Closed set of ship categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    #[serde(rename = "TRANSPORT", alias = "Transport")]
    Transport,
    #[serde(rename = "MILITARY", alias = "Military")]
    Military,
    #[serde(rename = "MERCHANT", alias = "Merchant")]
    Merchant,
}

impl ShipType {
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    pub fn as_str(self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipType {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ShipError::InvalidQuery(format!("unknown ship type '{}'", s)))
    }
}

/// A stored ship
///
/// `rating` is derived from `speed`, `is_used` and the production year and is
/// never taken from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    /// Assigned by the store on first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShipId>,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl Ship {
    pub fn production_year(&self) -> i32 {
        self.prod_date.year()
    }

    /// Recompute `rating` from the current speed, used flag and production year
    pub fn refresh_rating(&mut self) {
        self.rating = rating::rating(self.speed, self.is_used, self.production_year());
    }

    /// Overwrite every field present in `patch`, leaving the others untouched
    ///
    /// The rating is recomputed unconditionally.
    pub fn apply(&mut self, patch: ShipPayload) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(planet) = patch.planet {
            self.planet = planet;
        }
        if let Some(ship_type) = patch.ship_type {
            self.ship_type = ship_type;
        }
        if let Some(prod_date) = patch.prod_date {
            self.prod_date = prod_date;
        }
        if let Some(speed) = patch.speed {
            self.speed = rating::round2(speed);
        }
        if let Some(is_used) = patch.is_used {
            self.is_used = is_used;
        }
        if let Some(crew_size) = patch.crew_size {
            self.crew_size = crew_size;
        }
        self.refresh_rating();
    }
}

/// Client-supplied ship fields, every one optional
///
/// Creation requires name, planet, shipType, prodDate, speed and crewSize;
/// an edit may carry any subset. A `rating` sent by the client is accepted
/// and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub planet: Option<String>,
    #[serde(default)]
    pub ship_type: Option<ShipType>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_used: Option<bool>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub crew_size: Option<i32>,
    #[serde(default, skip_serializing)]
    pub rating: Option<f64>,
}

impl ShipPayload {
    /// Build an unsaved ship, defaulting `is_used` to false and computing the rating
    pub fn into_ship(self) -> Result<Ship, ValidationError> {
        fn present<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
            value.ok_or(ValidationError::MissingField { field })
        }

        let mut ship = Ship {
            id: None,
            name: present("name", self.name)?,
            planet: present("planet", self.planet)?,
            ship_type: present("shipType", self.ship_type)?,
            prod_date: present("prodDate", self.prod_date)?,
            is_used: self.is_used.unwrap_or(false),
            speed: rating::round2(present("speed", self.speed)?),
            crew_size: present("crewSize", self.crew_size)?,
            rating: 0.0,
        };
        ship.refresh_rating();
        Ok(ship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn year_start(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    fn eagle_payload() -> ShipPayload {
        ShipPayload {
            name: Some("Eagle".to_string()),
            planet: Some("Mars".to_string()),
            ship_type: Some(ShipType::Military),
            prod_date: Some(year_start(3000)),
            is_used: None,
            speed: Some(0.5),
            crew_size: Some(100),
            rating: None,
        }
    }

    #[test]
    fn test_ship_id_parses_positive_integers() {
        assert_eq!("42".parse::<ShipId>().unwrap().get(), 42);
    }

    #[test]
    fn test_ship_id_rejects_malformed_input() {
        for raw in ["", "0", "000", "abc", "-5", "1.5", " 7", "+3"] {
            let err = raw.parse::<ShipId>().unwrap_err();
            assert!(
                matches!(err, ShipError::InvalidId { .. }),
                "expected InvalidId for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_ship_id_rejects_overflow() {
        assert!("99999999999999999999999".parse::<ShipId>().is_err());
    }

    #[test]
    fn test_ship_type_parse_is_case_insensitive() {
        assert_eq!("military".parse::<ShipType>().unwrap(), ShipType::Military);
        assert_eq!("MERCHANT".parse::<ShipType>().unwrap(), ShipType::Merchant);
        assert!("freighter".parse::<ShipType>().is_err());
    }

    #[test]
    fn test_ship_type_accepts_title_case_alias() {
        let parsed: ShipType = serde_json::from_value(json!("Transport")).unwrap();
        assert_eq!(parsed, ShipType::Transport);
        assert_eq!(serde_json::to_value(parsed).unwrap(), json!("TRANSPORT"));
    }

    #[test]
    fn test_into_ship_defaults_used_flag_and_computes_rating() {
        let ship = eagle_payload().into_ship().unwrap();
        assert!(!ship.is_used);
        assert_eq!(ship.id, None);
        assert_eq!(ship.rating, 2.0);
    }

    #[test]
    fn test_into_ship_reports_missing_field() {
        let payload = ShipPayload {
            crew_size: None,
            ..eagle_payload()
        };
        assert_eq!(
            payload.into_ship().unwrap_err(),
            ValidationError::MissingField { field: "crewSize" }
        );
    }

    #[test]
    fn test_into_ship_rounds_speed() {
        let payload = ShipPayload {
            speed: Some(0.456),
            ..eagle_payload()
        };
        assert_eq!(payload.into_ship().unwrap().speed, 0.46);
    }

    #[test]
    fn test_apply_overwrites_only_present_fields() {
        let mut ship = eagle_payload().into_ship().unwrap();
        ship.apply(ShipPayload {
            planet: Some("Venus".to_string()),
            is_used: Some(true),
            ..Default::default()
        });

        assert_eq!(ship.name, "Eagle");
        assert_eq!(ship.planet, "Venus");
        assert!(ship.is_used);
        assert_eq!(ship.rating, 1.0);
    }

    #[test]
    fn test_payload_deserializes_wire_names() {
        let payload: ShipPayload = serde_json::from_value(json!({
            "name": "Eagle",
            "shipType": "MILITARY",
            "prodDate": year_start(3000).timestamp_millis(),
            "isUsed": true,
            "crewSize": 12,
            "rating": 99.0
        }))
        .unwrap();

        assert_eq!(payload.name.as_deref(), Some("Eagle"));
        assert_eq!(payload.planet, None);
        assert_eq!(payload.prod_date, Some(year_start(3000)));
        assert_eq!(payload.is_used, Some(true));
        assert_eq!(payload.crew_size, Some(12));
    }

    #[test]
    fn test_ship_serializes_prod_date_as_millis() {
        let mut ship = eagle_payload().into_ship().unwrap();
        ship.id = ShipId::new(3);

        let value = serde_json::to_value(&ship).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["prodDate"], year_start(3000).timestamp_millis());
        assert_eq!(value["shipType"], "MILITARY");
        assert_eq!(value["isUsed"], false);
        assert_eq!(value["crewSize"], 100);
    }
}
