use serde::{Deserialize, Serialize};
use crate::{CoreError, CoreResult};

pub const MIN_AIRPORT_QUERY_LEN: usize = 2;
pub const MAX_PASSENGERS: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    #[default]
    RoundTrip,
    OneWay,
    MultiCity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    /// Cabin class name as the upstream API expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Economy => "economy",
            TravelClass::PremiumEconomy => "premium_economy",
            TravelClass::Business => "business",
            TravelClass::First => "first",
        }
    }
}

fn default_passengers() -> u8 { 1 }

/// Trip parameters submitted by the search form.
///
/// Built once per submission and never mutated afterwards, so it doubles as a
/// cache key for identical searches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Upstream sky id of the origin (usually the IATA code)
    pub origin: String,
    pub destination: String,
    pub origin_entity_id: String,
    pub destination_entity_id: String,
    pub departure_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default = "default_passengers")]
    pub passengers: u8,
    #[serde(default)]
    pub travel_class: TravelClass,
    #[serde(default)]
    pub trip_type: TripType,
}

impl SearchParams {
    pub fn validate(&self) -> CoreResult<()> {
        require_min_len("origin", &self.origin, 2, "Origin is required")?;
        require_min_len("destination", &self.destination, 2, "Destination is required")?;
        require_min_len("departureDate", &self.departure_date, 1, "Departure date is required")?;
        require_min_len("originEntityId", &self.origin_entity_id, 3, "Origin is required")?;
        require_min_len("destinationEntityId", &self.destination_entity_id, 3, "Destination is required")?;

        if self.passengers == 0 || self.passengers > MAX_PASSENGERS {
            return Err(CoreError::ValidationError(format!(
                "passengers: must be between 1 and {}, got {}",
                MAX_PASSENGERS, self.passengers
            )));
        }

        Ok(())
    }

    /// Return date to send upstream. Only round trips with a non-empty date carry one.
    pub fn return_leg_date(&self) -> Option<&str> {
        match (&self.return_date, self.trip_type) {
            (Some(date), TripType::RoundTrip) if !date.is_empty() => Some(date.as_str()),
            _ => None,
        }
    }
}

fn require_min_len(field: &str, value: &str, min: usize, message: &str) -> CoreResult<()> {
    if value.chars().count() < min {
        return Err(CoreError::ValidationError(format!("{}: {}", field, message)));
    }
    Ok(())
}

/// Free-text airport lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirportQuery {
    pub query: String,
}

impl AirportQuery {
    pub fn parse(query: impl Into<String>) -> CoreResult<Self> {
        let query = query.into();
        require_min_len(
            "query",
            &query,
            MIN_AIRPORT_QUERY_LEN,
            "Query must be at least 2 characters",
        )?;
        Ok(Self { query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lagos_to_abuja() -> SearchParams {
        SearchParams {
            origin: "LOS".to_string(),
            destination: "ABV".to_string(),
            origin_entity_id: "95673655".to_string(),
            destination_entity_id: "95673644".to_string(),
            departure_date: "2025-07-10".to_string(),
            return_date: None,
            passengers: 1,
            travel_class: TravelClass::Economy,
            trip_type: TripType::OneWay,
        }
    }

    #[test]
    fn test_search_params_defaults() {
        let json = r#"
            {
                "origin": "LOS",
                "destination": "ABV",
                "originEntityId": "95673655",
                "destinationEntityId": "95673644",
                "departureDate": "2025-07-10"
            }
        "#;
        let params: SearchParams = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(params.passengers, 1);
        assert_eq!(params.travel_class, TravelClass::Economy);
        assert_eq!(params.trip_type, TripType::RoundTrip);
        assert!(params.return_date.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_enum_wire_names() {
        let json = r#"{"travelClass":"premium_economy","tripType":"multi_city","origin":"LOS","destination":"ABV","originEntityId":"123","destinationEntityId":"456","departureDate":"2025-07-10"}"#;
        let params: SearchParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.travel_class, TravelClass::PremiumEconomy);
        assert_eq!(params.trip_type, TripType::MultiCity);
        assert_eq!(params.travel_class.as_str(), "premium_economy");
    }

    #[test]
    fn test_validation_rejects_short_fields() {
        let mut params = lagos_to_abuja();
        params.origin = "L".to_string();
        assert!(matches!(params.validate(), Err(CoreError::ValidationError(_))));

        let mut params = lagos_to_abuja();
        params.destination_entity_id = "12".to_string();
        assert!(params.validate().is_err());

        let mut params = lagos_to_abuja();
        params.departure_date = String::new();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_passenger_bounds() {
        let mut params = lagos_to_abuja();
        params.passengers = 0;
        assert!(params.validate().is_err());
        params.passengers = 10;
        assert!(params.validate().is_err());
        params.passengers = 9;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_return_leg_only_for_round_trips() {
        let mut params = lagos_to_abuja();
        params.return_date = Some("2025-07-20".to_string());
        assert_eq!(params.return_leg_date(), None);

        params.trip_type = TripType::RoundTrip;
        assert_eq!(params.return_leg_date(), Some("2025-07-20"));

        params.return_date = Some(String::new());
        assert_eq!(params.return_leg_date(), None);
    }

    #[test]
    fn test_missing_return_date_serializes_as_null() {
        let value = serde_json::to_value(lagos_to_abuja()).unwrap();
        assert_eq!(value["returnDate"], serde_json::Value::Null);
        assert!(value.as_object().unwrap().contains_key("returnDate"));

        let back: SearchParams = serde_json::from_value(value).unwrap();
        assert_eq!(back, lagos_to_abuja());
    }

    #[test]
    fn test_airport_query_min_length() {
        assert!(AirportQuery::parse("L").is_err());
        assert!(AirportQuery::parse("").is_err());
        assert_eq!(AirportQuery::parse("La").unwrap().query, "La");
    }
}
