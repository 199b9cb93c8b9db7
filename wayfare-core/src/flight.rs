use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A priced itinerary as returned by a search.
///
/// Offers are never mutated after they arrive, only re-ordered. Field names
/// follow the upstream wire format so payloads round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: String,
    pub price: Price,
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub raw: f64,
    #[serde(default)]
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    #[serde(default)]
    pub id: String,
    pub origin: Place,
    pub destination: Place,
    pub departure: String,
    pub arrival: String,
    pub duration_in_minutes: u32,
    #[serde(default)]
    pub stop_count: u32,
    #[serde(default)]
    pub time_delta_in_days: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carriers: Option<Carriers>,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Place {
    pub id: String,
    pub entity_id: String,
    pub name: String,
    pub display_code: String,
    pub city: String,
    pub country: String,
    pub is_highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Carriers {
    pub marketing: Vec<Carrier>,
    pub operation_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Carrier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alliance_id: Option<i64>,
}

/// One physical flight within a leg
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub origin: SegmentPlace,
    #[serde(default)]
    pub destination: SegmentPlace,
    #[serde(default)]
    pub departure: String,
    #[serde(default)]
    pub arrival: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_minutes: Option<u32>,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub marketing_carrier: Carrier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<Aircraft>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SegmentPlace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aircraft {
    pub name: String,
}

impl FlightOffer {
    /// Every offer has at least one leg and every leg at least one segment
    pub fn is_well_formed(&self) -> bool {
        !self.legs.is_empty() && self.legs.iter().all(|leg| !leg.segments.is_empty())
    }

    /// Sum of leg durations. Leg durations are authoritative, segments are not consulted.
    pub fn total_duration_minutes(&self) -> u64 {
        self.legs.iter().map(|leg| u64::from(leg.duration_in_minutes)).sum()
    }

    pub fn total_stops(&self) -> u64 {
        self.legs.iter().map(|leg| u64::from(leg.stop_count)).sum()
    }

    pub fn duration_text(&self) -> String {
        let total = self.total_duration_minutes();
        format!("{}h {}m", total / 60, total % 60)
    }

    pub fn stops_label(&self) -> String {
        match self.total_stops() {
            0 => "Nonstop".to_string(),
            1 => "1 stop".to_string(),
            n => format!("{} stops", n),
        }
    }
}

/// Lowest raw price in a result list
pub fn cheapest_price(offers: &[FlightOffer]) -> Option<f64> {
    offers.iter().map(|o| o.price.raw).min_by(|a, b| a.total_cmp(b))
}

/// Pull typed offers out of a search payload (`data.itineraries`).
///
/// Upstream bodies are loosely shaped; entries that do not decode or that break
/// the leg/segment invariant are skipped.
pub fn offers_from_payload(payload: &Value) -> Vec<FlightOffer> {
    let Some(items) = payload
        .get("data")
        .and_then(|d| d.get("itineraries"))
        .and_then(|i| i.as_array())
    else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<FlightOffer>(item.clone()) {
            Ok(offer) if offer.is_well_formed() => Some(offer),
            Ok(offer) => {
                tracing::warn!("Dropping offer {} without legs or segments", offer.id);
                None
            }
            Err(e) => {
                tracing::warn!("Skipping undecodable itinerary: {}", e);
                None
            }
        })
        .collect()
}
