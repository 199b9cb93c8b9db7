use serde::{Deserialize, Serialize};

// ============================================================================
// Airport lookup models (Sky Scrapper searchAirport shape)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    /// IATA-style code used as the upstream sky id
    pub sky_id: String,
    pub entity_id: String,
    pub presentation: AirportPresentation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportPresentation {
    pub suggestion_title: String,
    pub subtitle: String,
}

impl Airport {
    pub fn new(sky_id: &str, entity_id: &str, title: &str, subtitle: &str) -> Self {
        Self {
            sky_id: sky_id.to_string(),
            entity_id: entity_id.to_string(),
            presentation: AirportPresentation {
                suggestion_title: title.to_string(),
                subtitle: subtitle.to_string(),
            },
        }
    }

    /// Case-insensitive substring match on title, subtitle or sky id
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.presentation.suggestion_title.to_lowercase().contains(&needle)
            || self.presentation.subtitle.to_lowercase().contains(&needle)
            || self.sky_id.to_lowercase().contains(&needle)
    }

    /// City part of "Heathrow Airport, London"
    pub fn city(&self) -> &str {
        self.presentation
            .suggestion_title
            .rsplit_once(", ")
            .map(|(_, city)| city)
            .unwrap_or(&self.presentation.suggestion_title)
    }

    /// Country part of "LHR · United Kingdom"
    pub fn country(&self) -> &str {
        self.presentation
            .subtitle
            .split_once(" · ")
            .map(|(_, country)| country)
            .unwrap_or("")
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AirportSearchResponse {
    pub status: bool,
    pub data: Vec<Airport>,
}
