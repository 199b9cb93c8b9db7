use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};
use wayfare_core::{AirportQuery, SearchParams, SupplierError, UpstreamStrategy};

use crate::app_config::UpstreamConfig;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Airport lookup variants, tried in this order
pub const AIRPORT_PATHS: [&str; 3] = [
    "/api/v1/flights/searchAirport",
    "/api/v2/flights/searchAirport",
    "/api/v1/flights/auto-complete",
];

/// Flight search variants, tried in this order
pub const FLIGHT_PATHS: [&str; 3] = [
    "/api/v1/flights/searchFlights",
    "/api/v2/flights/searchFlights",
    "/api/v2/flights/searchFlightsComplete",
];

/// HTTP client for the Sky Scrapper RapidAPI
pub struct SkyScrapperClient {
    http: Client,
    base_url: String,
    host: String,
    api_key: String,
}

impl SkyScrapperClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        if config.api_key.is_none() {
            tracing::warn!("No RapidAPI key configured; upstream calls will likely fail over to mock data");
        }

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            host: config.host.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    /// One strategy per airport endpoint variant
    pub fn airport_endpoints(self: &Arc<Self>) -> Vec<Arc<dyn UpstreamStrategy<AirportQuery>>> {
        AIRPORT_PATHS
            .into_iter()
            .map(|path| {
                Arc::new(AirportEndpoint { client: self.clone(), path }) as Arc<dyn UpstreamStrategy<AirportQuery>>
            })
            .collect()
    }

    /// One strategy per flight endpoint variant
    pub fn flight_endpoints(self: &Arc<Self>) -> Vec<Arc<dyn UpstreamStrategy<SearchParams>>> {
        FLIGHT_PATHS
            .into_iter()
            .map(|path| {
                Arc::new(FlightEndpoint { client: self.clone(), path }) as Arc<dyn UpstreamStrategy<SearchParams>>
            })
            .collect()
    }

    /// GET a JSON body. 2xx and 304 count as answers; a 304 without a parseable
    /// body is reported separately so the caller can move on.
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, SupplierError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Trying endpoint: {}", path);

        let res = self
            .http
            .get(&url)
            .query(query)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.host)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SupplierError::Transport(e.to_string()))?;

        let status = res.status();
        debug!("Response status: {} for endpoint: {}", status, path);
        if !(status.is_success() || status == StatusCode::NOT_MODIFIED) {
            return Err(SupplierError::Status(status.as_u16()));
        }

        let bytes = res
            .bytes()
            .await
            .map_err(|e| SupplierError::Transport(e.to_string()))?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(body) => {
                info!("Upstream {} answered with status {}", path, status);
                Ok(body)
            }
            Err(_) if status == StatusCode::NOT_MODIFIED => Err(SupplierError::EmptyNotModified),
            Err(e) => Err(SupplierError::Decode(e.to_string())),
        }
    }
}

/// Query string for a flight search
pub fn flight_query(params: &SearchParams) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("originSkyId", params.origin.clone()),
        ("destinationSkyId", params.destination.clone()),
        ("originEntityId", params.origin_entity_id.clone()),
        ("destinationEntityId", params.destination_entity_id.clone()),
        ("date", params.departure_date.clone()),
        ("adults", params.passengers.to_string()),
        ("cabinClass", params.travel_class.as_str().to_string()),
        ("currency", "USD".to_string()),
        ("market", "US".to_string()),
        ("locale", "en-US".to_string()),
    ];
    if let Some(return_date) = params.return_leg_date() {
        query.push(("returnDate", return_date.to_string()));
    }
    query
}

pub struct AirportEndpoint {
    client: Arc<SkyScrapperClient>,
    path: &'static str,
}

#[async_trait]
impl UpstreamStrategy<AirportQuery> for AirportEndpoint {
    fn name(&self) -> &str {
        self.path
    }

    async fn fetch(&self, query: &AirportQuery) -> Result<Value, SupplierError> {
        self.client
            .get_json(self.path, &[("query", query.query.clone())])
            .await
    }
}

pub struct FlightEndpoint {
    client: Arc<SkyScrapperClient>,
    path: &'static str,
}

#[async_trait]
impl UpstreamStrategy<SearchParams> for FlightEndpoint {
    fn name(&self) -> &str {
        self.path
    }

    async fn fetch(&self, params: &SearchParams) -> Result<Value, SupplierError> {
        self.client.get_json(self.path, &flight_query(params)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use axum::{extract::Query, http::{HeaderMap, StatusCode as AxumStatus}, routing::get, Json, Router};
    use wayfare_core::{TravelClass, TripType};

    fn params(trip_type: TripType) -> SearchParams {
        SearchParams {
            origin: "LOS".to_string(),
            destination: "ABV".to_string(),
            origin_entity_id: "95673655".to_string(),
            destination_entity_id: "95673644".to_string(),
            departure_date: "2025-07-10".to_string(),
            return_date: Some("2025-07-20".to_string()),
            passengers: 3,
            travel_class: TravelClass::PremiumEconomy,
            trip_type,
        }
    }

    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route("/api/v1/flights/searchAirport", get(|| async { AxumStatus::INTERNAL_SERVER_ERROR }))
            .route("/api/v2/flights/searchAirport", get(|| async { AxumStatus::NOT_MODIFIED }))
            .route("/api/v1/flights/auto-complete", get(|| async { (AxumStatus::OK, "not json") }))
            .route(
                "/api/v1/flights/searchFlights",
                get(|headers: HeaderMap, Query(q): Query<HashMap<String, String>>| async move {
                    Json(serde_json::json!({
                        "status": true,
                        "key": headers.get("x-rapidapi-key").and_then(|v| v.to_str().ok()),
                        "host": headers.get("x-rapidapi-host").and_then(|v| v.to_str().ok()),
                        "query": q,
                    }))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: String) -> Arc<SkyScrapperClient> {
        let config = UpstreamConfig {
            base_url,
            api_key: Some("test-key".to_string()),
            timeout_ms: 2_000,
            ..UpstreamConfig::default()
        };
        Arc::new(SkyScrapperClient::new(&config).unwrap())
    }

    #[test]
    fn test_flight_query_round_trip_adds_return_date() {
        let query: HashMap<_, _> = flight_query(&params(TripType::RoundTrip)).into_iter().collect();
        assert_eq!(query["originSkyId"], "LOS");
        assert_eq!(query["adults"], "3");
        assert_eq!(query["cabinClass"], "premium_economy");
        assert_eq!(query["currency"], "USD");
        assert_eq!(query["returnDate"], "2025-07-20");

        let one_way: HashMap<_, _> = flight_query(&params(TripType::OneWay)).into_iter().collect();
        assert!(!one_way.contains_key("returnDate"));
    }

    #[tokio::test]
    async fn test_airport_endpoint_failures_are_classified() {
        let client = client(spawn_upstream().await);
        let endpoints = client.airport_endpoints();
        let query = AirportQuery::parse("Lagos").unwrap();

        assert!(matches!(endpoints[0].fetch(&query).await, Err(SupplierError::Status(500))));
        assert!(matches!(endpoints[1].fetch(&query).await, Err(SupplierError::EmptyNotModified)));
        assert!(matches!(endpoints[2].fetch(&query).await, Err(SupplierError::Decode(_))));
    }

    #[tokio::test]
    async fn test_flight_endpoint_sends_auth_and_query() {
        let client = client(spawn_upstream().await);
        let endpoints = client.flight_endpoints();
        assert_eq!(endpoints[0].name(), "/api/v1/flights/searchFlights");

        let body = endpoints[0].fetch(&params(TripType::RoundTrip)).await.unwrap();
        assert_eq!(body["key"], "test-key");
        assert_eq!(body["host"], "sky-scrapper.p.rapidapi.com");
        assert_eq!(body["query"]["destinationEntityId"], "95673644");
        assert_eq!(body["query"]["returnDate"], "2025-07-20");

        // Unrouted variant answers 404
        assert!(matches!(
            endpoints[1].fetch(&params(TripType::OneWay)).await,
            Err(SupplierError::Status(404))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_transport_error() {
        let client = client("http://127.0.0.1:1".to_string());
        let endpoints = client.flight_endpoints();
        assert!(matches!(
            endpoints[0].fetch(&params(TripType::OneWay)).await,
            Err(SupplierError::Transport(_))
        ));
    }
}
