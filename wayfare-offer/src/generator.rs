use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use wayfare_core::flight::{Aircraft, Carrier, Carriers, SegmentPlace};
use wayfare_core::{Airport, AirportQuery, FlightOffer, Leg, Place, Price, SearchParams, Segment, SyntheticStrategy};

/// Static airport directory served when every lookup endpoint is down
pub struct MockAirportDirectory {
    airports: Vec<Airport>,
}

const AIRPORTS: [(&str, &str, &str, &str); 20] = [
    ("LOS", "95673655", "Murtala Muhammed Airport, Lagos", "LOS · Nigeria"),
    ("ABV", "95673644", "Nnamdi Azikiwe International Airport, Abuja", "ABV · Nigeria"),
    ("PHC", "95673649", "Port Harcourt International Airport, Port Harcourt", "PHC · Nigeria"),
    ("KAN", "95673650", "Mallam Aminu Kano International Airport, Kano", "KAN · Nigeria"),
    ("IBA", "95673651", "Ibadan Airport, Ibadan", "IBA · Nigeria"),
    ("ENU", "95673652", "Akanu Ibiam International Airport, Enugu", "ENU · Nigeria"),
    ("BEN", "95673653", "Benin Airport, Benin City", "BEN · Nigeria"),
    ("CBQ", "95673654", "Margaret Ekpo International Airport, Calabar", "CBQ · Nigeria"),
    ("LHR", "27544008", "Heathrow Airport, London", "LHR · United Kingdom"),
    ("JFK", "27537542", "John F. Kennedy International Airport, New York", "JFK · United States"),
    ("DXB", "95565050", "Dubai International Airport, Dubai", "DXB · United Arab Emirates"),
    ("CDG", "95565062", "Charles de Gaulle Airport, Paris", "CDG · France"),
    ("FRA", "95565073", "Frankfurt Airport, Frankfurt", "FRA · Germany"),
    ("AMS", "95565041", "Amsterdam Airport Schiphol, Amsterdam", "AMS · Netherlands"),
    ("IST", "95565101", "Istanbul Airport, Istanbul", "IST · Turkey"),
    ("DOH", "95565065", "Hamad International Airport, Doha", "DOH · Qatar"),
    ("JNB", "95565104", "O. R. Tambo International Airport, Johannesburg", "JNB · South Africa"),
    ("CAI", "95565057", "Cairo International Airport, Cairo", "CAI · Egypt"),
    ("ADD", "95565040", "Addis Ababa Bole International Airport, Addis Ababa", "ADD · Ethiopia"),
    ("ACC", "95565039", "Kotoka International Airport, Accra", "ACC · Ghana"),
];

impl MockAirportDirectory {
    pub fn new() -> Self {
        Self {
            airports: AIRPORTS
                .iter()
                .map(|(sky, entity, title, subtitle)| Airport::new(sky, entity, title, subtitle))
                .collect(),
        }
    }

    /// Case-insensitive match on title, subtitle or sky id, in table order
    pub fn search(&self, query: &str) -> Vec<Airport> {
        self.airports.iter().filter(|a| a.matches(query)).cloned().collect()
    }

    pub fn find(&self, sky_id: &str) -> Option<&Airport> {
        self.airports.iter().find(|a| a.sky_id.eq_ignore_ascii_case(sky_id))
    }
}

impl Default for MockAirportDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticStrategy<AirportQuery> for MockAirportDirectory {
    fn synthesize(&self, query: &AirportQuery) -> Value {
        json!({ "status": true, "data": self.search(&query.query) })
    }
}

struct Airline {
    name: &'static str,
    iata: &'static str,
    aircraft: &'static [&'static str],
}

const AIRLINES: [Airline; 5] = [
    Airline { name: "Air Peace", iata: "P4", aircraft: &["Airbus A320", "Boeing 737"] },
    Airline { name: "Arik Air", iata: "W3", aircraft: &["Airbus A320", "Boeing 737"] },
    Airline { name: "Azman Air", iata: "ZQ", aircraft: &["Boeing 737"] },
    Airline { name: "Max Air", iata: "VM", aircraft: &["Boeing 737"] },
    Airline { name: "Dana Air", iata: "9J", aircraft: &["Boeing 737"] },
];

/// Daily departure slots: (departure, arrival)
const SLOTS: [(&str, &str); 6] = [
    ("06:30", "07:50"),
    ("08:15", "09:35"),
    ("10:35", "11:55"),
    ("13:40", "15:00"),
    ("16:20", "17:40"),
    ("18:45", "20:05"),
];

const SLOT_MINUTES: u32 = 80;
const DAYS: i64 = 3;
const FIRST_FLIGHT_NUMBER: usize = 7120;
const NAIRA_PER_UNIT: f64 = 1600.0;
const PRICE_SPREAD: f64 = 25_000.0;
const CARRIER_ID: i64 = -31079;

fn fallback_departure() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 10).unwrap_or_default()
}

/// Base fare in naira for a route
pub fn base_fare(origin: &str, destination: &str) -> i64 {
    match (origin, destination) {
        ("LOS", "ABV") | ("ABV", "LOS") => 234_750,
        ("LOS", "PHC") | ("PHC", "LOS") => 180_000,
        _ => 350_000,
    }
}

/// `₦234,750`
pub fn format_naira(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-₦{}", grouped)
    } else {
        format!("₦{}", grouped)
    }
}

// FNV-1a over route and date
fn route_seed(origin: &str, destination: &str, date: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in [origin, "|", destination, "|", date].iter().flat_map(|part| part.bytes()) {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    hash
}

/// Procedural flight offers served when every search endpoint is down.
///
/// Produces three days of six nonstop departures starting on the requested
/// date. Prices vary around a per-route base fare but are seeded from the
/// route and date, so repeating a search repeats the answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockFlightGenerator;

impl MockFlightGenerator {
    pub fn generate(&self, origin: &str, destination: &str, departure_date: &str) -> Vec<FlightOffer> {
        let start = NaiveDate::parse_from_str(departure_date, "%Y-%m-%d").unwrap_or_else(|_| {
            tracing::debug!("Unparseable departure date {:?}, using default", departure_date);
            fallback_departure()
        });
        let directory = MockAirportDirectory::new();
        let from = place(&directory, origin);
        let to = place(&directory, destination);
        let base = base_fare(origin, destination) as f64;
        let mut rng = StdRng::seed_from_u64(route_seed(origin, destination, departure_date));

        let mut offers = Vec::with_capacity(SLOTS.len() * DAYS as usize);
        for day in 0..DAYS {
            let date = (start + Duration::days(day)).format("%Y-%m-%d").to_string();
            for (slot, (dep, arr)) in SLOTS.iter().enumerate() {
                let index = offers.len();
                let airline = &AIRLINES[slot % AIRLINES.len()];
                let naira = (base + rng.gen_range(-PRICE_SPREAD..PRICE_SPREAD)).round() as i64;
                let aircraft = airline.aircraft[rng.gen_range(0..airline.aircraft.len())];
                let departure = format!("{}T{}:00.000Z", date, dep);
                let arrival = format!("{}T{}:00.000Z", date, arr);

                offers.push(FlightOffer {
                    id: format!("flight-{}", index + 1),
                    price: Price { raw: naira as f64 / NAIRA_PER_UNIT, formatted: format_naira(naira) },
                    legs: vec![Leg {
                        id: format!("leg-{}", index + 1),
                        origin: from.clone(),
                        destination: to.clone(),
                        departure: departure.clone(),
                        arrival: arrival.clone(),
                        duration_in_minutes: SLOT_MINUTES,
                        stop_count: 0,
                        time_delta_in_days: 0,
                        carriers: Some(Carriers {
                            marketing: vec![Carrier {
                                id: Some(CARRIER_ID),
                                name: airline.name.to_string(),
                                alternate_id: Some(airline.iata.to_string()),
                                iata: None,
                                logo_url: Some(format!(
                                    "https://logos.skyscnr.com/images/airlines/favicon/{}.png",
                                    airline.iata
                                )),
                                alliance_id: Some(0),
                            }],
                            operation_type: "fully_operated".to_string(),
                        }),
                        segments: vec![Segment {
                            id: format!("segment-{}", index + 1),
                            origin: SegmentPlace { iata: Some(origin.to_string()), ..Default::default() },
                            destination: SegmentPlace { iata: Some(destination.to_string()), ..Default::default() },
                            departure,
                            arrival,
                            duration_in_minutes: None,
                            flight_number: (FIRST_FLIGHT_NUMBER + index).to_string(),
                            marketing_carrier: Carrier {
                                name: airline.name.to_string(),
                                iata: Some(airline.iata.to_string()),
                                ..Default::default()
                            },
                            aircraft: Some(Aircraft { name: aircraft.to_string() }),
                        }],
                    }],
                    score: 0.0,
                });
            }
        }
        offers
    }
}

fn place(directory: &MockAirportDirectory, code: &str) -> Place {
    match directory.find(code) {
        Some(airport) => Place {
            id: code.to_string(),
            entity_id: airport.entity_id.clone(),
            name: airport.city().to_string(),
            display_code: code.to_string(),
            city: airport.city().to_string(),
            country: airport.country().to_string(),
            is_highlighted: false,
        },
        None => Place {
            id: code.to_string(),
            name: code.to_string(),
            display_code: code.to_string(),
            city: code.to_string(),
            ..Default::default()
        },
    }
}

impl SyntheticStrategy<SearchParams> for MockFlightGenerator {
    fn synthesize(&self, params: &SearchParams) -> Value {
        let offers = self.generate(&params.origin, &params.destination, &params.departure_date);
        json!({ "status": true, "data": { "itineraries": offers } })
    }
}
