use wayfare_core::flight::{Carrier, SegmentPlace};
use wayfare_core::{FlightOffer, Leg, Place, Price, Segment};

/// Single-leg nonstop offer with the given price and duration
pub fn offer(id: &str, raw_price: f64, minutes: u32) -> FlightOffer {
    FlightOffer {
        id: id.to_string(),
        price: Price { raw: raw_price, formatted: format!("${}", raw_price) },
        legs: vec![Leg {
            id: format!("{}-leg", id),
            origin: Place::default(),
            destination: Place::default(),
            departure: "2025-07-10T06:30:00".to_string(),
            arrival: "2025-07-10T07:50:00".to_string(),
            duration_in_minutes: minutes,
            stop_count: 0,
            time_delta_in_days: 0,
            carriers: None,
            segments: vec![Segment {
                id: format!("{}-seg", id),
                origin: SegmentPlace::default(),
                destination: SegmentPlace::default(),
                departure: String::new(),
                arrival: String::new(),
                duration_in_minutes: Some(minutes),
                flight_number: "7120".to_string(),
                marketing_carrier: Carrier::default(),
                aircraft: None,
            }],
        }],
        score: 0.0,
    }
}

/// `count` offers with varied prices and durations
pub fn offers(count: usize) -> Vec<FlightOffer> {
    (0..count)
        .map(|i| offer(&format!("o{}", i), 100.0 + (i * 37 % 11) as f64 * 10.0, 60 + (i * 53 % 17) as u32))
        .collect()
}

/// One leg per entry in `minutes`, each built like [`offer`]'s single leg
pub fn multi_leg_offer(id: &str, raw_price: f64, minutes: &[u32]) -> FlightOffer {
    let mut built = offer(id, raw_price, 0);
    built.legs = minutes
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            let mut leg = offer(&format!("{}-{}", id, i), raw_price, m).legs.remove(0);
            leg.stop_count = 0;
            leg
        })
        .collect();
    built
}
