//! Real routable Las Vegas pins for integration-style fixtures.
//!
//! Coordinates sourced from OpenStreetMap; all routable with OSRM
//! Nevada data.

/// A named pin with coordinates.
#[derive(Debug, Clone)]
pub struct Pin {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Pin {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Pins along the Strip, in plausible placement order.
pub const PINS: &[Pin] = &[
    Pin::new("Wynn Las Vegas", 36.1263781, -115.1658180),
    Pin::new("Caesars Palace", 36.1162, -115.1745),
    Pin::new("Bellagio", 36.1126, -115.1767),
    Pin::new("MGM Grand", 36.1023654, -115.1688720),
];
