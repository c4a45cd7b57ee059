//! Real Danish harbour and lighthouse positions for realistic test fixtures.
//!
//! Coordinates taken from OpenStreetMap, rounded to 4 decimals.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Harbours (route legs through the Danish straits)
// ============================================================================

pub const HARBOURS: &[Location] = &[
    Location::new("Copenhagen Nordhavn", 55.7104, 12.6035),
    Location::new("Helsingør", 56.0383, 12.6127),
    Location::new("Grenaa", 56.4103, 10.9230),
    Location::new("Aarhus", 56.1500, 10.2270),
    Location::new("Frederikshavn", 57.4374, 10.5449),
    Location::new("Skagen", 57.7194, 10.5926),
];

// ============================================================================
// Lighthouses (corners of a closed survey area)
// ============================================================================

pub const LIGHTHOUSES: &[Location] = &[
    Location::new("Hammeren Fyr", 55.2839, 14.7574),
    Location::new("Dueodde Fyr", 54.9901, 15.0736),
    Location::new("Rønne Fyr", 55.0985, 14.6950),
];

/// Harbour coordinates as `(lat, lng)` tuples, in route order.
pub fn harbour_route() -> Vec<(f64, f64)> {
    HARBOURS.iter().map(Location::coords).collect()
}

/// Lighthouse coordinates as `(lat, lng)` tuples.
pub fn lighthouse_ring() -> Vec<(f64, f64)> {
    LIGHTHOUSES.iter().map(Location::coords).collect()
}
