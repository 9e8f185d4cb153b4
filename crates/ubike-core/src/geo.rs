// crates/ubike-core/src/geo.rs

//! Great-circle helpers for the "stations near me" query.

use crate::model::StationRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// How many stations a proximity query returns when not told otherwise.
pub const NEAREST_DEFAULT_COUNT: usize = 2;

/// A WGS84 position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Parses `"LAT,LNG"` (whitespace around either part is ignored).
impl FromStr for Coordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LNG but got '{s}'"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {lat} out of range [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!("longitude {lng} out of range [-180, 180]"));
        }
        Ok(Self::new(lat, lng))
    }
}

/// Haversine distance in whole metres, truncated toward zero.
pub fn haversine_metres(a: Coordinates, b: Coordinates) -> u32 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_M * c) as u32
}

/// Initial bearing from `a` towards `b`, in degrees within (-180, 180].
/// 0 is north, 90 east.
pub fn initial_bearing(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let x = phi2.cos() * d_lambda.sin();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    x.atan2(y).to_degrees()
}

/// A station paired with where it is relative to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StationWithDistance<'a> {
    pub station: &'a StationRecord,
    pub distance_m: u32,
    pub bearing_deg: f64,
}

/// Where `station` is relative to `origin`, if the feed placed it.
pub fn locate(station: &StationRecord, origin: Coordinates) -> Option<StationWithDistance<'_>> {
    let pos = station.coordinates()?;
    Some(StationWithDistance {
        station,
        distance_m: haversine_metres(origin, pos),
        bearing_deg: initial_bearing(origin, pos),
    })
}

/// Distance and bearing for an already chosen list, such as favourites.
///
/// Keeps the given order. Stations without coordinates are left out.
pub fn with_distance<'a>(
    stations: impl IntoIterator<Item = &'a StationRecord>,
    origin: Coordinates,
) -> Vec<StationWithDistance<'a>> {
    stations
        .into_iter()
        .filter_map(|s| locate(s, origin))
        .collect()
}

/// The `count` closest active stations to `origin`.
///
/// Stations without coordinates, inactive stations and ids listed in
/// `exclude_ids` are skipped. Ties keep source order.
pub fn nearest<'a, S: AsRef<str>>(
    records: &'a [StationRecord],
    origin: Coordinates,
    count: usize,
    exclude_ids: &[S],
) -> Vec<StationWithDistance<'a>> {
    let mut out: Vec<StationWithDistance<'a>> = records
        .iter()
        .filter(|s| s.is_active() && !exclude_ids.iter().any(|id| id.as_ref() == s.id))
        .filter_map(|s| locate(s, origin))
        .collect();

    // sort_by_key is stable
    out.sort_by_key(|e| e.distance_m);
    out.truncate(count);
    out
}
