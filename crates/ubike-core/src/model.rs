// crates/ubike-core/src/model.rs
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};

/// One physical bike-share station.
///
/// Field names follow the domain, not the feed. The loader maps the
/// feed's short keys (`sno`, `sna`, `sarea`, ...) onto these fields.
/// Names keep their raw branding prefix; see
/// [`present::display_name`](crate::present::display_name).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name_local: String,
    pub name_en: String,
    pub address_local: String,
    pub address_en: String,
    pub area_local: String,
    pub area_en: String,
    pub bikes_available: u32,
    pub spots_available: u32,

    // Optional attributes of the live feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl StationRecord {
    /// The six text fields a query is matched against, in match order.
    #[inline]
    pub fn searchable_fields(&self) -> [&str; 6] {
        [
            self.name_local.as_str(),
            self.name_en.as_str(),
            self.address_local.as_str(),
            self.address_en.as_str(),
            self.area_local.as_str(),
            self.area_en.as_str(),
        ]
    }

    /// Stations are in service unless the feed explicitly says otherwise.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }

    /// Both coordinates, if the feed carried them.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }
}

/// The loaded station list.
///
/// Records keep the order of the source document. Nothing mutates them
/// after construction; all queries borrow.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StationDb {
    stations: Vec<StationRecord>,
}

impl StationDb {
    pub fn new(stations: Vec<StationRecord>) -> Self {
        Self { stations }
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl From<Vec<StationRecord>> for StationDb {
    fn from(stations: Vec<StationRecord>) -> Self {
        Self::new(stations)
    }
}
