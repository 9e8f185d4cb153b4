// crates/ubike-core/src/area.rs
use crate::model::StationRecord;
use std::collections::HashMap;

/// Area code (`sarea`) -> English display name (`sareaen`).
///
/// Unordered. [`present::format_area_list`](crate::present::format_area_list)
/// sorts for display.
pub type AreaIndex = HashMap<String, String>;

/// Builds the distinct-area index in one ordered pass.
///
/// The first `area_en` seen for an `area_local` is kept; later records with
/// the same code never overwrite it.
pub fn build_area_index(records: &[StationRecord]) -> AreaIndex {
    records.iter().fold(AreaIndex::new(), |mut index, s| {
        index
            .entry(s.area_local.clone())
            .or_insert_with(|| s.area_en.clone());
        index
    })
}
