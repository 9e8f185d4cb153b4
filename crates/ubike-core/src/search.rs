// crates/ubike-core/src/search.rs

//! Query operations over the loaded station list.
//!
//! Every operation is a linear scan over a few thousand records, which is
//! well below anything worth indexing. Results borrow from the input and
//! keep source order.

use crate::area::{build_area_index, AreaIndex};
use crate::geo::{self, Coordinates, StationWithDistance};
use crate::model::{StationDb, StationRecord};
use crate::text::{contains_folded, fold_key};
use tracing::debug;

/// Records whose searchable fields contain `query`, case-insensitively.
///
/// A record matches if the folded query is a substring of at least one of
/// `name_local`, `name_en`, `address_local`, `address_en`, `area_local`,
/// `area_en`. The empty query matches everything. There is no limit and no
/// ranking: matches come back in source order.
pub fn search<'a>(records: &'a [StationRecord], query: &str) -> Vec<&'a StationRecord> {
    let q = fold_key(query);
    let out: Vec<&StationRecord> = records
        .iter()
        .filter(|s| s.searchable_fields().iter().any(|f| contains_folded(f, &q)))
        .collect();
    debug!(query, matches = out.len(), "search complete");
    out
}

/// Exact, case-sensitive lookup by station id.
pub fn find_by_id<'a>(records: &'a [StationRecord], id: &str) -> Option<&'a StationRecord> {
    records.iter().find(|s| s.id == id)
}

/// Looks up a list of favourite ids.
///
/// Results follow the order of `ids`. Unknown ids and stations that are out
/// of service are left out.
pub fn find_by_ids<'a, S: AsRef<str>>(
    records: &'a [StationRecord],
    ids: &[S],
) -> Vec<&'a StationRecord> {
    ids.iter()
        .filter_map(|id| find_by_id(records, id.as_ref()))
        .filter(|s| s.is_active())
        .collect()
}

/// Query operations available on a [`StationDb`].
pub trait StationSearch {
    /// Substring search across names, addresses and areas. See [`search`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ubike_core::{StationDb, StationSearch};
    ///
    /// let db = StationDb::load_from_path("sample_data.json").unwrap();
    /// for s in db.search("Technology").iter().take(5) {
    ///     println!("{} {}", s.id, s.name_en);
    /// }
    /// ```
    fn search(&self, query: &str) -> Vec<&StationRecord>;

    fn find_by_id(&self, id: &str) -> Option<&StationRecord>;

    fn find_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&StationRecord>;

    /// Distinct areas, first-seen English name per code.
    fn areas(&self) -> AreaIndex;

    /// The `count` closest active stations to `origin`.
    fn nearest(&self, origin: Coordinates, count: usize) -> Vec<StationWithDistance<'_>>;

    /// Like [`nearest`](Self::nearest), leaving out `exclude_ids` so that
    /// favourites already shown are not listed twice.
    fn nearest_excluding<S: AsRef<str>>(
        &self,
        origin: Coordinates,
        count: usize,
        exclude_ids: &[S],
    ) -> Vec<StationWithDistance<'_>>;
}

impl StationSearch for StationDb {
    fn search(&self, query: &str) -> Vec<&StationRecord> {
        search(self.stations(), query)
    }

    fn find_by_id(&self, id: &str) -> Option<&StationRecord> {
        find_by_id(self.stations(), id)
    }

    fn find_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&StationRecord> {
        find_by_ids(self.stations(), ids)
    }

    fn areas(&self) -> AreaIndex {
        build_area_index(self.stations())
    }

    fn nearest(&self, origin: Coordinates, count: usize) -> Vec<StationWithDistance<'_>> {
        geo::nearest::<&str>(self.stations(), origin, count, &[])
    }

    fn nearest_excluding<S: AsRef<str>>(
        &self,
        origin: Coordinates,
        count: usize,
        exclude_ids: &[S],
    ) -> Vec<StationWithDistance<'_>> {
        geo::nearest(self.stations(), origin, count, exclude_ids)
    }
}
