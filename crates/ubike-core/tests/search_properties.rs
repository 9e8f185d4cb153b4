use proptest::prelude::*;
use ubike_core::search::search;
use ubike_core::text::fold_key;
use ubike_core::{build_area_index, StationRecord};

/// Small alphabets so that random queries actually hit something.
fn text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[abAB大安區 ]{0,6}").unwrap()
}

fn station() -> impl Strategy<Value = StationRecord> {
    (
        "[0-9]{1,4}",
        (text(), text(), text(), text(), text(), text()),
        (0u32..40, 0u32..40),
    )
        .prop_map(|(id, f, (bikes, spots))| {
            let (name_local, name_en, address_local, address_en, area_local, area_en) = f;
            StationRecord {
                id,
                name_local,
                name_en,
                address_local,
                address_en,
                area_local,
                area_en,
                bikes_available: bikes,
                spots_available: spots,
                latitude: None,
                longitude: None,
                updated_at: None,
                active: None,
            }
        })
}

fn matches(s: &StationRecord, query: &str) -> bool {
    let q = fold_key(query);
    s.searchable_fields()
        .iter()
        .any(|f| fold_key(f).contains(&q))
}

proptest! {
    /// Every hit contains the query; every record containing it is a hit,
    /// in source order.
    #[test]
    fn search_is_sound_complete_and_ordered(
        records in proptest::collection::vec(station(), 0..30),
        query in text(),
    ) {
        let hits = search(&records, &query);
        let expected: Vec<&StationRecord> = records.iter().filter(|s| matches(s, &query)).collect();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn empty_query_returns_all_in_order(records in proptest::collection::vec(station(), 0..30)) {
        let all: Vec<&StationRecord> = records.iter().collect();
        prop_assert_eq!(search(&records, ""), all);
    }

    #[test]
    fn search_ignores_query_case(
        records in proptest::collection::vec(station(), 0..30),
        query in text(),
    ) {
        let plain = search(&records, &query);
        prop_assert_eq!(&plain, &search(&records, &query.to_uppercase()));
        prop_assert_eq!(&plain, &search(&records, &query.to_lowercase()));
    }

    #[test]
    fn search_is_idempotent(
        records in proptest::collection::vec(station(), 0..30),
        query in text(),
    ) {
        prop_assert_eq!(search(&records, &query), search(&records, &query));
    }

    #[test]
    fn area_index_is_bounded_and_first_seen(records in proptest::collection::vec(station(), 0..30)) {
        let index = build_area_index(&records);

        let mut distinct: Vec<&str> = records.iter().map(|s| s.area_local.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(index.len(), distinct.len());

        for (local, en) in &index {
            let first = records.iter().find(|s| &s.area_local == local).unwrap();
            prop_assert_eq!(&first.area_en, en);
        }
        prop_assert_eq!(index, build_area_index(&records));
    }
}
