//! Property-based tests for list search

use proptest::prelude::*;
use realty_admin::console::entities::Countries;
use realty_admin::console::screen::{Command, CrudScreen, Outcome, SearchQuery};
use realty_admin::shared::records::Country;

fn loaded(names: &[String]) -> CrudScreen<Countries> {
    let mut screen = CrudScreen::<Countries>::new();
    let Command::FetchList { generation } = screen.mount() else {
        panic!("mount must fetch the list");
    };
    let records = names
        .iter()
        .enumerate()
        .map(|(i, name)| Country {
            id: i as i64 + 1,
            name: name.clone(),
            created_at: String::new(),
        })
        .collect();
    screen.apply(Outcome::Listed {
        generation,
        result: Ok(records),
    });
    screen
}

proptest! {
    #[test]
    fn test_substring_matches_ignoring_case(
        name in "[A-Za-z ]{1,24}",
        start in 0usize..24,
        len in 0usize..24,
    ) {
        let start = start.min(name.len());
        let end = (start + len).min(name.len());
        let needle = name[start..end].to_uppercase();
        prop_assert!(SearchQuery::new(needle).hits(&name));
    }

    #[test]
    fn test_set_query_is_idempotent(
        names in prop::collection::vec("[a-z]{1,10}", 0..12),
        query in "[a-z]{0,3}",
    ) {
        let mut screen = loaded(&names);
        screen.set_query(query.clone());
        let once: Vec<i64> = screen.filtered().map(|c| c.id).collect();
        screen.set_query(query);
        let twice: Vec<i64> = screen.filtered().map(|c| c.id).collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_keeps_order_and_only_hits(
        names in prop::collection::vec("[a-z]{1,10}", 0..12),
        query in "[a-z]{1,2}",
    ) {
        let mut screen = loaded(&names);
        screen.set_query(query.clone());
        let expected: Vec<i64> = names
            .iter()
            .enumerate()
            .filter(|(_, name)| name.contains(&query))
            .map(|(i, _)| i as i64 + 1)
            .collect();
        let actual: Vec<i64> = screen.filtered().map(|c| c.id).collect();
        prop_assert_eq!(actual, expected);
        prop_assert_eq!(screen.records().len(), names.len());
    }

    #[test]
    fn test_digits_never_match_letters(
        names in prop::collection::vec("[A-Za-z]{1,10}", 1..8),
        query in "[0-9]{1,4}",
    ) {
        let mut screen = loaded(&names);
        screen.set_query(query);
        prop_assert_eq!(screen.filtered_len(), 0);
    }

    #[test]
    fn test_empty_query_shows_everything(names in prop::collection::vec(".{0,10}", 0..12)) {
        let mut screen = loaded(&names);
        screen.set_query("");
        prop_assert_eq!(screen.filtered_len(), names.len());
    }
}
