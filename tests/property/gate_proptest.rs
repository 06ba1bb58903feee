//! Property-based tests for the session gate

use proptest::prelude::*;
use realty_admin::console::router::{gate, Navigation, Route};
use realty_admin::console::Session;

const PROTECTED: [&str; 8] = [
    "/",
    "/developers",
    "/projects",
    "/leads",
    "/invoices",
    "/admin-users",
    "/countries",
    "/amenities",
];

proptest! {
    #[test]
    fn test_real_token_renders(token in "[A-Za-z0-9._-]{1,40}", index in 0usize..PROTECTED.len()) {
        let session = Session::in_memory();
        session.begin(token).unwrap();
        let route = Route::parse(PROTECTED[index]);
        prop_assert_eq!(gate(route.clone(), &session), Navigation::Render(route));
    }

    #[test]
    fn test_blank_token_redirects(token in "[ \t\n]{0,8}", index in 0usize..PROTECTED.len()) {
        let session = Session::in_memory();
        session.begin(token).unwrap();
        prop_assert!(!session.is_authenticated());
        let route = Route::parse(PROTECTED[index]);
        prop_assert_eq!(gate(route, &session), Navigation::Redirect(Route::Login));
    }

    #[test]
    fn test_parse_ignores_query_and_trailing_slash(
        index in 0usize..PROTECTED.len(),
        query in "[a-z=&]{0,10}",
    ) {
        let base = PROTECTED[index];
        let decorated = format!("{}/?{}", base.trim_end_matches('/'), query);
        prop_assert_eq!(Route::parse(&decorated), Route::parse(base));
    }
}
