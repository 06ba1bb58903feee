use std::sync::Arc;

use realty_admin::console::router::{gate, Navigation, Placeholder, Route, Router};
use realty_admin::console::{FileTokenStore, Session, TokenStore};
use tempfile::TempDir;

fn protected_routes() -> Vec<Route> {
    let mut routes = vec![
        Route::Dashboard,
        Route::Developers,
        Route::Projects,
        Route::Leads,
        Route::Invoices,
        Route::AdminUsers,
        Route::Countries,
        Route::Amenities,
    ];
    routes.extend(Placeholder::ALL.iter().map(|p| Route::Placeholder(*p)));
    routes
}

#[test]
fn test_token_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("admin_token");

    let first = Session::restore(Arc::new(FileTokenStore::new(&path)));
    assert!(!first.is_authenticated());
    first.begin("persisted").unwrap();

    let second = Session::restore(Arc::new(FileTokenStore::new(&path)));
    assert_eq!(second.token().as_deref(), Some("persisted"));

    second.end().unwrap();
    assert!(!path.exists());
    let third = Session::restore(Arc::new(FileTokenStore::new(&path)));
    assert!(!third.is_authenticated());
}

#[test]
fn test_signed_out_protected_routes_redirect() {
    let session = Session::in_memory();
    for route in protected_routes() {
        assert_eq!(gate(route, &session), Navigation::Redirect(Route::Login));
    }
    assert_eq!(
        gate(Route::parse("/nowhere"), &session),
        Navigation::Render(Route::NotFound("/nowhere".to_string()))
    );
}

#[test]
fn test_signed_in_protected_routes_render() {
    let session = Session::in_memory();
    session.begin("tok").unwrap();
    for route in protected_routes() {
        assert_eq!(gate(route.clone(), &session), Navigation::Render(route));
    }
    assert_eq!(gate(Route::Login, &session), Navigation::Redirect(Route::Dashboard));
}

#[test]
fn test_logout_then_refresh_lands_on_login() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileTokenStore::new(dir.path().join("admin_token")));
    store.save("tok").unwrap();

    let session = Session::restore(store);
    let mut router = Router::new("/invoices/", &session);
    assert_eq!(router.current(), &Route::Invoices);

    session.end().unwrap();
    assert_eq!(router.refresh(&session), &Route::Login);
}
