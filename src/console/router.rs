//! Route table and session gate.
//!
//! Every path maps to a [`Route`]. All routes except login and not-found are
//! protected: [`gate`] lets them render only while the session holds a token.
//! The gate is a presence check and nothing more; the backend enforces
//! authorization on every API call.

use std::fmt;

use crate::console::session::Session;

/// Screens announced in the sidebar but not built yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    BuilderUsers,
    States,
    Cities,
    Districts,
    Areas,
    UserAuth,
    EmailEvents,
    ProjectMedia,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::BuilderUsers,
        Placeholder::States,
        Placeholder::Cities,
        Placeholder::Districts,
        Placeholder::Areas,
        Placeholder::UserAuth,
        Placeholder::EmailEvents,
        Placeholder::ProjectMedia,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Placeholder::BuilderUsers => "/builder-users",
            Placeholder::States => "/states",
            Placeholder::Cities => "/cities",
            Placeholder::Districts => "/districts",
            Placeholder::Areas => "/areas",
            Placeholder::UserAuth => "/user-auth",
            Placeholder::EmailEvents => "/email-events",
            Placeholder::ProjectMedia => "/project-media",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Placeholder::BuilderUsers => "Builder Users",
            Placeholder::States => "States",
            Placeholder::Cities => "Cities",
            Placeholder::Districts => "Districts",
            Placeholder::Areas => "Areas",
            Placeholder::UserAuth => "User Auth",
            Placeholder::EmailEvents => "Email Events",
            Placeholder::ProjectMedia => "Project Media",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Developers,
    Projects,
    Leads,
    Invoices,
    AdminUsers,
    Countries,
    Amenities,
    Placeholder(Placeholder),
    /// Carries the path that failed to match
    NotFound(String),
}

impl Route {
    /// Resolve a path. Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        match normalized {
            "/login" => Route::Login,
            "/" => Route::Dashboard,
            "/developers" => Route::Developers,
            "/projects" => Route::Projects,
            "/leads" => Route::Leads,
            "/invoices" => Route::Invoices,
            "/admin-users" => Route::AdminUsers,
            "/countries" => Route::Countries,
            "/amenities" => Route::Amenities,
            other => Placeholder::ALL
                .into_iter()
                .find(|p| p.path() == other)
                .map(Route::Placeholder)
                .unwrap_or_else(|| Route::NotFound(path.to_string())),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Developers => "/developers",
            Route::Projects => "/projects",
            Route::Leads => "/leads",
            Route::Invoices => "/invoices",
            Route::AdminUsers => "/admin-users",
            Route::Countries => "/countries",
            Route::Amenities => "/amenities",
            Route::Placeholder(p) => p.path(),
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Developers => "Developers",
            Route::Projects => "Projects",
            Route::Leads => "Leads",
            Route::Invoices => "Invoices",
            Route::AdminUsers => "Admin Users",
            Route::Countries => "Countries",
            Route::Amenities => "Amenities",
            Route::Placeholder(p) => p.title(),
            Route::NotFound(_) => "Not Found",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of the session gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen
    pub fn into_route(self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => route,
        }
    }
}

/// Decide whether `route` may render with the current session
pub fn gate(route: Route, session: &Session) -> Navigation {
    let authenticated = session.is_authenticated();
    match route {
        route if route.requires_session() && !authenticated => Navigation::Redirect(Route::Login),
        Route::Login if authenticated => Navigation::Redirect(Route::Dashboard),
        route => Navigation::Render(route),
    }
}

/// Sidebar sections and their entries
pub fn nav_groups() -> [(&'static str, Vec<Route>); 3] {
    [
        (
            "Main",
            vec![
                Route::Dashboard,
                Route::Developers,
                Route::Projects,
                Route::Leads,
                Route::Invoices,
            ],
        ),
        (
            "Management",
            vec![
                Route::AdminUsers,
                Route::Placeholder(Placeholder::BuilderUsers),
                Route::Placeholder(Placeholder::UserAuth),
            ],
        ),
        (
            "System",
            vec![
                Route::Countries,
                Route::Placeholder(Placeholder::States),
                Route::Placeholder(Placeholder::Cities),
                Route::Placeholder(Placeholder::Districts),
                Route::Placeholder(Placeholder::Areas),
                Route::Amenities,
            ],
        ),
    ]
}

/// Current location, always the result of passing through the gate
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
}

impl Router {
    /// Start at `path`, gated against `session`
    pub fn new(path: &str, session: &Session) -> Self {
        Self {
            current: gate(Route::parse(path), session).into_route(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn navigate(&mut self, path: &str, session: &Session) -> &Route {
        self.go(Route::parse(path), session)
    }

    pub fn go(&mut self, route: Route, session: &Session) -> &Route {
        let navigation = gate(route, session);
        if let Navigation::Redirect(target) = &navigation {
            tracing::debug!("Redirecting to {}", target);
        }
        self.current = navigation.into_route();
        &self.current
    }

    /// Re-run the gate on the current route, e.g. after logout
    pub fn refresh(&mut self, session: &Session) -> &Route {
        self.go(self.current.clone(), session)
    }
}
