use tokio::runtime::Handle;

use crate::console::api::ApiClient;
use crate::console::auth::{login, AuthState, LoginError};
use crate::console::config::Config;
use crate::console::dashboard::Dashboard;
use crate::console::entities::{
    AdminUsers, Amenities, Countries, Developers, Invoices, Leads, Projects,
};
use crate::console::router::{Route, Router};
use crate::console::screen::{Lookup, ScreenTask};
use crate::console::session::Session;
use crate::console::task::TaskQueue;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: Session,
    pub client: ApiClient,
    pub router: Router,
    pub auth_state: AuthState,
    login_result: TaskQueue<Result<(), LoginError>>,

    pub dashboard: Dashboard,
    pub developers: ScreenTask<Developers>,
    pub projects: ScreenTask<Projects>,
    pub leads: ScreenTask<Leads>,
    pub invoices: ScreenTask<Invoices>,
    pub admin_users: ScreenTask<AdminUsers>,
    pub countries: ScreenTask<Countries>,
    pub amenities: ScreenTask<Amenities>,
    /// Developer choices for the project form
    pub developer_options: Lookup<Developers>,
}

impl AppState {
    /// Build the state and open `start_path` through the session gate
    pub fn new(config: Config, session: Session, runtime: Handle, start_path: &str) -> Self {
        let client = ApiClient::new(config.clone(), session.clone());
        let router = Router::new(start_path, &session);
        tracing::info!(
            "Console starting at {} ({})",
            router.current(),
            if session.is_authenticated() { "signed in" } else { "signed out" }
        );

        let mut state = Self {
            dashboard: Dashboard::new(client.clone(), runtime.clone()),
            developers: ScreenTask::new(client.clone(), runtime.clone()),
            projects: ScreenTask::new(client.clone(), runtime.clone()),
            leads: ScreenTask::new(client.clone(), runtime.clone()),
            invoices: ScreenTask::new(client.clone(), runtime.clone()),
            admin_users: ScreenTask::new(client.clone(), runtime.clone()),
            countries: ScreenTask::new(client.clone(), runtime.clone()),
            amenities: ScreenTask::new(client.clone(), runtime.clone()),
            developer_options: Lookup::new(client.clone(), runtime.clone()),
            login_result: TaskQueue::new(runtime),
            auth_state: AuthState::new(),
            config,
            session,
            client,
            router,
        };
        state.enter();
        state
    }

    pub fn navigate(&mut self, path: &str) {
        let route = Route::parse(path);
        self.go(route);
    }

    pub fn go(&mut self, route: Route) {
        self.router.go(route, &self.session);
        self.enter();
    }

    /// Load whatever the current screen shows
    fn enter(&mut self) {
        match self.router.current() {
            Route::Dashboard => self.dashboard.refresh(),
            Route::Developers => self.developers.mount(),
            Route::Projects => {
                self.projects.mount();
                self.developer_options.load();
            }
            Route::Leads => self.leads.mount(),
            Route::Invoices => self.invoices.mount(),
            Route::AdminUsers => self.admin_users.mount(),
            Route::Countries => self.countries.mount(),
            Route::Amenities => self.amenities.mount(),
            Route::Login | Route::Placeholder(_) | Route::NotFound(_) => {}
        }
    }

    /// Fold in every background result that has arrived
    pub fn poll(&mut self) {
        self.check_login_result();
        self.dashboard.poll();
        self.developers.poll();
        self.projects.poll();
        self.leads.poll();
        self.invoices.poll();
        self.admin_users.poll();
        self.countries.poll();
        self.amenities.poll();
        self.developer_options.poll();
    }

    pub fn handle_login(&mut self) {
        if self.auth_state.loading {
            return;
        }
        let request = match self.auth_state.credentials() {
            Ok(request) => request,
            Err(e) => {
                self.auth_state.set_error(e.to_string());
                return;
            }
        };

        self.auth_state.loading = true;
        self.auth_state.clear_error();

        let client = self.client.clone();
        self.login_result
            .spawn(async move { login(&client, request).await });
    }

    fn check_login_result(&mut self) {
        for result in self.login_result.drain() {
            self.auth_state.loading = false;
            match result {
                Ok(()) => {
                    self.auth_state.reset();
                    self.go(Route::Dashboard);
                }
                Err(e) => {
                    tracing::error!("Authentication failed: {}", e);
                    self.auth_state.set_error(e.to_string());
                }
            }
        }
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.client.clear_token() {
            tracing::error!("Failed to clear stored token: {}", e);
        }
        tracing::info!("Signed out");
        self.auth_state.reset();
        self.go(Route::Login);
    }
}
