/**
 * Admin Console - Main Entry Point
 *
 * Sets up logging, configuration, the stored session and a tokio runtime for
 * background requests, then hands control to eframe.
 */
use std::sync::Arc;

use eframe::egui;
use realty_admin::console::{
    theme::styles, views, AppState, Config, FileTokenStore, MemoryTokenStore, Session, TokenStore,
};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "realty_admin=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();
}

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default configuration: {}", e);
            Config::default()
        }
    }
}

fn token_store(config: &Config) -> Arc<dyn TokenStore> {
    match config.token_file() {
        Some(path) => {
            tracing::debug!("Token file: {}", path.display());
            Arc::new(FileTokenStore::new(path))
        }
        None => {
            tracing::warn!("No config directory; the session will not survive a restart");
            Arc::new(MemoryTokenStore::new())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = load_config();
    tracing::info!("Using API at {}", config.server_url());
    let session = Session::restore(token_store(&config));

    // Background requests run here; the UI thread only polls for results.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("console-io")
        .build()?;

    let start_path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let state = AppState::new(config, session, runtime.handle().clone(), &start_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Realty Admin",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(ConsoleApp { state }))
        }),
    )?;

    drop(runtime);
    Ok(())
}

struct ConsoleApp {
    state: AppState,
}

impl eframe::App for ConsoleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        if views::shows_shell(&self.state) {
            views::render_top_bar(ctx, &mut self.state);
            views::render_sidebar(ctx, &mut self.state);
        }
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
