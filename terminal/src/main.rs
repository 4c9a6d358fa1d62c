//! Terminal entry point: logging, configuration, runtime, frame loop.

use std::sync::Arc;

use terminal::app::App;
use terminal::ui;
use terminal::ui::widgets::notifications::NotificationManager;
use terminal::utils::runtime::TOKIO_RT;

use lib_ethereum::ChainConfig;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    tracing::info!(
        network = %config.network,
        contract = %config.contract_address,
        rpc = %config.rpc_url,
        "starting counting-game terminal"
    );

    // Enter the tokio runtime so tasks spawned from UI handlers land on it.
    let _runtime = TOKIO_RT.enter();

    let app = App::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("ETH Counting Game"),
        ..Default::default()
    };

    eframe::run_native(
        "counting-game-terminal",
        options,
        Box::new(|_cc| Ok(Box::new(TerminalApp::new(app)))),
    )
}

fn load_config() -> Result<ChainConfig, lib_ethereum::EthereumError> {
    let config = ChainConfig::from_env()?;
    config.validate()?;
    Ok(config)
}

/// eframe wrapper around the application orchestrator.
struct TerminalApp {
    app: App,
    notifications: NotificationManager,
}

impl TerminalApp {
    fn new(app: App) -> Self {
        Self {
            app,
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for TerminalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        // Drain queued notifications into the toast system.
        let pending = {
            let mut state = self.app.state.write();
            std::mem::take(&mut state.pending_notifications)
        };
        for (level, message) in pending {
            self.notifications.push(level, message);
        }

        ui::render(ctx, &mut self.app);
        self.notifications.show(ctx);

        // Keep ticking while idle so the watched read stays on schedule.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
