//! # Wallet Screen
//!
//! Session management: connect a signing key from a keyfile (or the key
//! environment variable), show the connected account, disconnect.

use egui::RichText;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;

/// Render the wallet screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    if let Some(wallet) = &state.wallet {
        render_connected(ui, wallet, app, &theme);
    } else {
        render_disconnected(ui, state, app, &theme);
    }
}

fn render_connected(
    ui: &mut egui::Ui,
    wallet: &crate::app::WalletState,
    app: &mut App,
    theme: &Theme,
) {
    ui.vertical(|ui| {
        ui.heading("Connected Wallet");
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Address:");
            ui.monospace(&wallet.address);
        });
        ui.horizontal(|ui| {
            ui.label("Connector:");
            ui.colored_label(theme.dim, &wallet.connector);
        });
        ui.horizontal(|ui| {
            ui.label("Balance:");
            match &wallet.eth_balance {
                Some(balance) => ui.colored_label(theme.success, &balance.formatted),
                None => ui.colored_label(theme.dim, "loading..."),
            };
        });

        ui.add_space(14.0);
        if ui
            .add(egui::Button::new("Disconnect Wallet").fill(theme.error))
            .clicked()
        {
            app.handle_wallet_disconnect_click();
        }
    });
}

fn render_disconnected(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.vertical(|ui| {
        ui.heading("Connect a Wallet");
        ui.add_space(8.0);
        ui.colored_label(
            theme.dim,
            "Point at a keyfile holding a hex private key, or leave the path \
             empty to use the COUNTING_GAME_KEY environment variable.",
        );
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Keyfile:");
            let mut path = state.keyfile_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut path)
                    .hint_text("~/.counting-game/key")
                    .desired_width(280.0),
            );
            if response.changed() {
                let mut state_write = app.state.write();
                state_write.keyfile_input = path;
            }
        });

        ui.add_space(10.0);
        if ui
            .add(egui::Button::new(RichText::new("Connect Wallet").strong()).fill(theme.accent))
            .clicked()
        {
            app.handle_wallet_connect_click();
        }
    });
}
