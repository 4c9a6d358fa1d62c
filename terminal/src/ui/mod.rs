//! # GUI Rendering
//!
//! Orchestrates the rendering pipeline: screen dispatch, tab navigation and
//! the status bar.

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppState, Screen, TickPhase};
use theme::Theme;

/// Main render function - called every frame.
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Snapshot the state for rendering; the lock is released before any
    // widget runs. The clone drops the signing session by design of
    // `AppState::clone`.
    let state = {
        match app.state.try_read() {
            Some(guard) => guard.clone(),
            None => return, // Lock held by a task, skip this frame
        }
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        render_nav(ui, &state, app);
        ui.separator();
        ui.add_space(6.0);

        if ctx.input(|i| i.key_pressed(egui::Key::Tab) && !i.modifiers.shift) {
            app.next_screen();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Tab) && i.modifiers.shift) {
            app.previous_screen();
        }

        match state.current_screen {
            Screen::Game => screens::game::render(ui, &state, app),
            Screen::Wallet => screens::wallet::render(ui, &state, app),
        }

        ui.add_space(10.0);
        ui.separator();
        render_status_bar(ui, &state);
    });
}

fn render_nav(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    ui.horizontal(|ui| {
        for screen in Screen::all() {
            let selected = state.current_screen == *screen;
            if ui.selectable_label(selected, screen.title()).clicked() && !selected {
                app.handle_screen_change(*screen);
            }
        }
    });
}

fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let theme = Theme::default();

    ui.horizontal(|ui| {
        if let Some(wallet) = &state.wallet {
            let short_addr = if wallet.address.len() > 10 {
                format!(
                    "{}...{}",
                    &wallet.address[..6],
                    &wallet.address[wallet.address.len() - 4..]
                )
            } else {
                wallet.address.clone()
            };
            ui.colored_label(theme.success, format!("Wallet: {short_addr}"));
        } else {
            ui.colored_label(theme.dim, "No Wallet");
        }

        ui.separator();
        ui.colored_label(theme.dim, format!("Network: {}", state.config.network));

        ui.separator();
        match &state.game.tick {
            TickPhase::Idle => {
                ui.colored_label(theme.dim, "Ready");
            }
            TickPhase::Submitting => {
                ui.colored_label(theme.warning, "Submitting transaction...");
            }
            TickPhase::Confirming { .. } => {
                ui.colored_label(theme.warning, "Confirming transaction...");
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.dim, "Tab: Navigate");
        });
    });
}
