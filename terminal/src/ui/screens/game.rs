//! # Game Screen
//!
//! The counting-game page: amount input, the send button, and the read-only
//! card with contract balance, counter and current price.

use egui::RichText;

use crate::app::{App, AppState, TickPhase, TxStatus};
use crate::ui::theme::Theme;
use crate::ui::widgets::skeleton;

/// Render the game screen.
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.heading("Welcome to");
            ui.heading(RichText::new("ETH").color(theme.accent).strong());
            ui.heading(RichText::new("counting game").color(theme.highlight).strong());
            ui.heading("!");
        });
        ui.add_space(12.0);

        if state.is_connected() {
            render_send_form(ui, state, app, &theme);
        } else {
            ui.colored_label(theme.dim, "Connect a wallet to play (Wallet tab).");
        }

        ui.add_space(16.0);
        render_contract_card(ui, state, &theme);

        if !state.game.recent.is_empty() {
            ui.add_space(16.0);
            render_recent(ui, state, &theme);
        }
    });
}

/// Amount input plus the send button. The button is disabled while a
/// transaction is submitting or confirming; the real double-submission guard
/// lives in the click handler.
fn render_send_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label("Amount (ETH):");

        let mut amount = state.game.amount.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut amount)
                .hint_text("0.1")
                .desired_width(90.0),
        );
        if response.changed() {
            let mut state_write = app.state.write();
            state_write.game.amount = amount;
        }

        let in_flight = state.game.send_in_flight();
        let label = if in_flight {
            "Sending transaction..."
        } else {
            "Send"
        };
        let button = egui::Button::new(RichText::new(label).strong()).fill(theme.highlight);
        if ui.add_enabled(!in_flight, button).clicked() {
            app.handle_send_click();
        }
        if in_flight {
            ui.spinner();
        }
    });

    if let TickPhase::Confirming { hash } = &state.game.tick {
        ui.add_space(4.0);
        ui.colored_label(theme.dim, format!("Waiting for {} ...", short_hash(hash)));
    }
}

/// The read-only card. Until the first read resolves, and whenever the read
/// loop reports an error, the skeleton placeholder is shown instead; the
/// display accessors return `None` in both cases, so snapshot fields are
/// never touched here.
fn render_contract_card(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    let countdown = state.game.countdown_display();
    let price = state.game.price_display();

    match (countdown, price) {
        (Some(countdown), Some(price)) => {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_min_width(260.0);

                    card_row(ui, theme, "CONTRACT BALANCE", |ui| {
                        match &state.game.balance {
                            Some(balance) => ui.label(&balance.formatted),
                            None => ui.colored_label(theme.dim, "loading..."),
                        };
                    });
                    ui.add_space(10.0);

                    card_row(ui, theme, "COUNTER", |ui| {
                        ui.label(RichText::new(countdown).size(18.0).strong());
                    });
                    ui.add_space(10.0);

                    card_row(ui, theme, "CURRENT PRICE", |ui| {
                        ui.label(RichText::new(price).size(18.0));
                    });
                });
        }
        _ => {
            skeleton::render(ui, theme, 3, 240.0);
            if state.game.snapshot_error {
                ui.colored_label(theme.error, "Contract read failed; retrying...");
            }
        }
    }
}

fn card_row(ui: &mut egui::Ui, theme: &Theme, title: &str, value: impl FnOnce(&mut egui::Ui)) {
    ui.vertical(|ui| {
        ui.label(RichText::new(title).small().color(theme.dim));
        value(ui);
    });
}

fn render_recent(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(RichText::new("RECENT TRANSACTIONS").small().color(theme.dim));
    ui.add_space(4.0);

    for item in &state.game.recent {
        ui.horizontal(|ui| {
            ui.monospace(short_hash(&item.hash));
            ui.label(&item.amount);
            let color = match item.status {
                TxStatus::Pending => theme.warning,
                TxStatus::Confirmed => theme.success,
                TxStatus::Failed => theme.error,
            };
            ui.colored_label(color, item.status.label());
        });
    }
}

/// Shorten a 0x-prefixed hash for display.
fn short_hash(hash: &str) -> String {
    if hash.len() > 14 {
        format!("{}...{}", &hash[..10], &hash[hash.len() - 4..])
    } else {
        hash.to_string()
    }
}
