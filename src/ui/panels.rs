use eframe::egui::{self, Color32, Response, RichText, Ui};

use crate::data::model::PayloadRange;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dropdown and payload slider
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Launch site dropdown (searchable) ----
    ui.strong("Launch Site");
    let current = state.site().clone();
    let mut chosen = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_query)
                    .hint_text("Select a Launch Site here"),
            );
            for option in state.matching_site_options() {
                if ui
                    .selectable_label(option == current, option.label())
                    .clicked()
                {
                    chosen = Some(option);
                }
            }
        });
    if let Some(site) = chosen {
        state.set_site(site);
    }
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let range = state.payload_range();
    let slider = state
        .slider
        .widened_to(state.table.as_ref().and_then(|t| t.payload_bounds()));
    let (mut low, mut high) = (range.low, range.high);

    // Drawing must never rewrite the range: no clamping, and only commit
    // values the user produced.
    let low_response = ui.add(
        egui::Slider::new(&mut low, slider.min..=slider.max)
            .step_by(slider.step)
            .clamping(egui::SliderClamping::Never)
            .text("from"),
    );
    let high_response = ui.add(
        egui::Slider::new(&mut high, slider.min..=slider.max)
            .step_by(slider.step)
            .clamping(egui::SliderClamping::Never)
            .text("to"),
    );
    let low_changed = user_changed(&low_response);
    let high_changed = user_changed(&high_response);

    // Keep the handles ordered the way a two-handle range slider would.
    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }
    if low_changed || high_changed {
        state.set_payload_range(PayloadRange::new(low, high));
    }

    ui.horizontal(|ui: &mut Ui| {
        for mark in slider.marks(5) {
            ui.small(format!("{mark:.0}"));
        }
    });

    if ui.small_button("Reset to observed range").clicked() {
        if let Some(bounds) = state.table.as_ref().and_then(|t| t.payload_bounds()) {
            state.set_payload_range(bounds);
        }
    }
    ui.separator();

    // ---- Booster category legend ----
    ui.strong("Booster Version Category");
    for (label, color) in state.category_colors.legend_entries() {
        ui.label(RichText::new(format!("● {label}")).color(color));
    }
}

/// A value change that came from the pointer or keyboard on this widget.
fn user_changed(response: &Response) -> bool {
    response.changed()
        && (response.is_pointer_button_down_on()
            || response.dragged()
            || response.has_focus()
            || response.lost_focus())
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} launches loaded, {} in payload range",
                table.len(),
                state.scatter().len()
            ));
        }

        if let Some(path) = &state.source {
            ui.separator();
            ui.label(RichText::new(path.display().to_string()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => state.set_table(table, Some(path)),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, LaunchTable, Outcome};

    fn render(state: &mut AppState, frames: usize) {
        let ctx = egui::Context::default();
        for _ in 0..frames {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| side_panel(ui, state));
            });
        }
    }

    #[test]
    fn drawing_keeps_off_grid_observed_range() {
        let mut state = AppState::default();
        state.set_table(
            LaunchTable::from_records(vec![
                LaunchRecord::new("CCAFS LC-40", 600.0, Outcome::Failed, "v1.0"),
                LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Success, "FT"),
                LaunchRecord::new("KSC LC-39A", 15600.0, Outcome::Success, "B5"),
            ]),
            None,
        );
        let before = state.payload_range();

        render(&mut state, 2);

        assert_eq!(state.payload_range(), before);
        assert_eq!(before, PayloadRange::new(600.0, 15600.0));
        assert_eq!(state.scatter().len(), 3);
    }

    #[test]
    fn drawing_without_table_leaves_state_alone() {
        let mut state = AppState::default();
        render(&mut state, 1);
        assert!(state.table.is_none());
        assert!(state.scatter().is_empty());
    }
}
