use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use crate::color::ColorMap;
use crate::data::aggregate::ChartData;
use crate::state::AppState;

/// Arc resolution of pie wedges, in radians per segment.
const ARC_STEP: f64 = TAU / 180.0;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// One drawable pie wedge on the unit circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub label: String,
    pub fraction: f64,
    /// Closed outline: centre, arc points, back to centre.
    pub outline: Vec<[f64; 2]>,
}

/// Lay out wedges clockwise from twelve o'clock. Zero-valued slices get no
/// wedge; an all-zero chart yields nothing.
pub fn pie_wedges(data: &ChartData) -> Vec<Wedge> {
    let total = data.total();
    if total == 0 {
        return Vec::new();
    }

    let mut start = FRAC_PI_2;
    let mut wedges = Vec::new();
    for slice in &data.slices {
        if slice.value == 0 {
            continue;
        }
        let fraction = slice.value as f64 / total as f64;
        let sweep = fraction * TAU;
        let segments = ((sweep / ARC_STEP).ceil() as usize).max(1);

        let mut outline = Vec::with_capacity(segments + 2);
        outline.push([0.0, 0.0]);
        for i in 0..=segments {
            let angle = start - sweep * i as f64 / segments as f64;
            outline.push([angle.cos(), angle.sin()]);
        }

        wedges.push(Wedge {
            label: slice.label.clone(),
            fraction,
            outline,
        });
        start -= sweep;
    }
    wedges
}

// ---------------------------------------------------------------------------
// Proportion chart
// ---------------------------------------------------------------------------

pub fn pie_chart(ui: &mut Ui, state: &AppState, height: f32) {
    ui.strong(state.pie_title());

    let data = state.pie();
    if data.is_empty() || data.total() == 0 {
        ui.label("No launches to display.");
        return;
    }

    let colors = ColorMap::ordered(data.slices.iter().map(|s| s.label.as_str()));

    Plot::new("success_pie_chart")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for wedge in pie_wedges(data) {
                let color = colors.color_for(&wedge.label);
                let points: PlotPoints = wedge.outline.into_iter().collect();
                let polygon = Polygon::new(points)
                    .name(format!("{} ({:.1}%)", wedge.label, wedge.fraction * 100.0))
                    .fill_color(color)
                    .stroke(Stroke::new(1.0, Color32::WHITE));
                plot_ui.polygon(polygon);
            }
        });
}

// ---------------------------------------------------------------------------
// Payload vs. outcome scatter chart
// ---------------------------------------------------------------------------

pub fn scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    ui.strong(state.scatter_title());

    // One series per booster category so the legend doubles as colour key.
    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for rec in state.scatter() {
        series
            .entry(rec.booster_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, f64::from(rec.outcome.class())]);
    }

    Plot::new("success_payload_scatter_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in series {
                let points: PlotPoints = points.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.category_colors.color_for(category))
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::Slice;

    fn chart(values: &[(&str, u64)]) -> ChartData {
        ChartData {
            slices: values.iter().map(|(l, v)| Slice::new(*l, *v)).collect(),
        }
    }

    #[test]
    fn wedges_cover_the_circle() {
        let wedges = pie_wedges(&chart(&[("A", 1), ("B", 3)]));
        assert_eq!(wedges.len(), 2);
        let sum: f64 = wedges.iter().map(|w| w.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((wedges[1].fraction - 0.75).abs() < 1e-12);
    }

    #[test]
    fn first_wedge_starts_at_top_and_runs_clockwise() {
        let wedges = pie_wedges(&chart(&[("Success", 1), ("Failed", 1)]));
        let outline = &wedges[0].outline;
        assert_eq!(outline[0], [0.0, 0.0]);
        let [x, y] = outline[1];
        assert!(x.abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
        // half circle clockwise from the top ends at the bottom
        let [x, y] = *outline.last().unwrap();
        assert!(x.abs() < 1e-9 && (y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_slices_are_skipped() {
        let wedges = pie_wedges(&chart(&[("VAFB SLC-4E", 0), ("KSC LC-39A", 10)]));
        assert_eq!(wedges.len(), 1);
        assert_eq!(wedges[0].label, "KSC LC-39A");
        assert!(pie_wedges(&chart(&[("A", 0)])).is_empty());
        assert!(pie_wedges(&ChartData::default()).is_empty());
    }
}
