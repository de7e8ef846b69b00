use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui};

use crate::camera::OrbitCamera;
use crate::color::{IN_PIT_COLOR, OUT_PIT_COLOR, ProfitRamp, UNCLASSIFIED_COLOR};
use crate::data::classify::{self, PROFIT_COLUMN};
use crate::data::model::{AttrValue, Block};
use crate::state::AppState;

/// Marker radii in screen points: in-pit blocks are drawn larger.
const IN_PIT_RADIUS: f32 = 3.0;
const OUT_PIT_RADIUS: f32 = 2.0;

// ---------------------------------------------------------------------------
// 3D block-model scene (central panel)
// ---------------------------------------------------------------------------

/// Render the block model as a 3D scatter in the central panel.
///
/// Drag rotates the orbit camera, scroll zooms.  After classification the
/// blocks are partitioned into the "In Pit" and "Out of Pit" series; before
/// it, everything is drawn as one neutral series.
pub fn upl_scene(ui: &mut Ui, state: &mut AppState) {
    let Some(model) = &state.model else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a block model to begin  (File → Open…)");
        });
        return;
    };

    if model.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The loaded block model contains no blocks");
        });
        return;
    }

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
    let rect = response.rect;

    // ---- Camera interaction ----
    if response.dragged() {
        let delta = response.drag_delta();
        state.camera.orbit(delta.x, delta.y);
    }
    if response.hovered() {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll != 0.0 {
            state.camera.zoom_by((scroll * 0.002).exp());
        }
    }

    let camera = state.camera;

    // ---- Fit the model into the viewport ----
    let (min, max) = match model.bounds() {
        Some(b) => b,
        None => return,
    };
    let center = [
        (min[0] + max[0]) / 2.0,
        (min[1] + max[1]) / 2.0,
        (min[2] + max[2]) / 2.0,
    ];
    let half_diag = (0..3)
        .map(|a| ((max[a] - min[a]) / 2.0).powi(2))
        .sum::<f64>()
        .sqrt() as f32;
    let fit = 0.45 * rect.width().min(rect.height()) / half_diag.max(1e-6);
    let scale = fit * camera.zoom;

    let classified = classify::is_classified(model);
    let ramp = if state.color_by_profit && classified {
        ProfitRamp::from_profits(model.blocks.iter().filter_map(block_profit))
    } else {
        None
    };

    // ---- Project and partition ----
    struct Marker {
        depth: f32,
        pos: Pos2,
        color: Color32,
        radius: f32,
    }

    let mut markers = Vec::with_capacity(model.len());
    let mut in_pit_count = 0usize;
    let mut out_pit_count = 0usize;

    for block in &model.blocks {
        let projected = camera.project(block.position, center);
        let pos = Pos2::new(
            rect.center().x + projected.x * scale,
            rect.center().y - projected.y * scale,
        );

        let (color, radius) = match classify::in_pit(block) {
            Some(true) => {
                in_pit_count += 1;
                (marker_color(block, &ramp, IN_PIT_COLOR), IN_PIT_RADIUS)
            }
            Some(false) => {
                out_pit_count += 1;
                (marker_color(block, &ramp, OUT_PIT_COLOR), OUT_PIT_RADIUS)
            }
            None => (UNCLASSIFIED_COLOR, OUT_PIT_RADIUS),
        };

        markers.push(Marker {
            depth: projected.depth,
            pos,
            color,
            radius,
        });
    }

    // Far-to-near so closer markers paint over farther ones.
    markers.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    for m in &markers {
        painter.circle_filled(m.pos, m.radius, m.color);
    }

    // ---- Overlays ----
    painter.text(
        Pos2::new(rect.center().x, rect.top() + 8.0),
        Align2::CENTER_TOP,
        "Ultimate Pit Limit Visualization",
        FontId::proportional(16.0),
        ui.visuals().strong_text_color(),
    );

    if classified {
        legend(&painter, rect, ui, in_pit_count, out_pit_count);
    }
    axis_triad(&painter, rect, &camera);
}

/// Profit cell of a block as `f64`, when present.
fn block_profit(block: &Block) -> Option<f64> {
    match block.attr(PROFIT_COLUMN) {
        Some(AttrValue::Float(p)) => Some(*p),
        _ => None,
    }
}

fn marker_color(block: &Block, ramp: &Option<ProfitRamp>, series_color: Color32) -> Color32 {
    match ramp {
        Some(r) => r.color_for(block_profit(block).unwrap_or(f64::NAN)),
        None => series_color,
    }
}

/// Two-entry legend with per-series block counts.
fn legend(
    painter: &eframe::egui::Painter,
    rect: Rect,
    ui: &Ui,
    in_pit_count: usize,
    out_pit_count: usize,
) {
    let entries = [
        (IN_PIT_COLOR, IN_PIT_RADIUS, "In Pit", in_pit_count),
        (OUT_PIT_COLOR, OUT_PIT_RADIUS, "Out of Pit", out_pit_count),
    ];
    let mut y = rect.top() + 34.0;
    for (color, radius, name, count) in entries {
        let swatch = Pos2::new(rect.left() + 14.0, y);
        painter.circle_filled(swatch, radius, color);
        painter.text(
            Pos2::new(rect.left() + 24.0, y),
            Align2::LEFT_CENTER,
            format!("{name} ({count})"),
            FontId::proportional(13.0),
            ui.visuals().text_color(),
        );
        y += 18.0;
    }
}

/// Small x/y/z orientation triad in the bottom-left corner.
fn axis_triad(painter: &eframe::egui::Painter, rect: Rect, camera: &OrbitCamera) {
    let origin = Pos2::new(rect.left() + 40.0, rect.bottom() - 40.0);
    let axes = [
        ([1.0, 0.0, 0.0], "x", Color32::from_rgb(200, 80, 80)),
        ([0.0, 1.0, 0.0], "y", Color32::from_rgb(80, 170, 80)),
        ([0.0, 0.0, 1.0], "z", Color32::from_rgb(90, 110, 220)),
    ];
    for (axis, label, color) in axes {
        let p = camera.project(axis, [0.0; 3]);
        let tip = Pos2::new(origin.x + p.x * 26.0, origin.y - p.y * 26.0);
        painter.line_segment([origin, tip], Stroke::new(1.5, color));
        painter.text(
            tip,
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(11.0),
            color,
        );
    }
}
