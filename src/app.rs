use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, scene};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct BlockPitApp {
    pub state: AppState,
}

impl eframe::App for BlockPitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: column selection + UPL trigger ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: block model preview ----
        if let Some(model) = &self.state.model {
            egui::TopBottomPanel::bottom("preview_panel")
                .resizable(true)
                .show(ctx, |ui| {
                    panels::preview_panel(ui, model);
                });
        }

        // ---- Central panel: 3D scene ----
        egui::CentralPanel::default().show(ctx, |ui| {
            scene::upl_scene(ui, &mut self.state);
        });
    }
}
