//! Viewer Application
//! One window, one chart, a save action.

use crate::charts::{ChartContent, ChartPlotter, StaticChartRenderer};
use crate::config::AnalysisSettings;
use egui::{Color32, RichText};

/// Pixel size of exported PNG snapshots.
const EXPORT_SIZE: (u32, u32) = (1200, 800);

/// Single-chart viewer window.
pub struct ViewerApp {
    content: ChartContent,
    status: String,
}

impl ViewerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, content: ChartContent) -> Self {
        Self {
            content,
            status: "Ready".to_string(),
        }
    }

    /// Ask for a target path, render the PNG and its metadata sidecar.
    fn handle_save(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("{}.png", self.content.slug()))
            .save_file()
        else {
            return; // User cancelled
        };

        let result = StaticChartRenderer::render_png(
            &self.content,
            &path,
            EXPORT_SIZE.0,
            EXPORT_SIZE.1,
        )
        .and_then(|()| {
            StaticChartRenderer::write_metadata(self.content.meta(), &path.with_extension("json"))
        });

        match result {
            Ok(()) => {
                self.status = format!("Saved {}", path.display());
                let _ = open::that(&path);
            }
            Err(e) => self.status = format!("Error: {}", e),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(self.content.title()).size(16.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("💾 Save PNG").clicked() {
                        self.handle_save();
                    }

                    let status_color = if self.status.contains("Error") {
                        Color32::from_rgb(220, 53, 69)
                    } else if self.status.contains("Saved") {
                        Color32::from_rgb(40, 167, 69)
                    } else {
                        Color32::GRAY
                    };
                    ui.label(RichText::new(&self.status).size(11.0).color(status_color));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw(ui, &self.content);
        });
    }
}

/// Open a viewer window for the given chart and block until it closes.
pub fn run_viewer(
    app_name: &str,
    settings: &AnalysisSettings,
    content: ChartContent,
) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([640.0, 480.0])
            .with_title(app_name),
        ..Default::default()
    };

    eframe::run_native(
        app_name,
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, content)))),
    )
}
