use std::time::Instant;

use cs_subscriber::SnapshotSlot;
use egui_plot::{Legend, Line, Plot};

use crate::{PlotSeries, Renderer, TickTimer};

/// The plotting window: one line plot per tracked covariance entry.
pub struct CovarianceApp {
    slot: SnapshotSlot,
    renderer: Renderer,
    timer: TickTimer,
}

impl CovarianceApp {
    pub fn new(slot: SnapshotSlot, renderer: Renderer, timer: TickTimer) -> Self {
        Self {
            slot,
            renderer,
            timer,
        }
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Take a sample if one is due. Returns `true` if a sample was taken.
    pub fn tick_if_due(&mut self, now: Instant) -> bool {
        if !self.timer.poll(now) {
            return false;
        }

        let index = self.renderer.tick(self.slot.snapshot());
        cs_log::trace!("Took sample {index}");
        true
    }

    fn status_bar_ui(&self, ui: &mut egui::Ui) {
        let stats = self.slot.stats();
        ui.horizontal(|ui| {
            ui.label(format!("samples: {}", self.renderer.num_ticks()));
            ui.separator();
            ui.label(format!("messages: {}", stats.accepted));
            if stats.rejected > 0 {
                ui.separator();
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    format!("rejected: {}", stats.rejected),
                );
            }
            ui.separator();
            ui.label(format!("every {:?}", self.timer.period()));
        });
    }
}

fn series_plot_ui(ui: &mut egui::Ui, id: &str, name: &str, series: &PlotSeries) {
    ui.heading(name);
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("sample index")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(name, series.plot_points()));
        });
}

impl eframe::App for CovarianceApp {
    fn update(&mut self, egui_ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick_if_due(now);

        egui::TopBottomPanel::bottom("status_bar").show(egui_ctx, |ui| {
            self.status_bar_ui(ui);
        });

        egui::CentralPanel::default().show(egui_ctx, |ui| {
            ui.columns(2, |columns| {
                series_plot_ui(
                    &mut columns[0],
                    "value_a_plot",
                    "value_a",
                    self.renderer.series_a(),
                );
                series_plot_ui(
                    &mut columns[1],
                    "value_b_plot",
                    "value_b",
                    self.renderer.series_b(),
                );
            });
        });

        egui_ctx.request_repaint_after(self.timer.until_next(Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn samples_only_when_due() {
        let start = Instant::now();
        let mut app = CovarianceApp::new(
            SnapshotSlot::new(),
            Renderer::default(),
            TickTimer::new(Duration::from_millis(500)),
        );

        assert!(app.tick_if_due(start));
        assert!(!app.tick_if_due(start + Duration::from_millis(10)));
        assert!(app.tick_if_due(start + Duration::from_millis(500)));

        assert_eq!(app.renderer().num_ticks(), 2);
        assert_eq!(app.renderer().series_a().last(), Some((1, 0.0)));
    }
}
