//! Desktop host: step panel, map canvas and keyboard shortcuts

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use siteplan_core::Step;

use crate::config::{SharedConfig, UiTheme, create_shared_config};
use crate::map::{MapCanvas, MapView};
use crate::persistence::JsonFileSink;
use crate::state::SitePlanner;

type DesktopPlanner = SitePlanner<MapCanvas, JsonFileSink>;

/// Site planner application
pub struct SitePlannerApp {
    config: SharedConfig,
    planner: DesktopPlanner,
    /// The map canvas has been laid out at least once
    surface_ready: bool,
    /// Last persistence failure, shown until the next successful save
    save_error: Option<String>,
}

impl SitePlannerApp {
    /// Start the planner, resuming the plan file at `resume` if given
    pub fn with_plan(cc: &eframe::CreationContext<'_>, resume: Option<PathBuf>) -> Self {
        let config = create_shared_config();
        let (theme, font_size) = {
            let guard = config.read();
            (guard.config().ui.theme, guard.config().ui.font_size)
        };

        cc.egui_ctx.set_visuals(match theme {
            UiTheme::Light => egui::Visuals::light(),
            UiTheme::Dark => egui::Visuals::dark(),
        });
        if (font_size - 1.0).abs() > f32::EPSILON {
            cc.egui_ctx.style_mut(|style| {
                for font in style.text_styles.values_mut() {
                    font.size *= font_size;
                }
            });
        }

        let planner = Self::create_planner(&config, resume.as_deref());
        Self {
            config,
            planner,
            surface_ready: false,
            save_error: None,
        }
    }

    /// Fresh planner writing a new plan file, or one resumed from `resume`
    fn create_planner(config: &SharedConfig, resume: Option<&Path>) -> DesktopPlanner {
        let guard = config.read();
        let cfg = guard.config();
        let canvas = MapCanvas::new(
            MapView::new(cfg.map.center, cfg.map.zoom),
            cfg.planner.notice_duration(),
        );
        let settings = cfg.planner.to_settings();

        let resumed = resume.and_then(|path| match JsonFileSink::resume(path) {
            Ok(resumed) => Some(resumed),
            Err(e) => {
                tracing::warn!("Could not resume {:?}: {}", path, e);
                None
            }
        });
        let planner = match resumed {
            Some((sink, data)) => SitePlanner::restore(data, canvas, sink, settings),
            None => {
                let sink = JsonFileSink::new(cfg.planner.resolved_save_dir());
                SitePlanner::new(canvas, sink, settings)
            }
        };

        tracing::info!(
            session = %planner.session_id(),
            "Planning session started, writing to {:?}",
            planner.sink().path()
        );
        planner
    }

    /// Replace the current planner; the new canvas re-announces readiness
    fn replace_planner(&mut self, resume: Option<&Path>) {
        self.planner = Self::create_planner(&self.config, resume);
        self.surface_ready = false;
        self.save_error = None;
    }

    fn open_plan_dialog(&mut self) {
        let dir = self.config.read().config().planner.resolved_save_dir();
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Plan files", &["json"])
            .set_directory(dir)
            .pick_file()
        {
            self.replace_planner(Some(&path));
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (redo_shift, undo, redo) = ctx.input_mut(|i| {
            let redo_shift =
                i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Z);
            let undo = i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z);
            let redo = i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y);
            (redo_shift, undo, redo)
        });

        if undo {
            self.planner.on_undo();
        } else if redo || redo_shift {
            self.planner.on_redo();
        }
    }

    fn save(&mut self) {
        self.save_error = self.planner.on_save().err().map(|e| e.to_string());
    }

    fn step_button(ui: &mut egui::Ui, step: &Step) -> bool {
        let check = if step.completed { " ✓" } else { "" };
        let count = step.count().map(|c| format!(" ({})", c)).unwrap_or_default();
        let label = format!(
            "{} {}. {}{}{}",
            step.kind.icon(),
            step.id(),
            step.kind.title(),
            count,
            check
        );

        let clicked = ui.selectable_label(step.active, label).clicked();
        ui.weak(step.kind.description());
        ui.add_space(4.0);
        clicked
    }

    fn steps_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Site Planning");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("📂").on_hover_text("Open plan...").clicked() {
                    self.open_plan_dialog();
                }
                if ui.button("🗋").on_hover_text("New plan").clicked() {
                    self.replace_planner(None);
                }
            });
        });
        ui.separator();

        let steps = *self.planner.steps().steps();
        let mut selected = None;
        for step in &steps {
            if Self::step_button(ui, step) {
                selected = Some(step.id());
            }
        }
        if let Some(id) = selected
            && let Err(e) = self.planner.on_step_selected(id)
        {
            tracing::warn!("Step selection failed: {}", e);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("⟲ Undo").on_hover_text("Ctrl+Z").clicked() {
                self.planner.on_undo();
            }
            if ui.button("⟳ Redo").on_hover_text("Ctrl+Y").clicked() {
                self.planner.on_redo();
            }
            if ui.button("💾 Save").clicked() {
                self.save();
            }
        });

        if self.planner.steps().is_finished() {
            ui.label("All steps completed.");
        }
        if let Some(err) = &self.save_error {
            ui.colored_label(ui.visuals().error_fg_color, format!("Save failed: {}", err));
        }

        ui.separator();
        ui.label(self.planner.data().summary().to_string());
        ui.weak(format!("Mode: {}", self.planner.mode().name()));

        ui.separator();
        let mut show_labels = self.planner.settings().show_distance_labels;
        if ui.checkbox(&mut show_labels, "Show distance labels").changed() {
            let mut settings = self.planner.settings().clone();
            settings.show_distance_labels = show_labels;
            self.planner.set_settings(settings);

            let mut config = self.config.write();
            config.config_mut().planner.show_distance_labels = show_labels;
            if let Err(e) = config.save() {
                tracing::warn!("Failed to save config: {}", e);
            }
        }
    }

    fn map_panel(&mut self, ui: &mut egui::Ui, now: Instant) {
        let response = self.planner.renderer_mut().show(ui);

        if !self.surface_ready {
            self.surface_ready = true;
            self.planner.on_surface_ready();

            let (center, zoom) = {
                let config = self.config.read();
                (config.config().map.center, config.config().map.zoom)
            };
            if self.planner.data().is_empty() {
                self.planner.focus_location(center, zoom, "📍");
            }
            ui.ctx().request_repaint();
        }

        // Keep drawing suspended for as long as the secondary drag lasts
        if response.secondary_clicked || response.secondary_dragging {
            self.planner.on_secondary_click(now);
        }
        if let Some(point) = response.clicked {
            // Ignored clicks are logged by the planner
            let _ = self.planner.on_map_click(point);
        }
    }

    /// Earliest timed transition, so the UI wakes up without input
    fn next_repaint(&self, now: Instant) -> Option<Duration> {
        let pan = self.planner.next_deadline(now);
        let notice = self.planner.renderer().notice_remaining(now);
        match (pan, notice) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl eframe::App for SitePlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.planner.tick(now);
        self.handle_shortcuts(ctx);

        egui::SidePanel::left("steps_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| self.steps_panel(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.map_panel(ui, now));

        if let Some(delay) = self.next_repaint(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
