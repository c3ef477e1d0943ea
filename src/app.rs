use std::sync::Arc;
use std::time::Instant;

use eframe::egui;

use crate::config::AppConfig;
use crate::data::store::SampleStore;
use crate::state::app_state::AppState;
use crate::state::command::Command;
use crate::tasks::TaskRunner;
use crate::ui::measurement_panel;
use crate::ui::sidebar::{self, SidebarAction};
use crate::ui::toast;

/// The main SampleScope application.
pub struct SampleScopeApp {
    pub state: AppState,
    tasks: TaskRunner,
}

impl SampleScopeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        store: Arc<dyn SampleStore>,
    ) -> Self {
        let state = AppState::new(config);

        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(15.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::proportional(22.0),
        );
        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);
        ctx.set_visuals(state.theme.visuals());

        let mut tasks = TaskRunner::new(store);
        tasks.dispatch_all(state.startup());

        Self { state, tasks }
    }

    fn handle_sidebar(&mut self, action: SidebarAction) {
        let command = match action {
            SidebarAction::None => None,
            SidebarAction::Create => self.state.samples.request_create(),
            SidebarAction::Select(name) => self.state.select(Some(name)),
            SidebarAction::BeginEdit(name) => {
                self.state.samples.row_mode.begin_edit(&name);
                None
            }
            SidebarAction::BeginDelete(name) => {
                self.state.samples.row_mode.begin_delete(&name);
                None
            }
            SidebarAction::CancelRowMode => {
                self.state.samples.row_mode.cancel();
                None
            }
            SidebarAction::SubmitRename => self.state.samples.request_rename(),
            SidebarAction::ConfirmDelete => self.state.samples.request_delete(),
        };
        if let Some(command) = command {
            self.dispatch(command);
        }
    }

    fn dispatch(&mut self, command: Command) {
        self.tasks.dispatch(command);
    }
}

impl eframe::App for SampleScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(self.state.theme.visuals());

        // ------------------------------------------------------------------
        // 0. Fold finished requests into state
        // ------------------------------------------------------------------
        let now = Instant::now();
        for outcome in self.tasks.drain() {
            let follow_up = self.state.apply(outcome, now);
            self.tasks.dispatch_all(follow_up);
        }
        if let Some(remaining) = self.state.notification.tick(now) {
            ctx.request_repaint_after(remaining);
        }

        // ------------------------------------------------------------------
        // 1. Header
        // ------------------------------------------------------------------
        egui::TopBottomPanel::top("header")
            .exact_height(40.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.heading(egui::RichText::new("SampleScope").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme = self.state.theme;
                        if ui
                            .button(format!("Theme: {}", theme.label()))
                            .on_hover_text("Toggle dark/light")
                            .clicked()
                        {
                            self.state.theme = theme.toggle();
                        }
                    });
                });
            });

        // ------------------------------------------------------------------
        // 2. Sample list
        // ------------------------------------------------------------------
        let theme = self.state.theme;
        let action = egui::SidePanel::left("samples")
            .resizable(false)
            .exact_width(300.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .fill(theme.sidebar_fill())
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                sidebar::show_sidebar(
                    ui,
                    &mut self.state.samples,
                    self.state.viewer.selection(),
                    &theme,
                )
            })
            .inner;
        self.handle_sidebar(action);

        // ------------------------------------------------------------------
        // 3. Detail pane
        // ------------------------------------------------------------------
        egui::CentralPanel::default().show(ctx, |ui| {
            measurement_panel::show_measurement_panel(ui, &self.state.viewer, &theme);
        });

        toast::show_toast(ctx, &mut self.state.notification);

        // Keep polling while requests are outstanding.
        if self.tasks.has_pending() {
            ctx.request_repaint();
        }
    }
}
