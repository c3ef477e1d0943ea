use crate::data::endpoint::{MAX_COUNT, MIN_COUNT};
use crate::state::sample_list::SampleList;
use crate::state::theme::Theme;

/// Actions the sidebar can request from the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    None,
    Create,
    Select(String),
    BeginEdit(String),
    SubmitRename,
    BeginDelete(String),
    ConfirmDelete,
    CancelRowMode,
}

/// Small square icon button used on list rows.
fn icon_btn(ui: &mut egui::Ui, icon: &str, hover: &str, enabled: bool) -> bool {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(icon).color(egui::Color32::WHITE))
            .frame(false)
            .min_size(egui::vec2(22.0, 22.0)),
    )
    .on_hover_text(hover)
    .clicked()
}

/// Render the sample list sidebar. Returns the action the user requested
/// this frame, if any.
pub fn show_sidebar(
    ui: &mut egui::Ui,
    samples: &mut SampleList,
    selected: Option<&str>,
    theme: &Theme,
) -> SidebarAction {
    let mut action = SidebarAction::None;
    let busy = samples.is_busy();

    ui.heading(egui::RichText::new("Measurement History").color(egui::Color32::WHITE));
    ui.add_space(8.0);

    // --- Create row ---
    let name_resp = ui.add(
        egui::TextEdit::singleline(&mut samples.new_name)
            .hint_text("Name of the new measurement")
            .desired_width(f32::INFINITY),
    );
    let submitted = name_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Values").color(egui::Color32::WHITE));
        ui.add(egui::DragValue::new(&mut samples.new_count).range(MIN_COUNT..=MAX_COUNT));
        let create = ui.add_enabled(
            !busy,
            egui::Button::new(egui::RichText::new("Create measurement").strong())
                .min_size(egui::vec2(ui.available_width(), 28.0)),
        );
        if create.clicked() || (submitted && !busy) {
            action = SidebarAction::Create;
        }
    });

    ui.add_space(8.0);
    ui.separator();

    // --- Name list ---
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            // Names are cloned so the row closures can borrow the edit buffer.
            let names: Vec<String> = samples.names().to_vec();
            for name in &names {
                ui.horizontal(|ui| {
                    if let Some(buffer) = samples.row_mode.edit_buffer_mut(name) {
                        ui.add(
                            egui::TextEdit::singleline(buffer)
                                .hint_text("New name")
                                .desired_width(ui.available_width() - 56.0),
                        );
                        if icon_btn(ui, "✔", "Save new name", !busy) {
                            action = SidebarAction::SubmitRename;
                        }
                        if icon_btn(ui, "✖", "Cancel", true) {
                            action = SidebarAction::CancelRowMode;
                        }
                        return;
                    }

                    let is_selected = selected == Some(name.as_str());
                    let mut text = egui::RichText::new(name).color(egui::Color32::WHITE);
                    if is_selected {
                        text = text.underline().strong();
                    }
                    let label = ui.add(
                        egui::Label::new(text)
                            .sense(egui::Sense::click())
                            .truncate(),
                    );
                    if label.clicked() {
                        action = SidebarAction::Select(name.clone());
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if samples.row_mode.is_confirming_delete(name) {
                            if icon_btn(ui, "✖", "Keep this sample", true) {
                                action = SidebarAction::CancelRowMode;
                            }
                            if icon_btn(ui, "✔", "Confirm delete", !busy) {
                                action = SidebarAction::ConfirmDelete;
                            }
                        } else {
                            if icon_btn(ui, "🗑", "Delete sample", !busy) {
                                action = SidebarAction::BeginDelete(name.clone());
                            }
                            if icon_btn(ui, "✏", "Rename sample", !busy) {
                                action = SidebarAction::BeginEdit(name.clone());
                            }
                        }
                    });
                });
            }

            if names.is_empty() {
                ui.label(egui::RichText::new("No measurements yet.").color(theme.muted_text()));
            }
        });

    action
}
