use crate::state::notification::Notification;

/// Bottom-center toast for the current notification.
pub fn show_toast(ctx: &egui::Context, notification: &mut Notification) {
    if !notification.is_visible() {
        return;
    }

    egui::Area::new(egui::Id::new("notification_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .inner_margin(egui::Margin::symmetric(14, 8))
                .corner_radius(egui::CornerRadius::same(6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("ℹ").strong());
                        ui.label(notification.message());
                        if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                            notification.dismiss();
                        }
                    });
                });
        });
}
