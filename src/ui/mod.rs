pub mod measurement_panel;
pub mod sidebar;
pub mod toast;
