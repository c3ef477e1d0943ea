pub mod app_state;
pub mod command;
pub mod notification;
pub mod row_mode;
pub mod sample_list;
pub mod theme;
pub mod viewer;
