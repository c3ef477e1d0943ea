use egui::{Color32, Visuals};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    /// Sidebar background.
    pub fn sidebar_fill(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(21, 48, 84),
            Theme::Light => Color32::from_rgb(25, 118, 210),
        }
    }

    pub fn bar_fill(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(75, 192, 192, 128)
    }

    pub fn bar_stroke(&self) -> Color32 {
        Color32::from_rgb(75, 192, 192)
    }

    pub fn muted_text(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_gray(140),
            Theme::Light => Color32::from_gray(119),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}
