/// Space left above the tallest bar so it is not clipped by the plot frame.
pub const Y_HEADROOM: f64 = 10.0;

/// One bar of the measurement chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    /// Position in the original value array; also the bar's x coordinate.
    pub index: usize,
    pub value: f64,
    /// Category label shown under the bar (the value itself).
    pub label: String,
}

/// Plot-ready bars and fixed y bounds derived from a sample's values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub bars: Vec<ChartBar>,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartData {
    pub fn from_values(values: &[f64]) -> Self {
        let bars = values
            .iter()
            .enumerate()
            .map(|(index, &value)| ChartBar {
                index,
                value,
                label: format!("{value}"),
            })
            .collect();

        let top = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let top = if top.is_finite() { top } else { 0.0 };

        Self {
            bars,
            y_min: 0.0,
            y_max: top + Y_HEADROOM,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// X range that shows every bar with half a slot of padding on each side.
    pub fn x_bounds(&self) -> (f64, f64) {
        (-0.5, self.bars.len().max(1) as f64 - 0.5)
    }

    /// Category label for the bar at x position `x`, if `x` falls on one.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        if x < 0.0 || x.fract() != 0.0 {
            return None;
        }
        self.bars.get(x as usize).map(|b| b.label.as_str())
    }
}
