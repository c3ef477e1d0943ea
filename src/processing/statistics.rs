/// Summary statistics for one sample's values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation (divisor is the value count, not count - 1).
    pub std_dev: f64,
}

impl Summary {
    /// Compute the summary of `values`. Returns `None` for an empty slice.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Rounding in the sum can push the mean just past the extremes
        // (e.g. three 0.1s), so pin it back into [min, max].
        let mean = (values.iter().sum::<f64>() / count as f64).clamp(min, max);

        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        let std_dev = variance.sqrt();

        Some(Summary {
            min,
            max,
            mean,
            std_dev,
        })
    }

    /// Label/value rows for the summary panel. Max and min are shown as
    /// received; mean and deviation are rounded to two decimals.
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Max", format!("{}", self.max)),
            ("Min", format!("{}", self.min)),
            ("Mean", format!("{:.2}", self.mean)),
            ("Std Dev", format!("{:.2}", self.std_dev)),
        ]
    }
}
