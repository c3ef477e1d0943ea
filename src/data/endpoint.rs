/// Smallest and largest number of values the store will generate for one sample.
pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 50;

/// Number of values to generate for a new sample, always within
/// `MIN_COUNT..=MAX_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCount(u32);

impl SampleCount {
    pub fn clamped(requested: u32) -> Self {
        Self(requested.clamp(MIN_COUNT, MAX_COUNT))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for SampleCount {
    fn default() -> Self {
        Self(5)
    }
}

/// URL builder for the single sample resource. All operations share the base
/// path and differ only in method and query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn list(&self) -> String {
        self.base.clone()
    }

    pub fn sample(&self, name: &str) -> String {
        self.with_query(&[("filename", name)])
    }

    pub fn create(&self, name: &str, count: SampleCount) -> String {
        let times = count.get().to_string();
        self.with_query(&[("filename", name), ("times", &times)])
    }

    pub fn rename(&self, old_name: &str, new_name: &str) -> String {
        self.with_query(&[("oldfilename", old_name), ("newfilename", new_name)])
    }

    pub fn delete(&self, name: &str) -> String {
        self.sample(name)
    }

    fn with_query(&self, params: &[(&str, &str)]) -> String {
        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.base)
    }
}
