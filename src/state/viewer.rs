//! Selected-sample state of the detail pane.
//!
//! Every selection change bumps a generation counter. Fetches are dispatched
//! with a [`FetchTicket`] holding the name and generation at dispatch time,
//! and a result is applied only while its ticket still matches. A response
//! that arrives after the user moved on is dropped.

use chrono::{DateTime, Utc};

use crate::data::datetime;
use crate::data::error::ApiError;
use crate::data::store::Measurement;
use crate::processing::chart_data::ChartData;
use crate::processing::statistics::Summary;

/// Identifies the selection a fetch was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub name: String,
    pub generation: u64,
}

/// A fetched measurement together with everything derived from it.
#[derive(Debug, Clone)]
pub struct LoadedMeasurement {
    pub values: Vec<f64>,
    pub captured_at: Option<DateTime<Utc>>,
    pub summary: Option<Summary>,
    pub chart: ChartData,
}

impl LoadedMeasurement {
    pub fn new(measurement: Measurement) -> Self {
        let summary = Summary::compute(&measurement.values);
        let chart = ChartData::from_values(&measurement.values);
        Self {
            values: measurement.values,
            captured_at: measurement.captured_at,
            summary,
            chart,
        }
    }

    /// Capture time in the local zone, or `None` when the store sent none.
    pub fn captured_at_display(&self) -> Option<String> {
        self.captured_at.as_ref().map(datetime::format_local)
    }

    /// Raw values as a comma-separated line.
    pub fn values_line(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default)]
pub enum ViewerPhase {
    #[default]
    Idle,
    Loading,
    Ready(LoadedMeasurement),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Viewer {
    selection: Option<String>,
    generation: u64,
    phase: ViewerPhase,
}

impl Viewer {
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn phase(&self) -> &ViewerPhase {
        &self.phase
    }

    #[cfg(test)]
    pub fn measurement(&self) -> Option<&LoadedMeasurement> {
        match &self.phase {
            ViewerPhase::Ready(m) => Some(m),
            _ => None,
        }
    }

    /// Change the selection. Returns the ticket to fetch with, or `None` when
    /// nothing needs fetching (deselect, or the name is already selected).
    pub fn select(&mut self, name: Option<String>) -> Option<FetchTicket> {
        if name == self.selection {
            return None;
        }
        self.generation += 1;
        self.selection = name;
        match &self.selection {
            Some(name) => {
                self.phase = ViewerPhase::Loading;
                Some(FetchTicket {
                    name: name.clone(),
                    generation: self.generation,
                })
            }
            None => {
                self.phase = ViewerPhase::Idle;
                None
            }
        }
    }

    /// Follow a rename of the selected sample. Returns the re-fetch ticket
    /// when `old_name` was selected.
    pub fn follow_rename(&mut self, old_name: &str, new_name: &str) -> Option<FetchTicket> {
        if self.selection.as_deref() == Some(old_name) {
            self.select(Some(new_name.to_string()))
        } else {
            None
        }
    }

    /// Drop the selection and displayed measurement if `name` was selected.
    pub fn forget(&mut self, name: &str) {
        if self.selection.as_deref() == Some(name) {
            self.select(None);
        }
    }

    /// Apply a finished fetch. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<Measurement, ApiError>) -> bool {
        let current = ticket.generation == self.generation
            && self.selection.as_deref() == Some(ticket.name.as_str());
        if !current {
            tracing::debug!(
                "Discarding stale fetch for '{}' (generation {}, current {})",
                ticket.name,
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.phase = match result {
            Ok(measurement) => ViewerPhase::Ready(LoadedMeasurement::new(measurement)),
            Err(e) => {
                tracing::error!("Error fetching measurement '{}': {e}", ticket.name);
                ViewerPhase::Failed(format!("Could not load '{}'", ticket.name))
            }
        };
        true
    }
}
