use crate::data::endpoint::SampleCount;
use crate::data::error::ApiError;
use crate::data::store::{Measurement, SampleStore};
use crate::state::viewer::FetchTicket;

/// A request against the sample store, produced by a state transition and
/// executed off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadNames,
    FetchSample(FetchTicket),
    Create { name: String, count: SampleCount },
    Rename { old_name: String, new_name: String },
    Delete { name: String },
}

/// The finished result of a [`Command`], applied back on the UI thread.
#[derive(Debug)]
pub enum Outcome {
    NamesLoaded(Result<Vec<String>, ApiError>),
    SampleFetched {
        ticket: FetchTicket,
        result: Result<Measurement, ApiError>,
    },
    Created {
        name: String,
        result: Result<(), ApiError>,
    },
    Renamed {
        old_name: String,
        new_name: String,
        result: Result<(), ApiError>,
    },
    Deleted {
        name: String,
        result: Result<(), ApiError>,
    },
}

impl Command {
    /// Mutations are the requests whose controls are locked while in flight.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Create { .. } | Command::Rename { .. } | Command::Delete { .. }
        )
    }

    /// The outcome reported when the command could not run to completion.
    pub fn into_failure(self, error: ApiError) -> Outcome {
        match self {
            Command::LoadNames => Outcome::NamesLoaded(Err(error)),
            Command::FetchSample(ticket) => Outcome::SampleFetched {
                ticket,
                result: Err(error),
            },
            Command::Create { name, .. } => Outcome::Created {
                name,
                result: Err(error),
            },
            Command::Rename { old_name, new_name } => Outcome::Renamed {
                old_name,
                new_name,
                result: Err(error),
            },
            Command::Delete { name } => Outcome::Deleted {
                name,
                result: Err(error),
            },
        }
    }

    /// Run the command against `store`. Blocks for the duration of the request.
    pub fn execute(self, store: &dyn SampleStore) -> Outcome {
        match self {
            Command::LoadNames => Outcome::NamesLoaded(store.list_names()),
            Command::FetchSample(ticket) => {
                let result = store.fetch_sample(&ticket.name);
                Outcome::SampleFetched { ticket, result }
            }
            Command::Create { name, count } => {
                let result = store.create_sample(&name, count);
                Outcome::Created { name, result }
            }
            Command::Rename { old_name, new_name } => {
                let result = store.rename_sample(&old_name, &new_name);
                Outcome::Renamed {
                    old_name,
                    new_name,
                    result,
                }
            }
            Command::Delete { name } => {
                let result = store.delete_sample(&name);
                Outcome::Deleted { name, result }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;

    /// In-memory store recording every call it receives.
    #[derive(Default)]
    pub struct FakeStore {
        pub samples: Mutex<BTreeMap<String, Vec<f64>>>,
        pub calls: Mutex<Vec<String>>,
    }

    impl FakeStore {
        pub fn with(names: &[&str]) -> Self {
            let store = Self::default();
            if let Ok(mut samples) = store.samples.lock() {
                for name in names {
                    samples.insert(name.to_string(), vec![1.0, 2.0, 3.0]);
                }
            }
            store
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        fn record(&self, call: String) {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
        }

        fn reject(message: &str) -> ApiError {
            ApiError::Rejected {
                status: 400,
                message: Some(message.to_string()),
            }
        }
    }

    impl SampleStore for FakeStore {
        fn list_names(&self) -> Result<Vec<String>, ApiError> {
            self.record("list".into());
            let samples = self.samples.lock().map_err(|_| Self::reject("poisoned"))?;
            Ok(samples.keys().cloned().collect())
        }

        fn fetch_sample(&self, name: &str) -> Result<Measurement, ApiError> {
            self.record(format!("get {name}"));
            let samples = self.samples.lock().map_err(|_| Self::reject("poisoned"))?;
            let values = samples
                .get(name)
                .cloned()
                .ok_or_else(|| Self::reject("not found"))?;
            Ok(Measurement {
                values,
                captured_at: None,
            })
        }

        fn create_sample(&self, name: &str, count: SampleCount) -> Result<(), ApiError> {
            self.record(format!("create {name} {}", count.get()));
            let mut samples = self.samples.lock().map_err(|_| Self::reject("poisoned"))?;
            if samples.contains_key(name) {
                return Err(Self::reject("Sample already exists"));
            }
            samples.insert(name.to_string(), (0..count.get()).map(f64::from).collect());
            Ok(())
        }

        fn rename_sample(&self, old_name: &str, new_name: &str) -> Result<(), ApiError> {
            self.record(format!("rename {old_name} {new_name}"));
            let mut samples = self.samples.lock().map_err(|_| Self::reject("poisoned"))?;
            let values = samples
                .remove(old_name)
                .ok_or_else(|| Self::reject("not found"))?;
            samples.insert(new_name.to_string(), values);
            Ok(())
        }

        fn delete_sample(&self, name: &str) -> Result<(), ApiError> {
            self.record(format!("delete {name}"));
            let mut samples = self.samples.lock().map_err(|_| Self::reject("poisoned"))?;
            samples
                .remove(name)
                .map(|_| ())
                .ok_or_else(|| Self::reject("not found"))
        }
    }
}
