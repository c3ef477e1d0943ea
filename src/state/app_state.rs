use std::time::Instant;

use crate::config::AppConfig;
use crate::state::command::{Command, Outcome};
use crate::state::notification::Notification;
use crate::state::sample_list::{Mutation, SampleList};
use crate::state::theme::Theme;
use crate::state::viewer::Viewer;

/// Everything the dashboard shows. Transitions return the store requests they
/// need; the caller dispatches them and feeds the outcomes back to [`apply`].
///
/// [`apply`]: AppState::apply
#[derive(Debug)]
pub struct AppState {
    pub samples: SampleList,
    pub viewer: Viewer,
    pub notification: Notification,
    pub theme: Theme,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            samples: SampleList::new(config.default_count),
            viewer: Viewer::default(),
            notification: Notification::new(config.notification_timeout),
            theme: Theme::default(),
        }
    }

    /// Requests to issue once at startup.
    pub fn startup(&self) -> Vec<Command> {
        vec![Command::LoadNames]
    }

    pub fn select(&mut self, name: Option<String>) -> Option<Command> {
        self.viewer.select(name).map(Command::FetchSample)
    }

    /// Fold a finished request into the state. Returns follow-up requests.
    pub fn apply(&mut self, outcome: Outcome, now: Instant) -> Vec<Command> {
        let mut follow_up = Vec::new();
        match outcome {
            Outcome::NamesLoaded(Ok(names)) => {
                tracing::info!("Loaded {} sample names", names.len());
                self.samples.replace_names(names);
            }
            Outcome::NamesLoaded(Err(e)) => {
                tracing::error!("Error fetching measurement names: {e}");
            }
            Outcome::SampleFetched { ticket, result } => {
                self.viewer.apply(&ticket, result);
            }
            Outcome::Created { name, result } => {
                let message = Mutation::Create.report(&result);
                if self.samples.apply_create(&name, result.is_ok()) {
                    tracing::info!("Created sample '{name}'");
                }
                self.notification.show(message, now);
            }
            Outcome::Renamed {
                old_name,
                new_name,
                result,
            } => {
                let message = Mutation::Rename.report(&result);
                if self.samples.apply_rename(&old_name, &new_name, result.is_ok()) {
                    tracing::info!("Renamed sample '{old_name}' to '{new_name}'");
                    if let Some(ticket) = self.viewer.follow_rename(&old_name, &new_name) {
                        follow_up.push(Command::FetchSample(ticket));
                    }
                }
                self.notification.show(message, now);
            }
            Outcome::Deleted { name, result } => {
                let message = Mutation::Delete.report(&result);
                if self.samples.apply_delete(&name, result.is_ok()) {
                    tracing::info!("Deleted sample '{name}'");
                    self.viewer.forget(&name);
                }
                self.notification.show(message, now);
            }
        }
        follow_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::ApiError;
    use crate::data::store::{Measurement, SampleStore};
    use crate::state::command::fake::FakeStore;
    use crate::state::row_mode::RowMode;
    use crate::state::viewer::ViewerPhase;

    fn state() -> AppState {
        AppState::new(&AppConfig::default())
    }

    /// Execute commands synchronously, feeding outcomes (and their follow-ups)
    /// back into the state. Returns how many commands ran.
    fn run(state: &mut AppState, store: &dyn SampleStore, commands: Vec<Command>) -> usize {
        let mut queue = commands;
        let mut ran = 0;
        while let Some(command) = queue.pop() {
            ran += 1;
            let outcome = command.execute(store);
            queue.extend(state.apply(outcome, Instant::now()));
        }
        ran
    }

    fn loaded(store: &FakeStore) -> AppState {
        let mut s = state();
        let startup = s.startup();
        run(&mut s, store, startup);
        s
    }

    fn select_and_load(s: &mut AppState, store: &FakeStore, name: &str) {
        let cmd = s.select(Some(name.into())).unwrap();
        run(s, store, vec![cmd]);
    }

    #[test]
    fn startup_loads_names() {
        let store = FakeStore::with(&["a", "b"]);
        let s = loaded(&store);
        assert_eq!(s.samples.names(), ["a", "b"]);
        assert!(!s.notification.is_visible());
    }

    #[test]
    fn failed_startup_leaves_list_empty_without_notification() {
        let mut s = state();
        let err = ApiError::Rejected { status: 503, message: None };
        assert!(s.apply(Outcome::NamesLoaded(Err(err)), Instant::now()).is_empty());
        assert!(s.samples.names().is_empty());
        assert!(!s.notification.is_visible());
    }

    #[test]
    fn blank_create_sends_nothing_and_stays_silent() {
        let store = FakeStore::default();
        let mut s = loaded(&store);
        s.samples.new_name = "  ".into();
        assert!(s.samples.request_create().is_none());
        assert!(!s.notification.is_visible());
        assert_eq!(store.calls(), vec!["list"]);
    }

    #[test]
    fn create_appends_and_notifies() {
        let store = FakeStore::with(&["a"]);
        let mut s = loaded(&store);
        s.samples.new_name = "fresh".into();
        s.samples.new_count = 75;
        let cmd = s.samples.request_create().unwrap();
        run(&mut s, &store, vec![cmd]);
        assert_eq!(s.samples.names(), ["a", "fresh"]);
        assert_eq!(s.notification.message(), "Sample created successfully");
        assert!(store.calls().contains(&"create fresh 50".to_string()));
    }

    #[test]
    fn rejected_create_shows_server_message() {
        let store = FakeStore::with(&["a"]);
        let mut s = loaded(&store);
        s.samples.new_name = "a".into();
        let cmd = s.samples.request_create().unwrap();
        run(&mut s, &store, vec![cmd]);
        assert_eq!(s.samples.names(), ["a"]);
        assert_eq!(s.notification.message(), "Sample already exists");
        assert!(s.notification.is_visible());
    }

    #[test]
    fn transport_failure_notifies_generic_error_without_mutation() {
        let mut s = state();
        s.samples.replace_names(vec!["a".into()]);
        s.samples.row_mode.begin_delete("a");
        s.samples.request_delete();
        let decode = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        s.apply(
            Outcome::Deleted {
                name: "a".into(),
                result: Err(decode.into()),
            },
            Instant::now(),
        );
        assert_eq!(s.samples.names(), ["a"]);
        assert_eq!(s.notification.message(), "Unexpected error");
        assert!(s.samples.row_mode.is_confirming_delete("a"));
    }

    #[test]
    fn renaming_selected_sample_moves_selection_and_refetches_once() {
        let store = FakeStore::with(&["a", "b"]);
        let mut s = loaded(&store);
        select_and_load(&mut s, &store, "a");

        s.samples.row_mode.begin_edit("a");
        if let Some(buf) = s.samples.row_mode.edit_buffer_mut("a") {
            *buf = "alpha".into();
        }
        let cmd = s.samples.request_rename().unwrap();
        let outcome = cmd.execute(&store);
        let follow_up = s.apply(outcome, Instant::now());

        assert_eq!(follow_up.len(), 1);
        assert!(matches!(&follow_up[0], Command::FetchSample(t) if t.name == "alpha"));
        assert_eq!(s.viewer.selection(), Some("alpha"));
        assert_eq!(s.samples.names(), ["alpha", "b"]);
        assert_eq!(s.notification.message(), "Sample updated");

        run(&mut s, &store, follow_up);
        assert!(s.viewer.measurement().is_some());
    }

    #[test]
    fn renaming_other_sample_leaves_selection_alone() {
        let store = FakeStore::with(&["a", "b"]);
        let mut s = loaded(&store);
        select_and_load(&mut s, &store, "a");
        let before = s.viewer.measurement().map(|m| m.values.clone());

        s.samples.row_mode.begin_edit("b");
        let cmd = s.samples.request_rename().unwrap();
        let follow_up = s.apply(cmd.execute(&store), Instant::now());

        assert!(follow_up.is_empty());
        assert_eq!(s.viewer.selection(), Some("a"));
        assert_eq!(s.viewer.measurement().map(|m| m.values.clone()), before);
    }

    #[test]
    fn deleting_selected_sample_clears_selection_and_measurement() {
        let store = FakeStore::with(&["a", "b"]);
        let mut s = loaded(&store);
        select_and_load(&mut s, &store, "a");
        assert!(s.viewer.measurement().is_some());

        s.samples.row_mode.begin_delete("a");
        let cmd = s.samples.request_delete().unwrap();
        run(&mut s, &store, vec![cmd]);

        assert_eq!(s.samples.names(), ["b"]);
        assert_eq!(s.viewer.selection(), None);
        assert!(matches!(s.viewer.phase(), ViewerPhase::Idle));
        assert_eq!(s.samples.row_mode, RowMode::Idle);
        assert_eq!(s.notification.message(), "Sample deleted");
    }

    #[test]
    fn deleting_other_sample_leaves_measurement() {
        let store = FakeStore::with(&["a", "b"]);
        let mut s = loaded(&store);
        select_and_load(&mut s, &store, "a");

        s.samples.row_mode.begin_delete("b");
        let cmd = s.samples.request_delete().unwrap();
        run(&mut s, &store, vec![cmd]);

        assert_eq!(s.viewer.selection(), Some("a"));
        assert!(s.viewer.measurement().is_some());
    }

    #[test]
    fn stale_fetch_does_not_overwrite_newer_selection() {
        let mut s = state();
        s.samples.replace_names(vec!["a".into(), "b".into()]);
        let Some(Command::FetchSample(first)) = s.select(Some("a".into())) else {
            panic!("expected fetch");
        };
        let Some(Command::FetchSample(second)) = s.select(Some("b".into())) else {
            panic!("expected fetch");
        };
        let now = Instant::now();
        s.apply(
            Outcome::SampleFetched {
                ticket: second,
                result: Ok(Measurement { values: vec![2.0], captured_at: None }),
            },
            now,
        );
        s.apply(
            Outcome::SampleFetched {
                ticket: first,
                result: Ok(Measurement { values: vec![1.0], captured_at: None }),
            },
            now,
        );
        assert_eq!(s.viewer.measurement().map(|m| m.values.clone()), Some(vec![2.0]));
    }

    #[test]
    fn in_flight_fetch_for_deleted_sample_is_dropped() {
        let store = FakeStore::with(&["a"]);
        let mut s = loaded(&store);
        let Some(fetch) = s.select(Some("a".into())) else {
            panic!("expected fetch");
        };
        s.samples.row_mode.begin_delete("a");
        let delete = s.samples.request_delete().unwrap();
        run(&mut s, &store, vec![delete]);
        let late = fetch.execute(&store);
        s.apply(late, Instant::now());
        assert!(matches!(s.viewer.phase(), ViewerPhase::Idle));
    }
}
