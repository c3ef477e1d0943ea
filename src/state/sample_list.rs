use crate::data::endpoint::SampleCount;
use crate::data::error::ApiError;
use crate::state::command::Command;
use crate::state::row_mode::RowMode;

/// Mutations on the sample list and their fixed notification texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Rename,
    Delete,
}

pub const UNEXPECTED_ERROR: &str = "Unexpected error";

impl Mutation {
    pub fn success_message(self) -> &'static str {
        match self {
            Mutation::Create => "Sample created successfully",
            Mutation::Rename => "Sample updated",
            Mutation::Delete => "Sample deleted",
        }
    }

    pub fn failure_fallback(self) -> &'static str {
        match self {
            Mutation::Create => "Error creating sample",
            Mutation::Rename => "Error updating sample",
            Mutation::Delete => "Error deleting sample",
        }
    }

    /// Notification text for a finished request. Rejections show the store's
    /// message when it sent one; transport and decoding failures are logged
    /// and collapse to a generic message.
    pub fn report(self, result: &Result<(), ApiError>) -> String {
        match result {
            Ok(()) => self.success_message().to_string(),
            Err(e) if e.is_rejection() => e
                .server_message()
                .unwrap_or_else(|| self.failure_fallback())
                .to_string(),
            Err(e) => {
                tracing::error!("{self:?} request failed: {e}");
                UNEXPECTED_ERROR.to_string()
            }
        }
    }
}

/// Locally cached sample names plus the sidebar's input state.
#[derive(Debug, Default)]
pub struct SampleList {
    names: Vec<String>,
    pub new_name: String,
    pub new_count: u32,
    pub row_mode: RowMode,
    mutations_in_flight: usize,
}

impl SampleList {
    pub fn new(default_count: SampleCount) -> Self {
        Self {
            new_count: default_count.get(),
            ..Self::default()
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_busy(&self) -> bool {
        self.mutations_in_flight > 0
    }

    pub fn replace_names(&mut self, names: Vec<String>) {
        self.names = names;
    }

    /// Build the create request for the input field. `None` when the name is
    /// blank; the name itself is sent exactly as typed.
    pub fn request_create(&mut self) -> Option<Command> {
        if self.new_name.trim().is_empty() {
            return None;
        }
        let count = SampleCount::clamped(self.new_count);
        self.new_count = count.get();
        self.mutations_in_flight += 1;
        Some(Command::Create {
            name: self.new_name.clone(),
            count,
        })
    }

    /// Build the rename request for the row currently being edited.
    pub fn request_rename(&mut self) -> Option<Command> {
        let RowMode::Editing { name, buffer } = &self.row_mode else {
            return None;
        };
        let command = Command::Rename {
            old_name: name.clone(),
            new_name: buffer.clone(),
        };
        self.mutations_in_flight += 1;
        Some(command)
    }

    /// Build the delete request for the row awaiting confirmation.
    pub fn request_delete(&mut self) -> Option<Command> {
        let RowMode::ConfirmDelete { name } = &self.row_mode else {
            return None;
        };
        let command = Command::Delete { name: name.clone() };
        self.mutations_in_flight += 1;
        Some(command)
    }

    fn finish_mutation(&mut self) {
        self.mutations_in_flight = self.mutations_in_flight.saturating_sub(1);
    }

    /// A create request finished. Returns `true` when the list changed.
    pub fn apply_create(&mut self, name: &str, succeeded: bool) -> bool {
        self.finish_mutation();
        if !succeeded {
            return false;
        }
        self.names.push(name.to_string());
        self.new_name.clear();
        true
    }

    /// A rename request finished. On success the name keeps its position and
    /// edit mode ends; on failure edit mode is left as it was.
    pub fn apply_rename(&mut self, old_name: &str, new_name: &str, succeeded: bool) -> bool {
        self.finish_mutation();
        if !succeeded {
            return false;
        }
        if let Some(slot) = self.names.iter_mut().find(|n| n.as_str() == old_name) {
            *slot = new_name.to_string();
        }
        if self.row_mode.is_editing(old_name) {
            self.row_mode.cancel();
        }
        true
    }

    /// A delete request finished. On success the name is removed and
    /// confirmation ends; on failure confirmation stays up.
    pub fn apply_delete(&mut self, name: &str, succeeded: bool) -> bool {
        self.finish_mutation();
        if !succeeded {
            return false;
        }
        self.names.retain(|n| n != name);
        if self.row_mode.is_confirming_delete(name) {
            self.row_mode.cancel();
        }
        true
    }
}
