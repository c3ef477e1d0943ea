/// Transient per-row mode of the sample list.
///
/// Only one row can be special at a time, so a single value covers both the
/// "one editing row" and "one confirming row" rules: entering either mode on
/// any row replaces whatever mode any row was in before.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Idle,
    Editing {
        name: String,
        buffer: String,
    },
    ConfirmDelete {
        name: String,
    },
}

impl RowMode {
    /// Start editing `name`, seeding the buffer with its current text.
    pub fn begin_edit(&mut self, name: &str) {
        *self = RowMode::Editing {
            name: name.to_string(),
            buffer: name.to_string(),
        };
    }

    pub fn begin_delete(&mut self, name: &str) {
        *self = RowMode::ConfirmDelete {
            name: name.to_string(),
        };
    }

    pub fn cancel(&mut self) {
        *self = RowMode::Idle;
    }

    pub fn is_editing(&self, row: &str) -> bool {
        matches!(self, RowMode::Editing { name, .. } if name == row)
    }

    pub fn is_confirming_delete(&self, row: &str) -> bool {
        matches!(self, RowMode::ConfirmDelete { name } if name == row)
    }

    /// Mutable access to the edit buffer when `row` is being edited.
    pub fn edit_buffer_mut(&mut self, row: &str) -> Option<&mut String> {
        match self {
            RowMode::Editing { name, buffer } if name == row => Some(buffer),
            _ => None,
        }
    }
}
