//! Modal stack for managing overlays
//!
//! Only the top modal receives input; the dashboard underneath keeps
//! rendering.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Discrete filter picker. `key` is `None` while the user is choosing
    /// which filter to change, then the chosen filter while picking a value.
    Filter {
        key: Option<&'static str>,
        selected_index: usize,
    },
    /// Registration number prompt for the vehicle lookup
    VehicleLookup { input: String },
    /// Profile editor. `values` holds the draft for every editable field
    /// and is discarded on cancel.
    EditProfile { values: Vec<String>, selected: usize },
    /// Wallet recharge amount prompt
    Recharge { input: String },
    /// Help dialog showing all keyboard shortcuts
    Help { scroll_offset: usize },
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
