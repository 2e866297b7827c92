//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for animations/updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,
    /// Transition from splash to main app
    SplashComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next sidebar view
    NextView,
    /// Move to the previous sidebar view
    PrevView,
    /// Jump to a sidebar view by 0-based position
    SelectView(usize),
    /// Move the row highlight down
    NextRow,
    /// Move the row highlight up
    PrevRow,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll a wide table left
    ScrollLeft,
    /// Scroll a wide table right
    ScrollRight,

    // ─────────────────────────────────────────────────────────────────────────
    // Pagination
    // ─────────────────────────────────────────────────────────────────────────
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
    /// Navigate up in modal (e.g., previous option)
    ModalUp,
    /// Navigate down in modal (e.g., next option)
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add character to search term
    SearchInput(char),
    /// Remove last character from search term
    SearchBackspace,

    // ─────────────────────────────────────────────────────────────────────────
    // Filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the filter picker for the active table
    OpenFilter,
    /// Select a value for a discrete filter
    SetFilter { key: &'static str, value: String },
    /// Reset search term and every filter
    ClearFilters,

    // ─────────────────────────────────────────────────────────────────────────
    // Data Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Export the filtered rows of the active table as CSV
    Export,
    /// Open the registration number prompt
    OpenVehicleLookup,
    /// Look up a registration number
    LookupVehicle(String),
    /// Generate and prepend a new API key
    GenerateKey,
    /// Show or mask API keys
    ToggleKeyReveal,
    /// Open the profile editor
    OpenProfileEditor,
    /// Open the wallet recharge prompt
    OpenRecharge,
    /// Request a recharge for the typed amount
    Recharge(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::SplashComplete => write!(f, "SplashComplete"),
            Action::NextView => write!(f, "NextView"),
            Action::PrevView => write!(f, "PrevView"),
            Action::SelectView(i) => write!(f, "SelectView({})", i),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::ScrollLeft => write!(f, "ScrollLeft"),
            Action::ScrollRight => write!(f, "ScrollRight"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::LastPage => write!(f, "LastPage"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::OpenFilter => write!(f, "OpenFilter"),
            Action::SetFilter { key, value } => write!(f, "SetFilter({}={})", key, value),
            Action::ClearFilters => write!(f, "ClearFilters"),
            Action::Export => write!(f, "Export"),
            Action::OpenVehicleLookup => write!(f, "OpenVehicleLookup"),
            Action::LookupVehicle(reg) => write!(f, "LookupVehicle({})", reg),
            Action::GenerateKey => write!(f, "GenerateKey"),
            Action::ToggleKeyReveal => write!(f, "ToggleKeyReveal"),
            Action::OpenProfileEditor => write!(f, "OpenProfileEditor"),
            Action::OpenRecharge => write!(f, "OpenRecharge"),
            Action::Recharge(amount) => write!(f, "Recharge({})", amount),
        }
    }
}
