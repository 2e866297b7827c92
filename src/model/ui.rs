//! UI state - presentation state separate from the datasets

/// Sidebar entries of the dashboard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Overview,
    ClientInfo,
    ApiKeys,
    ApiLogs,
    Wallet,
    Vehicles,
}

impl DashboardView {
    pub fn all() -> [DashboardView; 6] {
        [
            DashboardView::Overview,
            DashboardView::ClientInfo,
            DashboardView::ApiKeys,
            DashboardView::ApiLogs,
            DashboardView::Wallet,
            DashboardView::Vehicles,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::ClientInfo => "Client Info",
            DashboardView::ApiKeys => "API Keys",
            DashboardView::ApiLogs => "API Logs",
            DashboardView::Wallet => "Wallet & Billing",
            DashboardView::Vehicles => "Vehicle Details",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    /// View for a 0-based sidebar position
    pub fn from_index(index: usize) -> Option<DashboardView> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> DashboardView {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> DashboardView {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// Whether the view is backed by a `TableView`
    pub fn is_table(&self) -> bool {
        matches!(
            self,
            DashboardView::ApiLogs | DashboardView::Wallet | DashboardView::Vehicles
        )
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}
