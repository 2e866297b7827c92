//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns one data view per dataset and routes actions to the active one.

use crate::action::Action;
use crate::component::Component;
use crate::components::dashboard::{
    render_header, render_help_bar, render_sidebar, render_status_bar,
};
use crate::components::overview::RECENT_ACTIVITY_LEN;
use crate::components::profile_dialog::{self, draw_profile_editor};
use crate::components::recharge_dialog::draw_recharge;
use crate::components::vehicle_lookup_dialog::{accepts_char, draw_vehicle_lookup};
use crate::components::{
    calculate_main_layout, ClientInfoComponent, DashboardRenderContext, DataScreen,
    DataViewComponent, FilterChoice, FilterDialog, HelpDialog, KeysComponent, OverviewComponent,
    OverviewSummary, QuitDialog, SplashComponent,
};
use crate::config::Config;
use crate::model::client::sample_client;
use crate::model::log::sample_logs;
use crate::model::modal::{Modal, ModalStack};
use crate::model::payment::{sample_payments, CURRENT_BALANCE, LAST_RECHARGE};
use crate::model::ui::AppMode;
use crate::model::vehicle::known_vehicles;
use crate::model::{ApiKeys, ApiLog, ClientInfo, DashboardView, Payment, StatCard, VehicleRecord};
use crate::services::recharge::{accepts_amount_char, next_preset};
use crate::services::{self, LookupOutcome, RechargeOutcome};
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Current application mode
    pub mode: AppMode,

    /// Sidebar entry being shown
    pub view: DashboardView,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    pub config: Config,

    /// The signed-in client
    pub client: ClientInfo,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub overview: OverviewComponent,
    pub client_info: ClientInfoComponent,
    pub keys: KeysComponent,
    pub logs: DataViewComponent<ApiLog>,
    pub payments: DataViewComponent<Payment>,
    pub vehicles: DataViewComponent<VehicleRecord>,
    pub quit_dialog: QuitDialog,
    pub filter_dialog: FilterDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(config: Config) -> App {
        let client = sample_client();
        let wallet_cards = vec![
            StatCard::new("Current Balance", format!("${:.2}", CURRENT_BALANCE)),
            StatCard::new("Last Recharge", LAST_RECHARGE),
        ];

        App {
            mode: AppMode::Splash,
            view: DashboardView::default(),
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            status_message: None,
            config,
            client_info: ClientInfoComponent::new(&client),
            client,
            splash: SplashComponent::new(),
            overview: OverviewComponent::default(),
            keys: KeysComponent::new(ApiKeys::default()),
            logs: DataViewComponent::new(sample_logs()),
            payments: DataViewComponent::new(sample_payments())
                .with_extra_cards(wallet_cards)
                .with_recharge(),
            vehicles: DataViewComponent::new(known_vehicles()).with_lookup(),
            quit_dialog: QuitDialog,
            filter_dialog: FilterDialog::new(),
            help_dialog: HelpDialog::default(),
        }
    }

    /// The data view behind the current sidebar entry, if it is a table
    pub fn active_table(&self) -> Option<&dyn DataScreen> {
        match self.view {
            DashboardView::ApiLogs => Some(&self.logs),
            DashboardView::Wallet => Some(&self.payments),
            DashboardView::Vehicles => Some(&self.vehicles),
            _ => None,
        }
    }

    pub fn active_table_mut(&mut self) -> Option<&mut dyn DataScreen> {
        match self.view {
            DashboardView::ApiLogs => Some(&mut self.logs),
            DashboardView::Wallet => Some(&mut self.payments),
            DashboardView::Vehicles => Some(&mut self.vehicles),
            _ => None,
        }
    }

    fn in_search_mode(&self) -> bool {
        self.active_table().is_some_and(|t| t.search_mode())
    }

    fn switch_view(&mut self, view: DashboardView) {
        if view == self.view {
            return;
        }
        tracing::debug!(from = self.view.name(), to = view.name(), "switch view");
        self.view = view;
        self.error = None;
        self.status_message = None;
    }

    fn overview_summary(&self) -> OverviewSummary {
        OverviewSummary {
            total_api_calls: self.client.total_api_calls,
            wallet_balance: self.client.wallet_balance,
            active_keys: self.keys.keys().len(),
            vehicle_searches: self.vehicles.view().records().len(),
            recent: self
                .logs
                .view()
                .records()
                .iter()
                .take(RECENT_ACTIVITY_LEN)
                .cloned()
                .collect(),
        }
    }

    /// Write the active table's filtered rows to the export directory
    fn export_active(&mut self) {
        let quoting = self.config.export_quoting;
        let dir = self.config.export_path();
        let Some(screen) = self.active_table() else {
            return;
        };
        let label = screen.label();

        let result = screen.export(quoting).and_then(|(bytes, rows)| {
            let path = services::save_export(&dir, label, &bytes, Local::now().date_naive())?;
            Ok((path, rows))
        });

        match result {
            Ok((path, rows)) => {
                tracing::info!(dataset = label, rows, path = %path.display(), "export written");
                self.error = None;
                self.status_message =
                    Some(format!("Exported {} rows to {}", rows, path.display()));
            }
            Err(e) => {
                tracing::error!(dataset = label, error = %e, "export failed");
                self.error = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn open_filter(&mut self) {
        let Some(screen) = self.active_table() else {
            return;
        };
        let keys = screen.filter_keys();
        if keys.is_empty() {
            self.status_message = Some(format!("{} has no filters", screen.title()));
            return;
        }
        let selections: Vec<String> = keys.iter().map(|(k, _)| screen.filter_selection(k)).collect();

        self.filter_dialog.show_keys(keys, &selections);
        self.modals.push(Modal::Filter {
            key: None,
            selected_index: self.filter_dialog.selected_index,
        });
    }

    /// Apply the highlighted filter dialog entry
    fn confirm_filter(&mut self) -> Option<Action> {
        match self.filter_dialog.choice()? {
            FilterChoice::ClearAll => {
                self.modals.pop();
                Some(Action::ClearFilters)
            }
            FilterChoice::Key(key) => {
                let (label, options, current) = {
                    let screen = self.active_table()?;
                    let (_, label) = screen.filter_keys().into_iter().find(|(k, _)| *k == key)?;
                    (label, screen.filter_options(key), screen.filter_selection(key))
                };
                self.filter_dialog.show_values(key, label, options, &current);
                self.sync_filter_modal();
                None
            }
            FilterChoice::Value { key, value } => {
                self.modals.pop();
                Some(Action::SetFilter { key, value })
            }
        }
    }

    fn sync_filter_modal(&mut self) {
        let editing = self.filter_dialog.editing_key();
        let index = self.filter_dialog.selected_index;
        if let Some(Modal::Filter { key, selected_index }) = self.modals.top_mut() {
            *key = editing;
            *selected_index = index;
        }
    }

    fn lookup_vehicle(&mut self, registration: &str) {
        let outcome = services::lookup(
            self.vehicles.view_mut(),
            registration,
            Local::now().naive_local(),
        );
        tracing::info!(registration, outcome = ?outcome, "vehicle lookup");

        match outcome {
            LookupOutcome::Rejected => {
                self.error = Some(outcome.message());
            }
            _ => {
                if matches!(self.modals.top(), Some(Modal::VehicleLookup { .. })) {
                    self.modals.pop();
                }
                self.error = None;
                self.status_message = Some(outcome.message());
            }
        }
    }

    /// Apply the editor draft to the profile and close the editor
    fn save_profile(&mut self, values: &[String]) {
        self.client.apply_profile(values);
        self.client_info.set_client(&self.client);
        if matches!(self.modals.top(), Some(Modal::EditProfile { .. })) {
            self.modals.pop();
        }
        tracing::info!(client = %self.client.id, "profile updated");
        self.error = None;
        self.status_message = Some("Profile updated successfully!".to_string());
    }

    fn recharge(&mut self, amount: &str) {
        let outcome = services::request_recharge(amount);
        tracing::info!(amount, outcome = ?outcome, "recharge requested");

        match outcome {
            RechargeOutcome::Invalid => {
                self.error = Some(outcome.message());
            }
            RechargeOutcome::Redirecting(_) => {
                if matches!(self.modals.top(), Some(Modal::Recharge { .. })) {
                    self.modals.pop();
                }
                self.error = None;
                self.status_message = Some(outcome.message());
            }
        }
    }

    fn generate_key(&mut self) {
        self.keys.add_key(services::generate_key());
        tracing::info!(active_keys = self.keys.keys().len(), "api key generated");
        self.status_message = Some("New API Key generated successfully!".to_string());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.splash.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        match self.mode {
            AppMode::Splash => self.splash.handle_key_event(key),
            AppMode::Running => {
                if let Some(modal) = self.modals.top().cloned() {
                    return self.handle_modal_key_event(&modal, key);
                }
                if self.in_search_mode() {
                    return self.handle_search_key_event(key);
                }
                if let Some(action) = self.handle_global_key_event(key) {
                    return Ok(Some(action));
                }

                match self.view {
                    DashboardView::ApiKeys => self.keys.handle_key_event(key),
                    DashboardView::ClientInfo => self.client_info.handle_key_event(key),
                    _ => match self.active_table_mut() {
                        Some(screen) => screen.handle_key_event(key),
                        None => Ok(None),
                    },
                }
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.mode != AppMode::Running || !self.modals.is_empty() {
            return Ok(None);
        }
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextRow),
            MouseEventKind::ScrollUp => Some(Action::PrevRow),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.mode == AppMode::Splash {
                    return self.splash.update(Action::Tick);
                }
            }
            Action::SplashComplete => {
                self.mode = AppMode::Running;
                tracing::debug!("splash complete");
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextView => self.switch_view(self.view.next()),
            Action::PrevView => self.switch_view(self.view.previous()),
            Action::SelectView(index) => {
                if let Some(view) = DashboardView::from_index(index) {
                    self.switch_view(view);
                }
            }
            Action::NextRow | Action::PrevRow | Action::ToggleKeyReveal
                if self.view == DashboardView::ApiKeys =>
            {
                return self.keys.update(action);
            }

            // ─────────────────────────────────────────────────────────────────
            // Table (delegate to the active data view)
            // ─────────────────────────────────────────────────────────────────
            Action::NextRow
            | Action::PrevRow
            | Action::ScrollLeft
            | Action::ScrollRight
            | Action::NextPage
            | Action::PrevPage
            | Action::FirstPage
            | Action::LastPage
            | Action::EnterSearchMode
            | Action::ExitSearchMode
            | Action::SearchInput(_)
            | Action::SearchBackspace
            | Action::SetFilter { .. }
            | Action::ClearFilters => {
                if let Some(screen) = self.active_table_mut() {
                    return screen.update(action);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help { scroll_offset: 0 });
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => match self.modals.top().cloned() {
                Some(Modal::QuitConfirm) => self.should_quit = true,
                Some(Modal::Filter { .. }) => return Ok(self.confirm_filter()),
                Some(Modal::VehicleLookup { input }) => {
                    return Ok(Some(Action::LookupVehicle(input)));
                }
                Some(Modal::EditProfile { values, .. }) => self.save_profile(&values),
                Some(Modal::Recharge { input }) => return Ok(Some(Action::Recharge(input))),
                _ => {}
            },
            Action::ModalUp | Action::ModalDown => {
                if matches!(self.modals.top(), Some(Modal::Filter { .. })) {
                    self.sync_filter_modal();
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Filters
            // ─────────────────────────────────────────────────────────────────
            Action::OpenFilter => self.open_filter(),

            // ─────────────────────────────────────────────────────────────────
            // Data Operations
            // ─────────────────────────────────────────────────────────────────
            Action::Export => self.export_active(),
            Action::OpenVehicleLookup => {
                self.modals.push(Modal::VehicleLookup {
                    input: String::new(),
                });
            }
            Action::LookupVehicle(registration) => self.lookup_vehicle(&registration),
            Action::GenerateKey => self.generate_key(),
            Action::ToggleKeyReveal => {}
            Action::OpenProfileEditor => {
                self.modals.push(Modal::EditProfile {
                    values: self.client.profile_values(),
                    selected: 0,
                });
            }
            Action::OpenRecharge => {
                self.modals.push(Modal::Recharge {
                    input: String::new(),
                });
            }
            Action::Recharge(amount) => self.recharge(&amount),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.mode {
            AppMode::Splash => self.splash.draw(frame, area)?,
            AppMode::Running => {
                let has_status = self.error.is_some() || self.status_message.is_some();
                let layout = calculate_main_layout(area, has_status);

                let ctx = DashboardRenderContext {
                    view: self.view,
                    client_name: &self.client.name,
                    company: &self.client.company,
                    search_mode: self.in_search_mode(),
                    lookup_enabled: self.view == DashboardView::Vehicles,
                    error: self.error.as_deref(),
                    status_message: self.status_message.as_deref(),
                };
                render_header(frame, layout.header, &ctx);
                render_sidebar(frame, layout.sidebar, &ctx);
                if let Some(status_area) = layout.status {
                    render_status_bar(frame, status_area, &ctx);
                }
                render_help_bar(frame, layout.help, &ctx);

                match self.view {
                    DashboardView::Overview => {
                        let summary = self.overview_summary();
                        self.overview.set_summary(summary);
                        self.overview.draw(frame, layout.content)?;
                    }
                    DashboardView::ClientInfo => self.client_info.draw(frame, layout.content)?,
                    DashboardView::ApiKeys => self.keys.draw(frame, layout.content)?,
                    DashboardView::ApiLogs => self.logs.draw(frame, layout.content)?,
                    DashboardView::Wallet => self.payments.draw(frame, layout.content)?,
                    DashboardView::Vehicles => self.vehicles.draw(frame, layout.content)?,
                }

                if let Some(modal) = self.modals.top().cloned() {
                    self.draw_modal(frame, area, &modal)?;
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_global_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab => Some(Action::NextView),
            KeyCode::BackTab => Some(Action::PrevView),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                Some(Action::SelectView(index))
            }
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Filter { .. } => self.filter_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
            Modal::VehicleLookup { input } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::LookupVehicle(input.clone())),
                    KeyCode::Backspace => {
                        if let Some(Modal::VehicleLookup { input }) = self.modals.top_mut() {
                            input.pop();
                        }
                        None
                    }
                    KeyCode::Char(c) => {
                        if let Some(Modal::VehicleLookup { input }) = self.modals.top_mut() {
                            if accepts_char(input, c) {
                                input.push(c);
                            }
                        }
                        None
                    }
                    _ => None,
                };
                Ok(action)
            }
            Modal::EditProfile { .. } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::ConfirmModal),
                    code => {
                        self.edit_profile_draft(code);
                        None
                    }
                };
                Ok(action)
            }
            Modal::Recharge { .. } => {
                let action = match key.code {
                    KeyCode::Esc => Some(Action::CloseModal),
                    KeyCode::Enter => Some(Action::ConfirmModal),
                    code => {
                        self.edit_recharge_amount(code);
                        None
                    }
                };
                Ok(action)
            }
        }
    }

    fn edit_profile_draft(&mut self, code: KeyCode) {
        let Some(Modal::EditProfile { values, selected }) = self.modals.top_mut() else {
            return;
        };
        let count = values.len().max(1);
        match code {
            KeyCode::Down | KeyCode::Tab => *selected = (*selected + 1) % count,
            KeyCode::Up | KeyCode::BackTab => *selected = (*selected + count - 1) % count,
            KeyCode::Backspace => {
                if let Some(value) = values.get_mut(*selected) {
                    value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(value) = values.get_mut(*selected) {
                    if profile_dialog::accepts_char(value, c) {
                        value.push(c);
                    }
                }
            }
            _ => {}
        }
    }

    fn edit_recharge_amount(&mut self, code: KeyCode) {
        let Some(Modal::Recharge { input }) = self.modals.top_mut() else {
            return;
        };
        match code {
            KeyCode::Tab => *input = next_preset(input).to_string(),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                if accepts_amount_char(input, c) {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Filter { .. } => self.filter_dialog.draw(frame, area)?,
            Modal::VehicleLookup { input } => draw_vehicle_lookup(frame, area, input),
            Modal::EditProfile { values, selected } => {
                draw_profile_editor(frame, area, values, *selected)
            }
            Modal::Recharge { input } => draw_recharge(frame, area, input),
            Modal::Help { .. } => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::ALL;
    use ratatui::{backend::TestBackend, Terminal};

    fn running_app() -> App {
        let mut app = App::new(Config::default());
        app.update(Action::SplashComplete).unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        let mut action = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    #[test]
    fn test_starts_on_splash_then_overview() {
        let mut app = App::new(Config::default());
        assert_eq!(app.mode, AppMode::Splash);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Running);
        assert_eq!(app.view, DashboardView::Overview);
    }

    #[test]
    fn test_view_switching_keys() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.view, DashboardView::ApiLogs);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.view, DashboardView::Wallet);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.view, DashboardView::ApiKeys);
    }

    #[test]
    fn test_search_mode_captures_global_keys() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('/'));
        for c in ['q', '1'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.modals.is_empty());
        assert_eq!(app.view, DashboardView::ApiLogs);
        assert_eq!(app.logs.view().search_term(), "q1");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_pagination_on_active_table() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.payments.view().page(), 2);
        // Other views keep their own state
        assert_eq!(app.logs.view().page(), 1);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.payments.view().page(), 2);
    }

    #[test]
    fn test_filter_dialog_flow() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Filter {
                key: None,
                selected_index: 1
            })
        );

        // Status is the first filter; pick it, then move to "Failed"
        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.modals.top(),
            Some(Modal::Filter {
                key: Some("status"),
                ..
            })
        ));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert_eq!(app.logs.filter_selection("status"), "Failed");
        assert_eq!(app.logs.view().filtered().len(), 3);

        // "Clear all filters" sits above the filter keys
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.logs.filter_selection("status"), ALL);
    }

    #[test]
    fn test_filter_on_view_without_filters() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Char('f'));
        assert!(app.modals.is_empty());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Vehicle Details has no filters")
        );
    }

    #[test]
    fn test_export_writes_filtered_rows() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            export_dir: dir.path().to_string_lossy().to_string(),
            ..Config::default()
        };
        let mut app = App::new(config);
        app.update(Action::SplashComplete).unwrap();

        press(&mut app, KeyCode::Char('5'));
        app.update(Action::SetFilter {
            key: "status",
            value: "Completed".to_string(),
        })
        .unwrap();
        press(&mut app, KeyCode::Char('x'));

        assert!(app.error.is_none());
        let file = dir.path().join(format!(
            "payment-history-{}.csv",
            Local::now().date_naive().format("%Y-%m-%d")
        ));
        let contents = std::fs::read_to_string(file).unwrap();
        assert_eq!(contents.lines().count(), 7);
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|s| s.starts_with("Exported 6 rows")));
    }

    #[test]
    fn test_vehicle_lookup_prompt() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Char('v'));
        assert!(matches!(app.modals.top(), Some(Modal::VehicleLookup { .. })));

        // Empty input keeps the prompt open
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.top().is_some());
        assert_eq!(
            app.error.as_deref(),
            Some("Please enter a vehicle registration number.")
        );

        for c in "ka99zz0001".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert!(app.error.is_none());
        let first = &app.vehicles.view().records()[0];
        assert_eq!(first.registration_no, "KA99ZZ0001");
        assert_eq!(first.owner_name, "New Owner");
    }

    #[test]
    fn test_known_vehicle_not_duplicated() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('6'));
        let before = app.vehicles.view().records().len();
        app.update(Action::LookupVehicle("dl01ab1234".to_string()))
            .unwrap();
        assert_eq!(app.vehicles.view().records().len(), before);
    }

    #[test]
    fn test_profile_edit_saves_draft() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(
            app.modals.top(),
            Some(Modal::EditProfile { selected: 0, .. })
        ));

        for _ in 0.."Jane Doe".len() {
            press(&mut app, KeyCode::Backspace);
        }
        // Digits and 'q' are typed, not treated as global keys
        for c in "Jane Q 2".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.modals.is_empty());
        assert_eq!(app.view, DashboardView::ClientInfo);
        assert_eq!(app.client.name, "Jane Q 2");
        assert_eq!(
            app.status_message.as_deref(),
            Some("Profile updated successfully!")
        );
    }

    #[test]
    fn test_profile_edit_cancel_discards_draft() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('x'));
        assert!(matches!(
            app.modals.top(),
            Some(Modal::EditProfile { selected: 1, values }) if values[1] == "jane.doe@example.comx"
        ));

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
        assert_eq!(app.client.email, "jane.doe@example.com");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_recharge_rejects_invalid_amount() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Recharge {
                input: String::new()
            })
        );

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.error.as_deref(), Some("Please enter a valid amount"));
        assert!(app.modals.top().is_some());

        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Recharge {
                input: "0".to_string()
            })
        );
        assert_eq!(app.error.as_deref(), Some("Please enter a valid amount"));
    }

    #[test]
    fn test_recharge_preset_redirects() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.modals.top(),
            Some(&Modal::Recharge {
                input: "50".to_string()
            })
        );

        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert!(app.error.is_none());
        assert_eq!(app.view, DashboardView::Wallet);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Redirecting to payment gateway for $50...")
        );
    }

    #[test]
    fn test_generate_key() {
        let mut app = running_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('g'));

        let keys = app.keys.keys().keys();
        assert_eq!(keys.len(), 3);
        assert!(keys[0].starts_with("sk-live-"));
        assert_eq!(keys[0].len(), "sk-live-".len() + 24);
        assert_eq!(
            app.status_message.as_deref(),
            Some("New API Key generated successfully!")
        );
    }

    #[test]
    fn test_draw_every_view() {
        let mut app = running_app();
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        for index in 0..DashboardView::all().len() {
            app.update(Action::SelectView(index)).unwrap();
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    app.draw(frame, area).unwrap();
                })
                .unwrap();
        }
        for action in [Action::OpenProfileEditor, Action::OpenRecharge, Action::OpenHelp] {
            app.update(action).unwrap();
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    app.draw(frame, area).unwrap();
                })
                .unwrap();
        }
    }
}
