//! Top-level application state: the shared roster and one instance per tab.

use std::time::Duration;

use rand::rngs::StdRng;

use lg_core::Roster;
use lg_draw::LotteryConfig;

use crate::tabs::grouping::GroupingTab;
use crate::tabs::input::InputTab;
use crate::tabs::lottery::LotteryTab;
use crate::tabs::{InputMode, Tab, TabContext, TabId};

/// Main application state for the TUI.
pub struct TuiApp {
    /// The roster every tab works on.
    pub roster: Roster,
    /// Currently active tab.
    pub active_tab: TabId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Input tab.
    pub input: InputTab,
    /// Lottery tab. Its history survives tab switches.
    pub lottery: LotteryTab,
    /// Grouping tab.
    pub grouping: GroupingTab,

    rng: StdRng,
}

impl TuiApp {
    /// Create a new app over `roster`, starting on `start_tab`.
    pub fn new(roster: Roster, start_tab: TabId, rng: StdRng) -> Self {
        Self {
            roster,
            active_tab: start_tab,
            show_help: false,
            should_quit: false,
            input: InputTab::new(),
            lottery: LotteryTab::new(LotteryConfig::default()),
            grouping: GroupingTab::default(),
            rng,
        }
    }

    /// Get the input mode of the currently active tab.
    pub fn active_input_mode(&self) -> InputMode {
        self.active_tab_ref().input_mode()
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        match self.active_tab {
            TabId::Input => &self.input,
            TabId::Lottery => &self.lottery,
            TabId::Grouping => &self.grouping,
        }
    }

    /// Split the app into the active tab and the context it works on.
    fn parts(&mut self) -> (&mut dyn Tab, TabContext<'_>) {
        let tab: &mut dyn Tab = match self.active_tab {
            TabId::Input => &mut self.input,
            TabId::Lottery => &mut self.lottery,
            TabId::Grouping => &mut self.grouping,
        };
        let ctx = TabContext {
            roster: &mut self.roster,
            rng: &mut self.rng,
        };
        (tab, ctx)
    }

    /// Forward a key to the active tab. Returns `true` if the app should quit.
    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        let (tab, mut ctx) = self.parts();
        tab.handle_key(key, &mut ctx)
    }

    /// Forward a mouse event to the active tab.
    pub fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) {
        let (tab, mut ctx) = self.parts();
        tab.handle_mouse(mouse, &mut ctx);
    }

    /// Advance timers. The lottery keeps running when its tab is hidden.
    pub fn on_tick(&mut self) {
        let mut ctx = TabContext {
            roster: &mut self.roster,
            rng: &mut self.rng,
        };
        self.lottery.tick(&mut ctx);
    }

    /// How often `on_tick` should run.
    pub fn tick_rate(&self) -> Duration {
        self.lottery.lottery().config().timing.step()
    }

    /// Switch to a tab by ID.
    pub fn switch_tab(&mut self, tab: TabId) {
        tracing::debug!(from = ?self.active_tab, to = ?tab, "switch tab");
        self.active_tab = tab;
    }
}
