//! Single-winner lottery with a timed reveal.
//!
//! A draw snapshots the candidate pool when it starts, then runs a fixed
//! number of ticks. Each tick shows a random name from the whole roster as a
//! preview; the preview is cosmetic and never influences the result. The last
//! tick picks the winner from the snapshot and records it in the history.

pub mod history;

pub use history::DrawHistory;

use rand::Rng;

use lg_core::{NameEntry, Roster};

use crate::config::LotteryConfig;
use crate::random::pick;

/// Text shown before the first draw.
pub const READY_TEXT: &str = "Ready?";

/// Observable phase of the lottery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPhase {
    /// No draw has happened since the last reset.
    Idle,
    /// The reveal is running.
    Drawing,
    /// A winner has been chosen.
    Settled,
}

impl std::fmt::Display for DrawPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Drawing => write!(f, "drawing"),
            Self::Settled => write!(f, "settled"),
        }
    }
}

/// Something that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawEvent {
    /// A cosmetic preview name for the animation.
    Preview(NameEntry),
    /// The final winner.
    Winner(NameEntry),
}

#[derive(Debug, Clone)]
enum State {
    Idle,
    Drawing {
        pool: Vec<NameEntry>,
        elapsed: std::time::Duration,
    },
    Settled,
}

/// Lottery session state: phase, current display, and winner history.
#[derive(Debug, Clone)]
pub struct Lottery {
    config: LotteryConfig,
    state: State,
    history: DrawHistory,
    display: Option<NameEntry>,
    winner: Option<NameEntry>,
}

impl Default for Lottery {
    fn default() -> Self {
        Self::new(LotteryConfig::default())
    }
}

impl Lottery {
    /// Create an idle lottery with an empty history.
    pub fn new(config: LotteryConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            history: DrawHistory::new(),
            display: None,
            winner: None,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    /// Whether past winners may win again.
    pub fn allow_repeats(&self) -> bool {
        self.config.allow_repeats
    }

    /// Change the repeat policy. Takes effect at the next draw; a running
    /// draw keeps the pool it started with.
    pub fn set_allow_repeats(&mut self, allow: bool) {
        self.config.allow_repeats = allow;
    }

    /// Current phase.
    pub fn phase(&self) -> DrawPhase {
        match self.state {
            State::Idle => DrawPhase::Idle,
            State::Drawing { .. } => DrawPhase::Drawing,
            State::Settled => DrawPhase::Settled,
        }
    }

    /// Whether a draw is in progress.
    pub fn is_drawing(&self) -> bool {
        self.phase() == DrawPhase::Drawing
    }

    /// Past winners.
    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    /// The winner of the last completed draw, cleared when a new draw starts.
    pub fn winner(&self) -> Option<&NameEntry> {
        self.winner.as_ref()
    }

    /// The name to show right now: the latest preview while drawing, the
    /// winner once settled, or [`READY_TEXT`].
    pub fn display_text(&self) -> &str {
        match (&self.state, &self.winner, &self.display) {
            (State::Settled, Some(w), _) => &w.value,
            (State::Drawing { .. }, _, Some(d)) => &d.value,
            (State::Drawing { .. }, _, None) => READY_TEXT,
            (_, _, Some(d)) => &d.value,
            _ => READY_TEXT,
        }
    }

    /// Fraction of the reveal completed, from 0.0 to 1.0.
    pub fn progress(&self) -> f64 {
        match &self.state {
            State::Idle => 0.0,
            State::Settled => 1.0,
            State::Drawing { elapsed, .. } => {
                let total = self.config.timing.total.as_secs_f64();
                if total <= 0.0 {
                    1.0
                } else {
                    (elapsed.as_secs_f64() / total).min(1.0)
                }
            }
        }
    }

    /// Entries eligible to win right now. With repeats allowed this is the
    /// whole roster; otherwise past winners are excluded by id.
    pub fn candidate_pool(&self, roster: &Roster) -> Vec<NameEntry> {
        roster
            .entries()
            .iter()
            .filter(|e| self.config.allow_repeats || !self.history.contains(e.id))
            .cloned()
            .collect()
    }

    /// Whether `start_draw` would do anything.
    pub fn can_draw(&self, roster: &Roster) -> bool {
        !self.is_drawing() && !self.candidate_pool(roster).is_empty()
    }

    /// Begin a draw. Returns `false` (and changes nothing) while a draw is
    /// running or when nobody is eligible.
    pub fn start_draw(&mut self, roster: &Roster) -> bool {
        if self.is_drawing() {
            return false;
        }
        let pool = self.candidate_pool(roster);
        if pool.is_empty() {
            tracing::debug!(roster = roster.len(), "no candidates left to draw");
            return false;
        }
        tracing::debug!(candidates = pool.len(), "draw started");
        self.winner = None;
        self.state = State::Drawing {
            pool,
            elapsed: std::time::Duration::ZERO,
        };
        true
    }

    /// Advance the reveal by one interval.
    ///
    /// Returns the preview shown on this tick, or the winner on the final
    /// tick. Does nothing outside the `Drawing` phase.
    pub fn tick<R: Rng>(&mut self, roster: &Roster, rng: &mut R) -> Option<DrawEvent> {
        let State::Drawing { pool, elapsed } = &mut self.state else {
            return None;
        };
        *elapsed += self.config.timing.step();
        let done = *elapsed >= self.config.timing.total;

        let preview = pick(roster.entries(), rng).cloned();
        if preview.is_some() {
            self.display.clone_from(&preview);
        }
        if !done {
            return preview.map(DrawEvent::Preview);
        }

        let pool = std::mem::take(pool);
        let Some(winner) = pick(&pool, rng).cloned() else {
            self.state = State::Idle;
            return None;
        };
        self.history.record(winner.clone());
        self.display = Some(winner.clone());
        self.winner = Some(winner.clone());
        self.state = State::Settled;
        tracing::info!(
            winner = %winner.value,
            id = %winner.id,
            draws = self.history.len(),
            "draw settled"
        );
        Some(DrawEvent::Winner(winner))
    }

    /// Run the remaining ticks without waiting and return the winner.
    /// Never runs more than one full reveal's worth of ticks.
    pub fn finish<R: Rng>(&mut self, roster: &Roster, rng: &mut R) -> Option<NameEntry> {
        for _ in 0..self.config.timing.ticks() {
            match self.tick(roster, rng) {
                Some(DrawEvent::Winner(w)) => return Some(w),
                None if !self.is_drawing() => return None,
                _ => {}
            }
        }
        None
    }

    /// Start a draw and complete it immediately. Returns `None` when nobody
    /// is eligible.
    pub fn draw_now<R: Rng>(&mut self, roster: &Roster, rng: &mut R) -> Option<NameEntry> {
        if !self.start_draw(roster) {
            return None;
        }
        self.finish(roster, rng)
    }

    /// Forget all winners and return to `Idle`. Ignored while drawing.
    pub fn reset(&mut self) -> bool {
        if self.is_drawing() {
            return false;
        }
        self.history.clear();
        self.winner = None;
        self.display = None;
        self.state = State::Idle;
        tracing::debug!("lottery history reset");
        true
    }
}
