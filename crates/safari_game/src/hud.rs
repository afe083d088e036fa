//! Progress HUD
//!
//! The wrist panel showing the countdown and which animals were found. It is a
//! pure listener: it reads broadcasts and keeps its own display state, with no
//! path back to the session controller.

use rustc_hash::FxHashSet;
use safari_core::{Category, EventListener, GameConfig, HudConfig, SafariEvent};

/// Timer text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerColor {
    White,
    Yellow,
    Red,
}

impl TimerColor {
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::White => "#FFFFFF",
            Self::Yellow => "#FFFF00",
            Self::Red => "#FF0000",
        }
    }
}

/// Formats seconds as `m:ss`, truncating fractions.
#[must_use]
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0).floor() as u32;
    format!("{}:{:02}", total / 60, total % 60)
}

#[derive(Debug, Clone)]
pub struct ProgressHud {
    thresholds: HudConfig,
    categories: Vec<Category>,
    time_limit: f32,

    visible: bool,
    found: FxHashSet<Category>,
    time_remaining: f32,
    timer_text: String,
    timer_color: TimerColor,
}

impl ProgressHud {
    #[must_use]
    pub fn new(game: &GameConfig, thresholds: HudConfig) -> Self {
        let mut hud = Self {
            thresholds,
            categories: game.category_set(),
            time_limit: game.time_limit,
            visible: false,
            found: FxHashSet::default(),
            time_remaining: game.time_limit,
            timer_text: String::new(),
            timer_color: TimerColor::White,
        };
        hud.update_timer(game.time_limit);
        hud
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Clears every indicator and restores the full countdown.
    pub fn reset(&mut self) {
        self.found.clear();
        self.update_timer(self.time_limit);
    }

    pub fn update_timer(&mut self, seconds: f32) {
        self.time_remaining = seconds;
        self.timer_text = format_clock(seconds);
        self.timer_color = if seconds < self.thresholds.critical_below {
            TimerColor::Red
        } else if seconds < self.thresholds.warning_below {
            TimerColor::Yellow
        } else {
            TimerColor::White
        };
    }

    fn mark_found(&mut self, category: Category) {
        self.found.insert(category);
        log::debug!("progress: {}/{}", self.found.len(), self.categories.len());
    }

    // ========================================================================
    // Display state
    // ========================================================================

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn timer_text(&self) -> &str {
        &self.timer_text
    }

    #[must_use]
    pub fn timer_color(&self) -> TimerColor {
        self.timer_color
    }

    #[must_use]
    pub fn time_remaining(&self) -> f32 {
        self.time_remaining
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn is_found(&self, category: Category) -> bool {
        self.found.contains(&category)
    }

    /// `(category, found)` per configured category, in configuration order.
    pub fn indicators(&self) -> impl Iterator<Item = (Category, bool)> + '_ {
        self.categories
            .iter()
            .map(|&category| (category, self.found.contains(&category)))
    }
}

impl EventListener for ProgressHud {
    fn on_event(&mut self, event: &SafariEvent) {
        match *event {
            SafariEvent::SessionStarted => {
                self.show();
                self.reset();
            }
            SafariEvent::DiscoveryConfirmed { category, .. } => self.mark_found(category),
            SafariEvent::TimerUpdate { time_remaining, .. } => self.update_timer(time_remaining),
            SafariEvent::SessionEnded { .. } => self.hide(),
            SafariEvent::SessionReset => self.reset(),
            _ => {}
        }
    }
}
