//! Runtime-tunable game configuration.
//!
//! [`GameConfig::default`] carries the reference values. A partial JSON
//! object stored under [`SETTINGS_KEY`] overrides any subset of fields;
//! missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::state::leaderboard::KeyValueStore;
use crate::util::clog;

pub const SETTINGS_KEY: &str = "bc_settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Timing ──────────────────────────────────────────────────────────────
    pub spawn_interval_ms: u32,
    pub countdown_interval_ms: u32,
    pub session_secs: u32,

    // ── Scoring ─────────────────────────────────────────────────────────────
    pub points_per_hit: u32,
    pub weight_per_bag_kg: f64,

    // ── Playfield & bags ────────────────────────────────────────────────────
    pub playfield_height: f64,
    pub bag_width: f64,
    pub bag_height: f64,
    /// Distance kept free between the lowest spawn row and the bottom edge.
    pub spawn_margin_bottom: f64,
    pub glow_size: f64,

    // ── Leaderboard ─────────────────────────────────────────────────────────
    pub leaderboard_size: usize,
    pub leaderboard_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 1000,
            countdown_interval_ms: 1000,
            session_secs: 60,
            points_per_hit: 10,
            weight_per_bag_kg: 0.05,
            playfield_height: 400.0,
            bag_width: 50.0,
            bag_height: 50.0,
            spawn_margin_bottom: 70.0,
            glow_size: 10.0,
            leaderboard_size: 5,
            leaderboard_key: "leaderboard".to_string(),
        }
    }
}

impl GameConfig {
    /// Defaults merged with any override found in `store`.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(SETTINGS_KEY) {
            None => Self::default(),
            Some(raw) => match serde_json::from_str::<Self>(&raw) {
                Ok(cfg) => cfg.sanitized(),
                Err(e) => {
                    clog(&format!("ignoring malformed {}: {}", SETTINGS_KEY, e));
                    Self::default()
                }
            },
        }
    }

    /// Zero durations would stall or end a session before its first tick;
    /// each one falls back to its default.
    fn sanitized(mut self) -> Self {
        let d = Self::default();
        if self.session_secs == 0 {
            clog(&format!("{}: session_secs must be positive, using {}", SETTINGS_KEY, d.session_secs));
            self.session_secs = d.session_secs;
        }
        if self.spawn_interval_ms == 0 {
            self.spawn_interval_ms = d.spawn_interval_ms;
        }
        if self.countdown_interval_ms == 0 {
            self.countdown_interval_ms = d.countdown_interval_ms;
        }
        self
    }
}
