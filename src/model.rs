//! Core data models for Beach Cleanup.
//! Engine-owned state lives in `state::game`; the types here are the plain
//! values passed between the engine, persistence and the views.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BagId(pub u64);

/// Index into the renderer's bag sprite palette. Opaque to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bag {
    pub id: BagId,
    /// Top-left corner in playfield coordinates.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub sprite: SpriteId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    pub score: u32,
    /// Whole seconds left in the session.
    pub time_left: u32,
}

impl GameState {
    pub fn idle(session_secs: u32) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            time_left: session_secs,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    /// ISO-8601 instant at which the score was recorded.
    pub date: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactSummary {
    pub plastic_weight_kg: f64,
    pub saved_fish: u64,
    pub saved_whales: u64,
}

/// Notifications emitted by the engine, drained by the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Started { time_left: u32 },
    Tick { time_left: u32 },
    Spawned { id: BagId },
    Hit { id: BagId, score: u32 },
    GameOver {
        score: u32,
        leaderboard: Vec<LeaderboardEntry>,
    },
    ScoreRecorded {
        entry: LeaderboardEntry,
        leaderboard: Vec<LeaderboardEntry>,
        impact: ImpactSummary,
    },
    Reset { time_left: u32 },
}

// ---------------- View state -----------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    StartMenu,
    Playing,
    GameOver,
    Impact,
}

/// What the overlays show. Folded from [`GameEvent`]s; never read by the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HudState {
    pub screen: Screen,
    pub score: u32,
    pub time_left: u32,
    pub final_score: u32,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub impact: Option<ImpactSummary>,
}

impl HudState {
    pub fn new(time_left: u32) -> Self {
        Self {
            time_left,
            ..Default::default()
        }
    }
}

impl Reducible for HudState {
    type Action = GameEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameEvent::*;
        let mut new = (*self).clone();
        match action {
            Started { time_left } => {
                new = HudState::new(time_left);
                new.screen = Screen::Playing;
            }
            Tick { time_left } => {
                if new.time_left == time_left {
                    return self;
                }
                new.time_left = time_left;
            }
            Spawned { .. } => return self,
            Hit { score, .. } => {
                new.score = score;
            }
            GameOver { score, leaderboard } => {
                new.screen = Screen::GameOver;
                new.final_score = score;
                new.score = score;
                new.leaderboard = leaderboard;
            }
            ScoreRecorded {
                leaderboard, impact, ..
            } => {
                new.screen = Screen::Impact;
                new.leaderboard = leaderboard;
                new.impact = Some(impact);
            }
            Reset { time_left } => {
                new = HudState::new(time_left);
            }
        }
        Rc::new(new)
    }
}
