//! Game state machine and the session that drives it from scheduler ticks.
//!
//! [`Game`] is synchronous: every transition happens inside one method call
//! and leaves a [`GameEvent`] in its queue. [`Session`] owns the timers, feeds
//! ticks and pointer input into the game, and forwards drained events to the
//! presentation layer.
//!
//! Phases: `Idle --start--> Running --time out--> Over --reset--> Idle`.

use std::cell::RefCell;
use std::rc::Rc;

use rand::RngCore;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::model::{Bag, BagId, GameEvent, GameState, ImpactSummary, LeaderboardEntry, Phase, Playfield};
use crate::util::clog;

use super::audio::AudioChannel;
use super::leaderboard::Leaderboard;
use super::pool::{BagPool, SpawnRules};
use super::scheduler::{Scheduler, TimerHandle};
use super::scoring::first_hit;

/// External collaborators handed to [`Game::new`].
pub struct GameParts {
    pub leaderboard: Leaderboard,
    pub ambient: Box<dyn AudioChannel>,
    pub hit_sound: Box<dyn AudioChannel>,
    pub rng: Box<dyn RngCore>,
    /// Number of bag sprites the renderer can choose from.
    pub palette_len: usize,
}

pub struct Game {
    cfg: GameConfig,
    field: Playfield,
    state: GameState,
    pool: BagPool,
    leaderboard: Leaderboard,
    ambient: Box<dyn AudioChannel>,
    hit_sound: Box<dyn AudioChannel>,
    rng: Box<dyn RngCore>,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(cfg: GameConfig, field: Playfield, parts: GameParts) -> Self {
        parts.ambient.set_looping(true);
        Self {
            state: GameState::idle(cfg.session_secs),
            pool: BagPool::new(SpawnRules::from_config(&cfg, parts.palette_len)),
            cfg,
            field,
            leaderboard: parts.leaderboard,
            ambient: parts.ambient,
            hit_sound: parts.hit_sound,
            rng: parts.rng,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    /// Later spawns use the new bounds; live bags stay where they are.
    pub fn set_playfield(&mut self, field: Playfield) {
        self.field = field;
    }

    pub fn bags(&self) -> std::slice::Iter<'_, Bag> {
        self.pool.snapshot()
    }

    pub fn leaderboard_top(&self) -> Vec<LeaderboardEntry> {
        self.leaderboard.top_n(self.cfg.leaderboard_size)
    }

    pub fn impact(&self) -> ImpactSummary {
        ImpactSummary::from_score(self.state.score, self.cfg.weight_per_bag_kg)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.state.phase != expected {
            return Err(GameError::InvalidPhase {
                expected,
                actual: self.state.phase,
            });
        }
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        self.expect_phase(Phase::Idle)?;
        self.state = GameState {
            phase: Phase::Running,
            score: 0,
            time_left: self.cfg.session_secs,
        };
        self.pool.clear();
        if let Err(e) = self.ambient.play() {
            clog(&format!("ambient audio: {}", e));
        }
        clog("game started");
        self.events.push(GameEvent::Started {
            time_left: self.state.time_left,
        });
        if self.state.time_left == 0 {
            self.finish();
        }
        Ok(())
    }

    pub fn on_spawn_tick(&mut self) -> Option<BagId> {
        let id = self
            .pool
            .try_spawn(self.state.phase, self.field, &mut *self.rng)?;
        self.events.push(GameEvent::Spawned { id });
        Some(id)
    }

    /// Returns the phase after the tick; reaching zero ends the game in the same call.
    pub fn on_countdown_tick(&mut self) -> Phase {
        if self.state.phase != Phase::Running {
            return self.state.phase;
        }
        self.state.time_left = self.state.time_left.saturating_sub(1);
        self.events.push(GameEvent::Tick {
            time_left: self.state.time_left,
        });
        if self.state.time_left == 0 {
            self.finish();
        }
        self.state.phase
    }

    fn finish(&mut self) {
        self.state.phase = Phase::Over;
        self.ambient.pause();
        self.ambient.set_position(0.0);
        self.pool.clear();
        clog(&format!("game over, final score {}", self.state.score));
        self.events.push(GameEvent::GameOver {
            score: self.state.score,
            leaderboard: self.leaderboard_top(),
        });
    }

    /// Playfield-local click. Returns whether a bag was collected.
    pub fn on_pointer(&mut self, x: f64, y: f64) -> bool {
        if self.state.phase != Phase::Running {
            return false;
        }
        let Some(id) = first_hit(self.pool.snapshot(), x, y) else {
            return false;
        };
        if !self.pool.remove(id) {
            return false;
        }
        self.state.score += self.cfg.points_per_hit;
        self.hit_sound.set_position(0.0);
        if let Err(e) = self.hit_sound.play() {
            clog(&format!("hit sound: {}", e));
        }
        self.events.push(GameEvent::Hit {
            id,
            score: self.state.score,
        });
        true
    }

    pub fn record_score(&mut self, name: &str) -> Result<ImpactSummary, GameError> {
        self.expect_phase(Phase::Over)?;
        let entry = self.leaderboard.record(name, self.state.score)?;
        let impact = self.impact();
        self.events.push(GameEvent::ScoreRecorded {
            entry,
            leaderboard: self.leaderboard_top(),
            impact,
        });
        Ok(impact)
    }

    /// Back to a fresh Idle game. Refused while a session is running.
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.state.phase == Phase::Running {
            return Err(GameError::InvalidPhase {
                expected: Phase::Over,
                actual: Phase::Running,
            });
        }
        self.state = GameState::idle(self.cfg.session_secs);
        self.pool.clear();
        clog("game reset");
        self.events.push(GameEvent::Reset {
            time_left: self.state.time_left,
        });
        Ok(())
    }
}

// ---------------- Session -----------------

pub type RenderFn = Rc<dyn Fn(&Game)>;
pub type NotifyFn = Rc<dyn Fn(Vec<GameEvent>)>;

/// Binds a [`Game`] to a [`Scheduler`]: arms the spawn, countdown and frame
/// triggers on start and drops them all once the game is over.
pub struct Session {
    game: Rc<RefCell<Game>>,
    scheduler: Rc<dyn Scheduler>,
    timers: Rc<RefCell<Vec<TimerHandle>>>,
    render: RenderFn,
    notify: NotifyFn,
}

impl Session {
    pub fn new(game: Game, scheduler: Rc<dyn Scheduler>, render: RenderFn, notify: NotifyFn) -> Self {
        Self {
            game: Rc::new(RefCell::new(game)),
            scheduler,
            timers: Rc::new(RefCell::new(Vec::new())),
            render,
            notify,
        }
    }

    pub fn game(&self) -> &Rc<RefCell<Game>> {
        &self.game
    }

    pub fn is_armed(&self) -> bool {
        !self.timers.borrow().is_empty()
    }

    pub fn start(&self) {
        if let Err(e) = self.game.borrow_mut().start() {
            clog(&format!("start ignored: {}", e));
            return;
        }
        if self.game.borrow().state().phase == Phase::Running {
            self.arm();
        }
        self.flush();
    }

    pub fn pointer(&self, x: f64, y: f64) -> bool {
        let hit = self.game.borrow_mut().on_pointer(x, y);
        self.flush();
        hit
    }

    pub fn record_score(&self, name: &str) -> Result<ImpactSummary, GameError> {
        let res = self.game.borrow_mut().record_score(name);
        if let Err(e) = &res {
            clog(&format!("score not recorded: {}", e));
        }
        self.flush();
        res
    }

    pub fn reset(&self) -> Result<(), GameError> {
        self.game.borrow_mut().reset()?;
        self.timers.borrow_mut().clear();
        self.flush();
        Ok(())
    }

    fn flush(&self) {
        let events = self.game.borrow_mut().drain_events();
        if !events.is_empty() {
            (self.notify)(events);
        }
    }

    fn arm(&self) {
        let (spawn_ms, countdown_ms) = {
            let g = self.game.borrow();
            (g.config().spawn_interval_ms, g.config().countdown_interval_ms)
        };
        let mut timers = self.timers.borrow_mut();
        timers.clear();

        let game = Rc::downgrade(&self.game);
        let notify = self.notify.clone();
        timers.push(self.scheduler.schedule_repeating(
            spawn_ms,
            Box::new(move || {
                let Some(game) = game.upgrade() else { return };
                let events = {
                    let mut g = game.borrow_mut();
                    g.on_spawn_tick();
                    g.drain_events()
                };
                if !events.is_empty() {
                    notify(events);
                }
            }),
        ));

        let game = Rc::downgrade(&self.game);
        let notify = self.notify.clone();
        let timers_weak = Rc::downgrade(&self.timers);
        timers.push(self.scheduler.schedule_repeating(
            countdown_ms,
            Box::new(move || {
                let Some(game) = game.upgrade() else { return };
                let (phase, events) = {
                    let mut g = game.borrow_mut();
                    let phase = g.on_countdown_tick();
                    (phase, g.drain_events())
                };
                if phase == Phase::Over {
                    if let Some(t) = timers_weak.upgrade() {
                        t.borrow_mut().clear();
                    }
                }
                if !events.is_empty() {
                    notify(events);
                }
            }),
        ));

        let game = Rc::downgrade(&self.game);
        let render = self.render.clone();
        timers.push(self.scheduler.schedule_frame(Box::new(move || {
            if let Some(game) = game.upgrade() {
                render(&game.borrow());
            }
        })));
    }
}
