pub mod audio;
pub mod game;
pub mod impact;
pub mod leaderboard;
pub mod pool;
pub mod scheduler;
pub mod scoring;

pub use game::{Game, Session};
