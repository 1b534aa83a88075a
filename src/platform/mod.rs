// Browser-backed implementations of the engine's collaborators.
pub mod audio;
pub mod renderer;
pub mod scheduler;
pub mod storage;

pub use audio::{AMBIENT_SRC, HIT_SRC, audio_channel};
pub use renderer::CanvasRenderer;
pub use scheduler::BrowserScheduler;
pub use storage::browser_store;
