use crate::error::GameError;

/// One playable sound. The ambient loop and the hit one-shot are separate channels.
pub trait AudioChannel {
    fn play(&self) -> Result<(), GameError>;
    fn pause(&self);
    fn set_position(&self, secs: f64);
    fn set_looping(&self, looping: bool);
}

/// Channel that plays nothing; used when a sound could not be created.
pub struct Silent;

impl AudioChannel for Silent {
    fn play(&self) -> Result<(), GameError> {
        Ok(())
    }
    fn pause(&self) {}
    fn set_position(&self, _secs: f64) {}
    fn set_looping(&self, _looping: bool) {}
}
