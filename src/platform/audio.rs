use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlAudioElement;

use crate::error::GameError;
use crate::state::audio::{AudioChannel, Silent};
use crate::util::clog;

pub const AMBIENT_SRC: &str = "audio/audio.mp3";
pub const HIT_SRC: &str = "audio/sac.mp3";

pub struct HtmlAudio {
    el: HtmlAudioElement,
    // Shared by every `play()` promise; lives as long as the element.
    on_reject: Closure<dyn FnMut(JsValue)>,
}

impl HtmlAudio {
    pub fn new(src: &str) -> Result<Self, GameError> {
        let el = HtmlAudioElement::new_with_src(src).map_err(|e| GameError::ResourceUnavailable {
            resource: "audio",
            detail: format!("{}: {:?}", src, e),
        })?;
        let label = src.to_string();
        let on_reject = Closure::wrap(Box::new(move |err: JsValue| {
            clog(&format!("{} playback rejected: {:?}", label, err));
        }) as Box<dyn FnMut(JsValue)>);
        Ok(Self { el, on_reject })
    }
}

/// Audio channel for `src`, or a silent one if the element cannot be created.
pub fn audio_channel(src: &str) -> Box<dyn AudioChannel> {
    match HtmlAudio::new(src) {
        Ok(a) => Box::new(a),
        Err(e) => {
            clog(&e.to_string());
            Box::new(Silent)
        }
    }
}

impl AudioChannel for HtmlAudio {
    fn play(&self) -> Result<(), GameError> {
        let promise = self.el.play().map_err(|e| GameError::ResourceUnavailable {
            resource: "audio",
            detail: format!("{:?}", e),
        })?;
        // Autoplay refusals arrive asynchronously as a rejected promise.
        let _ = promise.catch(&self.on_reject);
        Ok(())
    }

    fn pause(&self) {
        let _ = self.el.pause();
    }

    fn set_position(&self, secs: f64) {
        self.el.set_current_time(secs);
    }

    fn set_looping(&self, looping: bool) {
        self.el.set_loop(looping);
    }
}
