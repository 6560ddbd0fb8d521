//! Ambient soundtrack played through a single `HtmlAudioElement`.
//!
//! Audio is a side effect of the visuals: every failure here is logged and
//! swallowed so the starfield keeps running without sound.

use wasm_bindgen::prelude::*;
use warp_engine::SoundEvent;
use web_sys::HtmlAudioElement;

pub struct AmbientTrack {
    element: Option<HtmlAudioElement>,
    // Keeps the promise rejection handler alive for the page lifetime.
    on_rejected: Closure<dyn FnMut(JsValue)>,
}

impl AmbientTrack {
    /// Load a looping track from `src`. A track that cannot be created stays
    /// silent.
    pub fn new(src: &str) -> Self {
        let element = match HtmlAudioElement::new_with_src(src) {
            Ok(el) => {
                el.set_loop(true);
                Some(el)
            }
            Err(err) => {
                log::warn!("audio: cannot load '{}': {:?}", src, err);
                None
            }
        };
        Self {
            element,
            on_rejected: Closure::new(|err: JsValue| {
                log::warn!("audio: playback rejected: {:?}", err);
            }),
        }
    }

    /// A track with no element; every request is ignored.
    pub fn silent() -> Self {
        Self {
            element: None,
            on_rejected: Closure::new(|_: JsValue| {}),
        }
    }

    /// Request playback. Autoplay policies may reject the returned promise.
    pub fn play(&self) {
        let Some(el) = &self.element else { return };
        match el.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_rejected);
            }
            Err(err) => log::warn!("audio: play failed: {:?}", err),
        }
    }

    pub fn pause(&self) {
        let Some(el) = &self.element else { return };
        if let Err(err) = el.pause() {
            log::warn!("audio: pause failed: {:?}", err);
        }
    }

    pub fn handle(&self, event: SoundEvent) {
        match event {
            SoundEvent::AmbientPlay => self.play(),
            SoundEvent::AmbientPause => self.pause(),
        }
    }
}
