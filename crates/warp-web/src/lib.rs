//! Browser front-end for `warp-engine`.
//!
//! Draws through Canvas2D, plays the ambient track, turns DOM mouse and
//! touch events into engine input, and drives the runner from a fixed
//! `setInterval` timer.
//!
//! # Usage
//!
//! ```ignore
//! #[wasm_bindgen(start)]
//! pub fn start() -> Result<(), JsValue> {
//!     warp_web::init_logging();
//!     let document = warp_web::document()?;
//!     let canvas = warp_web::canvas::acquire(&document, "canvas")?;
//!     let config = warp_web::canvas::read_config(&canvas);
//!     warp_web::start(canvas, MyGame::new(config))
//! }
//! ```

pub mod audio;
pub mod bootstrap;
pub mod canvas;
pub mod runner;

pub use audio::AmbientTrack;
pub use bootstrap::{document, init_logging, start, window};
pub use canvas::CanvasSurface;
pub use runner::GameRunner;
