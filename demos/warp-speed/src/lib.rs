use wasm_bindgen::prelude::*;

mod game;
use game::WarpSpeed;

/// Id of the canvas element the starfield draws on.
const CANVAS_ID: &str = "canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    warp_web::init_logging();

    let result = launch();
    match &result {
        Ok(()) => log::info!("warp-speed: initialized"),
        Err(err) => log::error!("warp-speed: failed to start: {:?}", err),
    }
    result
}

fn launch() -> Result<(), JsValue> {
    let document = warp_web::document()?;
    let canvas = warp_web::canvas::acquire(&document, CANVAS_ID)?;
    let config = warp_web::canvas::read_config(&canvas);
    warp_web::start(canvas, WarpSpeed::new(config))
}
