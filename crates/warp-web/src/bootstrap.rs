//! One-time page setup: logging, canvas sizing, audio, input listeners and
//! the periodic tick timer.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use warp_engine::{Game, InputEvent, Viewport};
use web_sys::{
    AddEventListenerOptions, Document, HtmlCanvasElement, MouseEvent, Touch, TouchEvent, Window,
};

use crate::audio::AmbientTrack;
use crate::canvas::CanvasSurface;
use crate::runner::GameRunner;

/// Everything the timer and the listeners share.
struct Session<G: Game> {
    runner: GameRunner<G>,
    surface: CanvasSurface,
    audio: AmbientTrack,
}

type Shared<G> = Rc<RefCell<Session<G>>>;

/// Install the panic hook and the console logger. Safe to call twice.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Size `canvas` to the page body, start the game on it and keep it
/// ticking for the lifetime of the page.
pub fn start<G: Game + 'static>(canvas: HtmlCanvasElement, game: G) -> Result<(), JsValue> {
    let window = window()?;
    let body = document()?
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    // Read once; the surface is not resized afterwards.
    let width = body.client_width().max(0) as u32;
    let height = body.client_height().max(0) as u32;
    let surface = CanvasSurface::new(&canvas, width, height)?;

    let config = game.config();
    let seed = config
        .starfield
        .seed
        .unwrap_or_else(|| js_sys::Date::now() as u64);
    let mut runner = GameRunner::new(game, Viewport::new(width as f32, height as f32), seed);
    runner.init();

    let audio = match &config.audio_src {
        Some(src) => AmbientTrack::new(src),
        None => AmbientTrack::silent(),
    };
    for sound in runner.drain_sounds() {
        audio.handle(sound);
    }

    let session: Shared<G> = Rc::new(RefCell::new(Session {
        runner,
        surface,
        audio,
    }));

    listen_mouse(&window, &canvas, &session, "mousemove", |x, y| InputEvent::PointerMove { x, y })?;
    listen_mouse(&window, &canvas, &session, "mousedown", |x, y| InputEvent::PointerDown { x, y })?;
    listen_mouse(&window, &canvas, &session, "mouseup", |x, y| InputEvent::PointerUp { x, y })?;
    listen_touch(&window, &canvas, &session, "touchmove", |x, y| InputEvent::PointerMove { x, y })?;
    listen_touch(&window, &canvas, &session, "touchstart", |x, y| InputEvent::PointerDown { x, y })?;
    listen_touch(&window, &canvas, &session, "touchend", |x, y| InputEvent::PointerUp { x, y })?;
    listen_touch(&window, &canvas, &session, "touchcancel", |x, y| InputEvent::PointerUp { x, y })?;

    schedule_ticks(&window, &session, config.tick_interval_ms)?;

    log::info!(
        "warp-web: started {}x{}, tick every {}ms",
        width,
        height,
        config.tick_interval_ms
    );
    Ok(())
}

/// Client coordinates to canvas-relative coordinates.
fn surface_pos(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        (client_x as f64 - rect.left()) as f32,
        (client_y as f64 - rect.top()) as f32,
    )
}

fn push<G: Game>(session: &Shared<G>, event: InputEvent) {
    match session.try_borrow_mut() {
        Ok(mut s) => s.runner.push_input(event),
        Err(_) => log::debug!("warp-web: dropped {:?} during tick", event),
    }
}

fn listen_mouse<G: Game + 'static>(
    window: &Window,
    canvas: &HtmlCanvasElement,
    session: &Shared<G>,
    kind: &str,
    make: fn(f32, f32) -> InputEvent,
) -> Result<(), JsValue> {
    let session = Rc::clone(session);
    let canvas = canvas.clone();
    let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        event.prevent_default();
        let (x, y) = surface_pos(&canvas, event.client_x(), event.client_y());
        push(&session, make(x, y));
    });
    window.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// First active contact, or the first one that just ended.
fn first_touch(event: &TouchEvent) -> Option<Touch> {
    event.touches().get(0).or_else(|| event.changed_touches().get(0))
}

fn listen_touch<G: Game + 'static>(
    window: &Window,
    canvas: &HtmlCanvasElement,
    session: &Shared<G>,
    kind: &str,
    make: fn(f32, f32) -> InputEvent,
) -> Result<(), JsValue> {
    let session = Rc::clone(session);
    let canvas = canvas.clone();
    let handler = Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
        event.prevent_default();
        let (x, y) = first_touch(&event)
            .map(|t| surface_pos(&canvas, t.client_x(), t.client_y()))
            .unwrap_or_default();
        push(&session, make(x, y));
    });
    // Touch listeners on window default to passive, which ignores prevent_default.
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        handler.as_ref().unchecked_ref(),
        &options,
    )?;
    handler.forget();
    Ok(())
}

fn schedule_ticks<G: Game + 'static>(
    window: &Window,
    session: &Shared<G>,
    interval_ms: u32,
) -> Result<(), JsValue> {
    let session = Rc::clone(session);
    let tick = Closure::<dyn FnMut()>::new(move || {
        // A tick that finds the session busy is skipped, not replayed.
        let Ok(mut guard) = session.try_borrow_mut() else {
            return;
        };
        let Session {
            runner,
            surface,
            audio,
        } = &mut *guard;
        runner.tick(surface);
        for sound in runner.drain_sounds() {
            audio.handle(sound);
        }
    });
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval_ms as i32,
    )?;
    tick.forget();
    Ok(())
}
