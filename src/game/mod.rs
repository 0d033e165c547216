//! Clock-reading gameplay wired into the page: canvas setup, keyboard hooks
//! and the requestAnimationFrame loop. The game logic itself lives in
//! [`state`] and is host-independent.

pub mod render;
pub mod state;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

use crate::clock;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::Key;
use state::{GameState, KeyOutcome};

/// Everything the frame loop needs: the game plus its drawing target.
struct ClockApp {
    ctx: CanvasRenderingContext2d,
    config: GameConfig,
    game: GameState,
}

thread_local! {
    static CLOCK_APP: RefCell<Option<ClockApp>> = const { RefCell::new(None) };
    // Set once both key listeners are attached and the frame loop runs.
    static WIRED: Cell<bool> = const { Cell::new(false) };
}

pub fn start_clock_mode(config: GameConfig) -> Result<(), GameError> {
    let config = config.validate()?;
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let canvas = canvas_for(&doc, &config)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into()
        .map_err(|_| GameError::NoContext)?;

    let game = GameState::new(&config, clock::default_source());
    console_log!(
        "clock reader started on #{} ({}x{}), first time {}",
        config.canvas_id,
        config.width,
        config.height,
        game.time()
    );

    CLOCK_APP.with(|cell| {
        cell.borrow_mut().replace(ClockApp { ctx, config, game });
    });
    // A second start only swaps the state; listeners and the loop are shared.
    if is_wired() {
        return Ok(());
    }

    install_key_listeners(&doc)?;
    start_clock_loop();
    WIRED.with(|w| w.set(true));
    Ok(())
}

/// Whether the page already has the key listeners and frame loop attached.
pub fn is_wired() -> bool {
    WIRED.with(|w| w.get())
}

/// Reuse the canvas with the configured id or create it under `<body>`.
fn canvas_for(doc: &Document, config: &GameConfig) -> Result<HtmlCanvasElement, GameError> {
    let canvas: HtmlCanvasElement = match doc.get_element_by_id(&config.canvas_id) {
        Some(el) => el
            .dyn_into()
            .map_err(|_| GameError::NotACanvas(config.canvas_id.clone()))?,
        None => {
            let c: HtmlCanvasElement = doc
                .create_element("canvas")?
                .dyn_into()
                .map_err(|_| GameError::NotACanvas(config.canvas_id.clone()))?;
            c.set_id(&config.canvas_id);
            doc.body().ok_or(GameError::NoBody)?.append_child(&c)?;
            c
        }
    };
    canvas.set_width(config.width);
    canvas.set_height(config.height);
    Ok(canvas)
}

/// Attach both listeners or neither.
fn install_key_listeners(doc: &Document) -> Result<(), GameError> {
    let key_down = {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if let Some(key) = Key::from_key_down(&evt.key(), &evt.code()) {
                if key == Key::Backspace {
                    // Keep the browser from navigating back.
                    evt.prevent_default();
                }
                with_game(|game| game.on_key_down(key));
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure
    };
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if let Some(key) = Key::from_key_up(&evt.key(), &evt.code()) {
                match with_game(|game| (game.on_key_up(key), game.rounds_solved())) {
                    Some((KeyOutcome::RoundSolved(t), rounds)) => {
                        console_log!("solved {} ({} rounds)", t, rounds);
                    }
                    Some((KeyOutcome::Rejected, _)) => console_log!("wrong answer"),
                    _ => {}
                }
            }
        }) as Box<dyn FnMut(_)>);
        if let Err(err) =
            doc.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
        {
            doc.remove_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())
                .ok();
            return Err(err.into());
        }
        closure.forget();
    }
    key_down.forget();
    Ok(())
}

fn with_game<R>(f: impl FnOnce(&mut GameState) -> R) -> Option<R> {
    CLOCK_APP.with(|cell| cell.borrow_mut().as_mut().map(|app| f(&mut app.game)))
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(cb: &FrameCallback) {
    if let (Some(w), Some(closure)) = (window(), cb.borrow().as_ref()) {
        if w.request_animation_frame(closure.as_ref().unchecked_ref()).is_err() {
            console_warn!("requestAnimationFrame failed; clock loop stopped");
        }
    }
}

fn start_clock_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        CLOCK_APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                clock_tick(app, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn clock_tick(app: &mut ClockApp, now: f64) {
    app.game.tick(now);
    render::render(&app.ctx, &app.game, &app.config);
}
