//! Clock Reader core crate.
//!
//! An analog clock shows a random time; the player types it as four digits
//! (`HHMM`, 12-hour) and presses Enter. A correct answer swings the hands to
//! a new time. `start_game()` mounts the game on a canvas and runs it.

use wasm_bindgen::prelude::*;

// -----------------------------------------------------------------------------
// Console logging (browser only; compiled out on native targets)
// -----------------------------------------------------------------------------

macro_rules! console_log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($t)*);
    }};
}

macro_rules! console_warn {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = format_args!($($t)*);
    }};
}

pub mod animation;
pub mod answer;
pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod input;

pub use clock::{ClockTime, HandAngles};
pub use config::GameConfig;
pub use error::GameError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start_clock_mode(GameConfig::default())?;
    Ok(())
}

/// Start with a JSON config, e.g. `{"canvas_id": "game", "width": 800, "height": 1200}`.
/// Missing fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    game::start_clock_mode(config)?;
    Ok(())
}

/// `performance.now()` in ms; 0 when there is no browser window.
pub(crate) fn performance_now() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}
