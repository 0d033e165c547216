//! Errors raised while wiring the game into the page.

use std::fmt;
use wasm_bindgen::JsValue;

/// Host setup failures. Gameplay itself has no error path.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    NoWindow,
    NoDocument,
    NoBody,
    NotACanvas(String),
    NoContext,
    Dom(String),
    InvalidConfig(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoWindow => write!(f, "no window"),
            GameError::NoDocument => write!(f, "no document"),
            GameError::NoBody => write!(f, "document has no body"),
            GameError::NotACanvas(id) => write!(f, "element '{}' is not a canvas", id),
            GameError::NoContext => write!(f, "canvas has no 2d context"),
            GameError::Dom(msg) => write!(f, "DOM call failed: {}", msg),
            GameError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
