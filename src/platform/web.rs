//! wasm-bindgen exports for the browser front end

use wasm_bindgen::prelude::*;

use crate::error::PuzzleError;
use crate::puzzle::{Color, Session, Tool, generate_level};

fn to_js(err: PuzzleError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Colour Print (web) starting...");
    }
}

/// Level `id` as JSON (target grid as rows of color names)
#[wasm_bindgen]
pub fn level_json(id: u32) -> Result<String, JsValue> {
    let level = generate_level(id).map_err(to_js)?;
    serde_json::to_string(&level).map_err(|e| to_js(e.into()))
}

/// Browser-side handle to a play session
#[wasm_bindgen]
pub struct WebSession {
    inner: Session,
}

#[wasm_bindgen]
impl WebSession {
    #[wasm_bindgen(constructor)]
    pub fn new(id: u32) -> Result<WebSession, JsValue> {
        let inner = Session::start(id).map_err(to_js)?;
        Ok(Self { inner })
    }

    /// Apply the selected tool; returns "Playing", "Won" or "Lost"
    pub fn tap(&mut self, row: i32, col: i32) -> Result<String, JsValue> {
        let status = self.inner.tap(row, col).map_err(to_js)?;
        Ok(format!("{status:?}"))
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.inner.reset().map_err(to_js)
    }

    pub fn select_color(&mut self, name: &str) -> Result<(), JsValue> {
        let color = Color::from_str(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown color: {name}")))?;
        self.inner.select_color(color).map_err(to_js)
    }

    pub fn select_tool(&mut self, name: &str) -> Result<(), JsValue> {
        let tool = Tool::from_str(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown tool: {name}")))?;
        self.inner.select_tool(tool).map_err(to_js)
    }

    pub fn next_level(&self) -> Result<WebSession, JsValue> {
        let inner = self.inner.next_level().map_err(to_js)?;
        Ok(Self { inner })
    }

    /// Full session state (level, grid, budgets, selection, status) as JSON
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner).map_err(|e| to_js(e.into()))
    }
}
