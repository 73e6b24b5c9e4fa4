pub mod runner;

use std::cell::RefCell;

use glam::Vec2;
use wasm_bindgen::prelude::*;

use trace_engine::{InputEvent, ScoreSession, Stroke};

pub use runner::LessonRunner;
use runner::{flatten_points, to_json};

thread_local! {
    static RUNNER: RefCell<Option<LessonRunner>> = const { RefCell::new(None) };
    static SESSION: RefCell<ScoreSession> = RefCell::new(ScoreSession::default());
}

fn with_runner<R>(f: impl FnOnce(&mut LessonRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Lesson not initialized. Call lesson_init() first.");
        f(runner)
    })
}

fn with_session<R>(f: impl FnOnce(&mut ScoreSession) -> R) -> R {
    SESSION.with(|cell| f(&mut *cell.borrow_mut()))
}

/// Route `log` output and panics to the browser console. Safe to call repeatedly.
fn install_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

// ---- Stateless scoring ----

/// Reference path for `symbol` as flat `[x0, y0, x1, y1, ...]`.
#[wasm_bindgen]
pub fn generate_reference_path(symbol: &str, cx: f32, cy: f32, size: f32) -> Vec<f32> {
    install_logging();
    flatten_points(&trace_engine::generate_reference_path(symbol, Vec2::new(cx, cy), size))
}

/// Score strokes (`[[[x,y],...],...]`) against a reference (`[[x,y],...]`).
/// Returns `{coverage, direction, completion, overall, suggestions}` as JSON.
#[wasm_bindgen]
pub fn evaluate_trace(
    strokes_json: &str,
    reference_json: &str,
    tolerance: f32,
    child_friendly: bool,
) -> Result<String, JsValue> {
    install_logging();
    let strokes: Vec<Stroke> = serde_json::from_str(strokes_json)
        .map_err(|e| JsValue::from_str(&format!("invalid strokes: {e}")))?;
    let reference: Vec<Vec2> = serde_json::from_str(reference_json)
        .map_err(|e| JsValue::from_str(&format!("invalid reference: {e}")))?;

    let result = trace_engine::evaluate_trace(&strokes, &reference, tolerance, child_friendly);
    Ok(to_json(&trace_engine::feedback_for(&result)))
}

// ---- Standalone session ----

#[wasm_bindgen]
pub fn session_reset(multiplier: f32) {
    install_logging();
    with_session(|s| s.reset(multiplier));
}

/// Record one glyph's outcome. Returns the record as JSON.
#[wasm_bindgen]
pub fn session_record_attempt(
    glyph_index: u32,
    accuracy: f32,
    attempts_used: u32,
    elapsed_ms: f64,
    skipped: bool,
    multiplier: f32,
) -> String {
    install_logging();
    let elapsed = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        elapsed_ms.round() as u64
    } else {
        0
    };
    let record = with_session(|s| {
        s.record_attempt(glyph_index as usize, accuracy, attempts_used, elapsed, skipped, multiplier)
    });
    to_json(&record)
}

#[wasm_bindgen]
pub fn session_percentage() -> u32 {
    install_logging();
    with_session(|s| s.session_percentage())
}

/// Aggregate statistics for the standalone session as JSON.
#[wasm_bindgen]
pub fn session_statistics() -> String {
    install_logging();
    with_session(|s| to_json(&s.session_statistics()))
}

// ---- Lesson ----

/// Start a lesson for `stage`. `config_json` may be empty for defaults.
#[wasm_bindgen]
pub fn lesson_init(config_json: &str, stage: u32, cx: f32, cy: f32, size: f32) -> Result<(), JsValue> {
    install_logging();

    let runner = LessonRunner::new(config_json, stage, Vec2::new(cx, cy), size, js_sys::Date::now())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("trace-web: lesson initialized for stage {stage}");
    Ok(())
}

#[wasm_bindgen]
pub fn lesson_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn lesson_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn lesson_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn lesson_pointer_cancel() {
    with_runner(|r| r.push_input(InputEvent::PointerCancel));
}

#[wasm_bindgen]
pub fn lesson_clear() {
    with_runner(|r| r.clear());
}

/// Score the current attempt. Returns the lesson step as JSON.
#[wasm_bindgen]
pub fn lesson_submit(now_ms: f64) -> String {
    with_runner(|r| to_json(&r.submit(now_ms)))
}

#[wasm_bindgen]
pub fn lesson_skip(now_ms: f64) -> String {
    with_runner(|r| to_json(&r.skip(now_ms)))
}

#[wasm_bindgen]
pub fn lesson_reference_path() -> Vec<f32> {
    with_runner(|r| r.reference_path_flat())
}

#[wasm_bindgen]
pub fn lesson_current_symbol() -> String {
    with_runner(|r| r.current_symbol())
}

#[wasm_bindgen]
pub fn lesson_is_finished() -> bool {
    with_runner(|r| r.lesson().is_finished())
}

#[wasm_bindgen]
pub fn lesson_statistics() -> String {
    with_runner(|r| r.statistics_json())
}
