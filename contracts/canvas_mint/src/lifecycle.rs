//! # Lifecycle
//!
//! The time gate of the canvas state machine.
//!
//! Completion is never invoked by a caller and never runs on a timer. Every
//! entry point that touches a canvas calls [`sync_completion`] first, so the
//! `Open → Complete` transition fires the instant any traffic observes an
//! elapsed window. Because the sync runs *before* the operation's own guard,
//! a write landing exactly on the boundary tick sees `Complete` and is
//! rejected — completion wins ties.
//!
//! The transition is monotonic and idempotent: syncing a `Complete` or
//! `Claimed` canvas changes nothing, and nothing ever moves a canvas back
//! to `Open`.

use soroban_sdk::Env;

use crate::storage::{load_canvas_state, save_canvas_state};
use crate::types::{CanvasConfig, CanvasState, CanvasStatus};

/// Current tick: the ledger sequence number supplied by the environment.
pub fn current_tick(env: &Env) -> u32 {
    env.ledger().sequence()
}

/// True once the painting window has elapsed.
///
/// Saturating: a window reaching past `u32::MAX` simply never expires on
/// its own.
pub fn is_expired(config: &CanvasConfig, tick: u32) -> bool {
    tick >= config.created_at_tick.saturating_add(config.max_duration_ticks)
}

/// Load the canvas state, applying the lazy `Open → Complete` transition
/// if the window has elapsed. Persists the transition so status reads are
/// never stale; `last_write_tick` is left untouched and thereby frozen.
pub fn sync_completion(env: &Env, config: &CanvasConfig) -> CanvasState {
    let mut state = load_canvas_state(env, config.id);

    if state.status == CanvasStatus::Open && is_expired(config, current_tick(env)) {
        state.status = CanvasStatus::Complete;
        save_canvas_state(env, config.id, &state);
    }

    state
}
