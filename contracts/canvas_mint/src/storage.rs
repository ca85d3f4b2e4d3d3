//! # Storage
//!
//! Typed helpers over the three Soroban storage tiers used by the ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key           | Type  | Description                       |
//! |---------------|-------|-----------------------------------|
//! | `CanvasCount` | `u64` | Auto-increment canvas ID counter  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type              | Description                   |
//! |----------------------|-------------------|-------------------------------|
//! | `CanvasConfig(id)`   | `CanvasConfig`    | Immutable canvas config       |
//! | `CanvasState(id)`    | `CanvasState`     | Mutable canvas state          |
//! | `Pixel(id, x, y)`    | `u32`             | Explicitly painted color      |
//! | `Token(id)`          | `OwnershipRecord` | Minted ownership record       |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! Pixels are sparse: only explicitly painted coordinates have an entry, so
//! ledger footprint grows with edits, not with canvas area. Reads of unset
//! coordinates fall back to [`DEFAULT_COLOR`].
//!
//! ## Temporary storage
//!
//! | Key              | Type   | Description                         |
//! |------------------|--------|-------------------------------------|
//! | `ClaimGuard(id)` | `bool` | Per-canvas claim-in-progress marker |
//!
//! The claim guard must never outlive the invocation that set it, which is
//! exactly what the temporary tier guarantees.

use soroban_sdk::{contracttype, panic_with_error, Env};

use crate::types::{CanvasConfig, CanvasState, OwnershipRecord};
use crate::Error;

/// Color read back for coordinates that were never painted.
///
/// Colors are one-byte palette indices (0..=255) carried in a `u32`; 255 is
/// the blank-canvas sentinel.
pub const DEFAULT_COLOR: u32 = 255;

/// Largest valid palette index.
pub const MAX_COLOR: u32 = 255;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// The instance-tier `CanvasCount` lives as long as the contract.
/// Persistent-tier keys hold per-canvas data with independent TTLs.
/// `ClaimGuard` is temporary-tier only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for canvas IDs (Instance).
    CanvasCount,
    /// Immutable canvas configuration keyed by ID (Persistent).
    CanvasConfig(u64),
    /// Mutable canvas state keyed by ID (Persistent).
    CanvasState(u64),
    /// Explicitly painted color keyed by `(canvas, x, y)` (Persistent).
    Pixel(u64, u32, u32),
    /// Minted ownership record keyed by canvas ID (Persistent).
    Token(u64),
    /// Claim-in-progress marker keyed by canvas ID (Temporary).
    ClaimGuard(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Atomically reads, increments, and stores the canvas counter.
/// Returns the ID to use for the *current* canvas; the first canvas gets 1.
///
/// IDs are allocated from this counter and nothing else, so they are never
/// reused even if a creation retries.
pub fn get_and_increment_canvas_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::CanvasCount)
        .unwrap_or(0);
    let id = current + 1;
    env.storage().instance().set(&DataKey::CanvasCount, &id);
    id
}

/// Number of canvases ever created (the counter value).
pub fn get_canvas_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CanvasCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new canvas.
pub fn save_canvas(env: &Env, config: &CanvasConfig, state: &CanvasState) {
    let config_key = DataKey::CanvasConfig(config.id);
    let state_key = DataKey::CanvasState(config.id);

    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the immutable canvas configuration.
/// Panics with `UnknownCanvas` if no canvas with this ID was ever created.
pub fn load_canvas_config(env: &Env, id: u64) -> CanvasConfig {
    let key = DataKey::CanvasConfig(id);
    let config: CanvasConfig = match env.storage().persistent().get(&key) {
        Some(config) => config,
        None => panic_with_error!(env, Error::UnknownCanvas),
    };
    bump_persistent(env, &key);
    config
}

/// Load the mutable canvas state.
/// Panics with `UnknownCanvas` if no canvas with this ID was ever created.
pub fn load_canvas_state(env: &Env, id: u64) -> CanvasState {
    let key = DataKey::CanvasState(id);
    let state: CanvasState = match env.storage().persistent().get(&key) {
        Some(state) => state,
        None => panic_with_error!(env, Error::UnknownCanvas),
    };
    bump_persistent(env, &key);
    state
}

/// Save only the mutable canvas state (the pixel-write and claim hot path).
pub fn save_canvas_state(env: &Env, id: u64, state: &CanvasState) {
    let key = DataKey::CanvasState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ── Pixel Helpers ────────────────────────────────────────────────────

/// True if `(x, y)` was ever explicitly painted on this canvas.
pub fn has_pixel(env: &Env, canvas_id: u64, x: u32, y: u32) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pixel(canvas_id, x, y))
}

/// Store a color at `(x, y)`, overwriting any prior value.
pub fn save_pixel(env: &Env, canvas_id: u64, x: u32, y: u32, color: u32) {
    let key = DataKey::Pixel(canvas_id, x, y);
    env.storage().persistent().set(&key, &color);
    bump_persistent(env, &key);
}

/// The explicitly stored color at `(x, y)`, or [`DEFAULT_COLOR`] if the
/// coordinate was never painted.
pub fn load_pixel(env: &Env, canvas_id: u64, x: u32, y: u32) -> u32 {
    let key = DataKey::Pixel(canvas_id, x, y);
    match env.storage().persistent().get(&key) {
        Some(color) => {
            bump_persistent(env, &key);
            color
        }
        None => DEFAULT_COLOR,
    }
}

// ── Token Helpers ────────────────────────────────────────────────────

/// Persist a freshly minted ownership record.
pub fn save_token(env: &Env, record: &OwnershipRecord) {
    let key = DataKey::Token(record.canvas_id);
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

/// Load the ownership record for a canvas.
/// Panics with `UnknownToken` if none was ever minted, or it was burned.
pub fn load_token(env: &Env, canvas_id: u64) -> OwnershipRecord {
    let key = DataKey::Token(canvas_id);
    let record: OwnershipRecord = match env.storage().persistent().get(&key) {
        Some(record) => record,
        None => panic_with_error!(env, Error::UnknownToken),
    };
    bump_persistent(env, &key);
    record
}

/// Destroy the ownership record. The canvas entries are untouched.
pub fn remove_token(env: &Env, canvas_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::Token(canvas_id));
}

// ── Claim Guard Helpers ──────────────────────────────────────────────

/// True if a claim is currently in progress for this canvas.
pub fn claim_guard_set(env: &Env, canvas_id: u64) -> bool {
    env.storage()
        .temporary()
        .has(&DataKey::ClaimGuard(canvas_id))
}

/// Mark a claim as in progress.
pub fn set_claim_guard(env: &Env, canvas_id: u64) {
    env.storage()
        .temporary()
        .set(&DataKey::ClaimGuard(canvas_id), &true);
}

/// Clear the claim-in-progress marker.
pub fn clear_claim_guard(env: &Env, canvas_id: u64) {
    env.storage()
        .temporary()
        .remove(&DataKey::ClaimGuard(canvas_id));
}
