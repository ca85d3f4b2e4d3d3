//! # Canvas Mint Contract
//!
//! This is the root crate of the **collaborative canvas ledger**. It exposes
//! the single Soroban contract `CanvasMint` whose entry points cover the
//! full canvas lifecycle:
//!
//! | Phase     | Entry Point(s)                               |
//! |-----------|----------------------------------------------|
//! | Creation  | [`CanvasMint::create_canvas`]                |
//! | Painting  | [`CanvasMint::set_pixel`]                    |
//! | Claiming  | [`CanvasMint::claim`]                        |
//! | Burning   | [`CanvasMint::burn_token`]                   |
//! | Queries   | `get_canvas`, `get_pixel`, `canvas_count`, `token_metadata` |
//!
//! ## Architecture
//!
//! A canvas is a bounded pixel grid open for writes from *any* address for a
//! fixed number of ledger ticks, after which it freezes and its creator may
//! claim it once, minting a non-fungible ownership record. Completion is
//! lazy: there is no scheduler, the `Open → Complete` transition is applied
//! by whichever call first observes the elapsed window (see [`lifecycle`]).
//!
//! Storage access is fully delegated to [`storage`], completion derivation
//! to [`lifecycle`], and event payloads to [`events`]. This file contains
//! **only** the public entry points with their guard ordering — no storage
//! plumbing lives here directly.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env, String};

mod events;
mod lifecycle;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

use storage::{
    claim_guard_set, clear_claim_guard, get_and_increment_canvas_id, get_canvas_count, has_pixel,
    load_canvas_config, load_pixel, load_token, remove_token, save_canvas, save_canvas_state,
    save_pixel, save_token, set_claim_guard, MAX_COLOR,
};
pub use events::{CanvasClaimed, CanvasCreated, PixelColored, TokenBurned};
pub use storage::DEFAULT_COLOR;
pub use types::{Canvas, CanvasStatus, OwnershipRecord, TokenMetadata};

use lifecycle::{current_tick, sync_completion};
use types::{CanvasConfig, CanvasState};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Validation
    InvalidDimensions       = 1,
    InvalidDuration         = 2,
    CoordinatesOutOfBounds  = 3,
    InvalidColor            = 4,
    InvalidArtworkReference = 5,
    // Lookup
    UnknownCanvas           = 6,
    UnknownToken            = 7,
    // Lifecycle state
    CanvasFinished          = 8,
    CanvasNotFinished       = 9,
    CanvasAlreadyClaimed    = 10,
    // Authorization
    NotCanvasOwner          = 11,
    // Concurrency
    ReentrantCall           = 12,
}

#[contract]
pub struct CanvasMint;

#[contractimpl]
impl CanvasMint {
    // ─────────────────────────────────────────────────────────
    // Canvas registry
    // ─────────────────────────────────────────────────────────

    /// Open a new canvas for collaborative painting.
    ///
    /// - `creator` must sign and becomes the only address allowed to claim.
    /// - Rejects zero `width`/`height` with `InvalidDimensions` and zero
    ///   `max_duration_ticks` with `InvalidDuration` before any state is
    ///   written.
    ///
    /// The canvas accepts writes while
    /// `tick < created_at_tick + max_duration_ticks`, where a tick is the
    /// ledger sequence number.
    pub fn create_canvas(
        env: Env,
        creator: Address,
        width: u32,
        height: u32,
        max_duration_ticks: u32,
    ) -> Canvas {
        creator.require_auth();

        if width == 0 || height == 0 {
            panic_with_error!(&env, Error::InvalidDimensions);
        }
        if max_duration_ticks == 0 {
            panic_with_error!(&env, Error::InvalidDuration);
        }

        let id = get_and_increment_canvas_id(&env);
        let tick = current_tick(&env);

        let config = CanvasConfig {
            id,
            creator: creator.clone(),
            width,
            height,
            created_at_tick: tick,
            max_duration_ticks,
        };
        let state = CanvasState {
            status: CanvasStatus::Open,
            last_write_tick: tick,
            painted_count: 0,
            artwork_ref: String::from_str(&env, ""),
        };

        save_canvas(&env, &config, &state);

        events::emit_canvas_created(
            &env,
            CanvasCreated {
                canvas_id: id,
                creator,
                width,
                height,
                start_tick: tick,
                max_duration_ticks,
            },
        );

        Canvas::from_parts(config, state)
    }

    /// Retrieve a canvas by its ID.
    ///
    /// Applies the lazy completion transition first, so the returned status
    /// is never stale.
    pub fn get_canvas(env: Env, canvas_id: u64) -> Canvas {
        let config = load_canvas_config(&env, canvas_id);
        require_no_claim_in_progress(&env, canvas_id);
        let state = sync_completion(&env, &config);
        Canvas::from_parts(config, state)
    }

    /// Number of canvases ever created.
    pub fn canvas_count(env: Env) -> u64 {
        get_canvas_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Pixel store
    // ─────────────────────────────────────────────────────────

    /// Paint one pixel. Any authenticated address may paint, not only the
    /// creator; only claiming is restricted.
    ///
    /// Guard order matters: the lazy completion check runs before anything
    /// else, so a write landing exactly on the boundary tick is rejected
    /// with `CanvasFinished` rather than accepted.
    ///
    /// Overwrites are last-writer-wins; every accepted write emits a
    /// `PixelColored` event and advances `last_write_tick`.
    pub fn set_pixel(env: Env, canvas_id: u64, x: u32, y: u32, color: u32, editor: Address) {
        editor.require_auth();

        let config = load_canvas_config(&env, canvas_id);
        require_no_claim_in_progress(&env, canvas_id);
        let mut state = sync_completion(&env, &config);

        if state.status != CanvasStatus::Open {
            panic_with_error!(&env, Error::CanvasFinished);
        }
        if x >= config.width || y >= config.height {
            panic_with_error!(&env, Error::CoordinatesOutOfBounds);
        }
        if color > MAX_COLOR {
            panic_with_error!(&env, Error::InvalidColor);
        }

        if !has_pixel(&env, canvas_id, x, y) {
            state.painted_count += 1;
        }
        save_pixel(&env, canvas_id, x, y, color);
        state.last_write_tick = current_tick(&env);
        save_canvas_state(&env, canvas_id, &state);

        events::emit_pixel_colored(
            &env,
            PixelColored {
                canvas_id,
                editor,
                x,
                y,
                color,
            },
        );
    }

    /// Read one pixel: the explicitly painted color, or [`DEFAULT_COLOR`]
    /// for coordinates never painted.
    ///
    /// Reads are allowed in every lifecycle state; the call still runs the
    /// lazy completion sync like every other canvas-touching operation.
    pub fn get_pixel(env: Env, canvas_id: u64, x: u32, y: u32) -> u32 {
        let config = load_canvas_config(&env, canvas_id);
        require_no_claim_in_progress(&env, canvas_id);
        sync_completion(&env, &config);

        if x >= config.width || y >= config.height {
            panic_with_error!(&env, Error::CoordinatesOutOfBounds);
        }

        load_pixel(&env, canvas_id, x, y)
    }

    // ─────────────────────────────────────────────────────────
    // Token issuer
    // ─────────────────────────────────────────────────────────

    /// Claim a completed canvas, minting its ownership record.
    ///
    /// - Only the canvas creator may claim, and only once.
    /// - `artwork_ref` is the opaque content identifier of the rendered
    ///   artwork (e.g. an IPFS CID); it must be non-empty and is stored
    ///   verbatim, never interpreted.
    ///
    /// The mint is wrapped in a per-canvas in-progress marker: any nested
    /// call touching this canvas while the marker is set fails with
    /// `ReentrantCall` instead of observing a half-claimed canvas.
    pub fn claim(env: Env, canvas_id: u64, artwork_ref: String, caller: Address) -> OwnershipRecord {
        caller.require_auth();

        let config = load_canvas_config(&env, canvas_id);
        require_no_claim_in_progress(&env, canvas_id);

        if caller != config.creator {
            panic_with_error!(&env, Error::NotCanvasOwner);
        }

        let mut state = sync_completion(&env, &config);
        match state.status {
            CanvasStatus::Open => panic_with_error!(&env, Error::CanvasNotFinished),
            CanvasStatus::Claimed => panic_with_error!(&env, Error::CanvasAlreadyClaimed),
            CanvasStatus::Complete => {}
        }

        if artwork_ref.len() == 0 {
            panic_with_error!(&env, Error::InvalidArtworkReference);
        }

        set_claim_guard(&env, canvas_id);

        state.status = CanvasStatus::Claimed;
        state.artwork_ref = artwork_ref.clone();
        save_canvas_state(&env, canvas_id, &state);

        let record = OwnershipRecord {
            canvas_id,
            owner: config.creator.clone(),
            width: config.width,
            height: config.height,
            start_tick: config.created_at_tick,
            max_duration_ticks: config.max_duration_ticks,
            final_tick: state.last_write_tick,
            artwork_ref,
        };
        save_token(&env, &record);

        events::emit_canvas_claimed(
            &env,
            CanvasClaimed {
                canvas_id,
                creator: config.creator,
            },
        );

        clear_claim_guard(&env, canvas_id);

        record
    }

    /// Immutable descriptor of a minted token, for external renderers.
    ///
    /// Deterministic: derived only from the stored record, so identical
    /// state always yields an identical descriptor.
    pub fn token_metadata(env: Env, canvas_id: u64) -> TokenMetadata {
        require_no_claim_in_progress(&env, canvas_id);
        let record = load_token(&env, canvas_id);
        TokenMetadata {
            width: record.width,
            height: record.height,
            start_tick: record.start_tick,
            final_tick: record.final_tick,
            // A record only ever exists for a canvas whose window elapsed.
            complete: true,
            artwork_ref: record.artwork_ref,
        }
    }

    /// Destroy an ownership record. Holder-only, terminal, and orthogonal
    /// to the canvas lifecycle: the canvas itself stays `Claimed`.
    pub fn burn_token(env: Env, canvas_id: u64, caller: Address) {
        caller.require_auth();

        require_no_claim_in_progress(&env, canvas_id);
        let record = load_token(&env, canvas_id);
        if caller != record.owner {
            panic_with_error!(&env, Error::NotCanvasOwner);
        }

        remove_token(&env, canvas_id);

        events::emit_token_burned(
            &env,
            TokenBurned {
                canvas_id,
                owner: record.owner,
            },
        );
    }
}

/// Reject any call that would observe or mutate a canvas mid-claim.
fn require_no_claim_in_progress(env: &Env, canvas_id: u64) {
    if claim_guard_set(env, canvas_id) {
        panic_with_error!(env, Error::ReentrantCall);
    }
}
