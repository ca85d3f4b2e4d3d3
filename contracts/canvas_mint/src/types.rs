//! # Types
//!
//! Shared data structures used across all modules of the canvas ledger.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Canvas` is internally stored as two separate ledger entries:
//!
//! - [`CanvasConfig`] — written once at creation; never mutated.
//! - [`CanvasState`] — written on pixel writes, on lazy completion, and on
//!   claim.
//!
//! Pixel writes are the high-frequency path, and each one touches
//! `last_write_tick`. Keeping the mutable state entry small means those
//! writes never rewrite the full canvas record. The public API exposes the
//! reconstructed [`Canvas`] struct for convenience.
//!
//! ### Status as a Finite-State Machine
//!
//! [`CanvasStatus`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Open ──► Complete ──► Claimed
//! ```
//!
//! `Open → Complete` is derived from the ledger tick and applied lazily by
//! every touching call; `Complete → Claimed` happens exactly once, inside
//! `claim`. There are no backward transitions and no transitions out of
//! `Claimed`.

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle status of a canvas.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CanvasStatus {
    /// Accepting pixel writes from anyone.
    Open,
    /// Time window elapsed; frozen, waiting for the creator to claim.
    Complete,
    /// Claimed by its creator; an [`OwnershipRecord`] exists (or existed).
    Claimed,
}

/// Immutable canvas configuration, written once at creation.
///
/// Stored separately from mutable state so that the frequent pixel-write
/// path only rewrites the small [`CanvasState`] entry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanvasConfig {
    pub id: u64,
    pub creator: Address,
    pub width: u32,
    pub height: u32,
    /// Ledger sequence at creation; start of the painting window.
    pub created_at_tick: u32,
    /// Window length in ticks. The canvas accepts writes while
    /// `tick < created_at_tick + max_duration_ticks`.
    pub max_duration_ticks: u32,
}

/// Mutable canvas state, kept small.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanvasState {
    pub status: CanvasStatus,
    /// Tick of the most recent accepted pixel write (creation tick if none).
    /// Frozen once the canvas leaves `Open`.
    pub last_write_tick: u32,
    /// Number of distinct coordinates ever explicitly painted. Repainting a
    /// coordinate does not change it.
    pub painted_count: u32,
    /// Opaque content identifier for the rendered artwork. Empty until
    /// claim; set exactly once.
    pub artwork_ref: String,
}

/// Full representation of a canvas.
///
/// Used as the public API return type; reconstructed internally from the
/// split `CanvasConfig` + `CanvasState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Canvas {
    /// Unique identifier (auto-incremented, never reused).
    pub id: u64,
    /// Address that created the canvas; the only address allowed to claim.
    pub creator: Address,
    pub width: u32,
    pub height: u32,
    pub created_at_tick: u32,
    pub max_duration_ticks: u32,
    pub status: CanvasStatus,
    pub last_write_tick: u32,
    pub painted_count: u32,
    pub artwork_ref: String,
}

impl Canvas {
    /// Reassemble the public view from its two storage entries.
    pub fn from_parts(config: CanvasConfig, state: CanvasState) -> Self {
        Canvas {
            id: config.id,
            creator: config.creator,
            width: config.width,
            height: config.height,
            created_at_tick: config.created_at_tick,
            max_duration_ticks: config.max_duration_ticks,
            status: state.status,
            last_write_tick: state.last_write_tick,
            painted_count: state.painted_count,
            artwork_ref: state.artwork_ref,
        }
    }
}

/// The minted, non-fungible ownership record for a claimed canvas.
///
/// Written exactly once, at claim time; never mutated afterwards. Burning
/// removes the entry outright.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipRecord {
    pub canvas_id: u64,
    pub owner: Address,
    pub width: u32,
    pub height: u32,
    pub start_tick: u32,
    pub max_duration_ticks: u32,
    /// `last_write_tick` at the moment of claim.
    pub final_tick: u32,
    pub artwork_ref: String,
}

/// Immutable token descriptor served to external renderers.
///
/// The field set is a stable contract with off-chain tooling; renaming or
/// reordering fields breaks consumers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub width: u32,
    pub height: u32,
    pub start_tick: u32,
    pub final_tick: u32,
    pub complete: bool,
    pub artwork_ref: String,
}
