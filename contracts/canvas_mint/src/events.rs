//! # Events
//!
//! Typed event payloads published by the ledger, one per externally
//! observable state change. Off-chain consumers (indexer, renderer) key off
//! the short topic symbol plus canvas ID and decode the struct payload.
//!
//! Topic layout: `(symbol_short!(name), canvas_id)`; payload is the full
//! event struct, which repeats `canvas_id` so the payload alone is
//! self-describing.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// A new canvas was opened for collaborative painting.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanvasCreated {
    pub canvas_id: u64,
    pub creator: Address,
    pub width: u32,
    pub height: u32,
    pub start_tick: u32,
    pub max_duration_ticks: u32,
}

/// A pixel was painted. Emitted on every accepted write, including
/// repainting a coordinate with the same color.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelColored {
    pub canvas_id: u64,
    pub editor: Address,
    pub x: u32,
    pub y: u32,
    pub color: u32,
}

/// A completed canvas was claimed and its ownership record minted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CanvasClaimed {
    pub canvas_id: u64,
    pub creator: Address,
}

/// An ownership record was destroyed by its holder.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenBurned {
    pub canvas_id: u64,
    pub owner: Address,
}

pub fn emit_canvas_created(env: &Env, event: CanvasCreated) {
    env.events()
        .publish((symbol_short!("created"), event.canvas_id), event.clone());
}

pub fn emit_pixel_colored(env: &Env, event: PixelColored) {
    env.events()
        .publish((symbol_short!("pixel"), event.canvas_id), event.clone());
}

pub fn emit_canvas_claimed(env: &Env, event: CanvasClaimed) {
    env.events()
        .publish((symbol_short!("claimed"), event.canvas_id), event.clone());
}

pub fn emit_token_burned(env: &Env, event: TokenBurned) {
    env.events()
        .publish((symbol_short!("burned"), event.canvas_id), event.clone());
}
