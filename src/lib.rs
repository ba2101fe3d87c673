//! Crate root module declarations for the Parlor Chess rules engine.
//!
//! This file exposes the engine subsystems (board state, per-piece candidate
//! movement generation, check inspection, move-safety probing, and utility
//! helpers) so binaries, tests, and external drivers can import stable module
//! paths. The engine is purely in-memory and synchronous; presentation layers
//! consume it through return values only.

pub mod board;
pub mod board_cell;
pub mod check_inspection;
pub mod chess_errors;
pub mod game_log;
pub mod move_safety;
pub mod piece_record;
pub mod piece_register;
pub mod render_board;
pub mod team_setup;

pub mod movements {
    pub mod bishop;
    pub mod king;
    pub mod knight;
    pub mod pawn;
    pub mod queen;
    pub mod rook;
    pub mod shared;
}
