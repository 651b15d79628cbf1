#![allow(non_snake_case)] // Allow non-snake_case identifiers (like matrix variable names)

//! # Ring Module
//!
//! Provides the [`Ring`] struct for arithmetic in Z_k, where k is the toggle cycle
//! length of a tile, plus dimension-checked matrix helpers.

pub mod math;
pub mod matrix_ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use math::Ring;
