//! trackwork -- a grid of track pieces, directional connections between
//! them, and a continuous coordinate for things that roll along them.
//!
//! The track network is a mutable graph: pieces occupy grid cells, each
//! piece owns directed connections between its cell boundaries, and a
//! [`track::TrackPosition`] travels smoothly across piece boundaries,
//! resolving switches and one-way pieces by direction. Structural
//! invariants are re-checked after every mutation, with a pausable
//! scope for composite edits.

pub mod cars;
pub mod grid;
pub mod sim;
pub mod track;
pub mod visuals;


pub type AppResult<T> = Result<T, failure::Error>;
