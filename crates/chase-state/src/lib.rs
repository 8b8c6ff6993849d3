//! `chase-state` — the read-only world view consumed by enemy controllers.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`maze`]     | `MazeQuery` trait — the external pathfinding capability     |
//! | [`snapshot`] | `Snapshot<'a>`, `HeroView`, `EnemyView`, `Corner`           |
//!
//! # Design notes
//!
//! The maze graph, the shortest-path algorithm, and the rules engine all live
//! in the external game engine.  This crate only defines the *shape* of what
//! controllers may ask of them: an immutable [`Snapshot`] built once per tick
//! plus the [`MazeQuery`] capability threaded through it.  Controllers never
//! hold world state between ticks beyond their own bookkeeping — every query
//! goes through the snapshot parameter, so there is no process-wide state.

pub mod maze;
pub mod snapshot;


pub use maze::{MazeQuery, PathSense};
pub use snapshot::{Corner, EnemyView, HeroView, Snapshot};
