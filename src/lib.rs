// Library root
// -----------
// This crate exposes a small library surface for the watch-list CLI. The
// binary (`main.rs`) wires these modules together and runs the menu.
//
// Module responsibilities:
// - `config`: where the unseen and seen stores live.
// - `store`: loads and saves whole lists as JSON files.
// - `watchlist`: add / mark-seen / delete / random-pick over the stores.
// - `random`: the random source behind random-pick.
// - `console`: terminal and reader/writer front ends for prompts.
// - `ui`: the numbered menu loop that dispatches to `watchlist`.
//
// Everything from `watchlist` inward is free of terminal I/O, so it can be
// tested against temporary directories.
pub mod config;
pub mod console;
pub mod error;
pub mod random;
pub mod store;
pub mod ui;
pub mod watchlist;

pub use error::{Result, WatchlistError};
