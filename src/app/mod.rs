// ArticleShelf - app/mod.rs
//
// Application layer: orchestration, state management, import and load
// lifecycles.
// Dependencies: core and platform layers.
// Must NOT depend on: ui.

pub mod import;
pub mod loader;
pub mod state;
