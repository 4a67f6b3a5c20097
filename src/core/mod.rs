// ArticleShelf - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, app, or perform file/network I/O.

pub mod catalog;
pub mod collate;
pub mod export;
pub mod filter;
pub mod importer;
pub mod model;
pub mod paginate;
pub mod render;
pub mod timestamp;
pub mod url_norm;
