// ArticleShelf - ui/panels/mod.rs

pub mod about;
pub mod pagination;
pub mod search;
pub mod table;
