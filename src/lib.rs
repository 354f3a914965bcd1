//! Song picker library - catalog loading, sampling, and fuzzy search.

pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod normalize;
pub mod sampling;
pub mod scoring;
pub mod search;
