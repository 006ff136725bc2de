//! Trivia query core: question listing, search, category filtering and quiz
//! selection over pluggable stores.

pub mod categories;
pub mod error;
pub mod memory;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;
