//! Core types for the Los Nachos Chipies website backend
//!
//! This crate defines the shared data structures used across the backend:
//! the upstream news API schema, the display-oriented schema the site pages
//! render, and the category mapping between the two.

pub mod category;
pub mod news;

pub use category::{CategoryStyle, NewsCategory};
pub use news::{sort_newest_first, DisplayNewsItem, UpstreamNewsItem};
