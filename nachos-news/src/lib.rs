//! Upstream news API client for the Los Nachos Chipies website backend
//!
//! This crate talks to the external news service the site proxies:
//! - `client`: HTTP client for the list and by-id endpoints
//! - `video`: YouTube id extraction for embedded video players

pub mod client;
pub mod error;
pub mod video;

pub use client::{NewsApiClient, DEFAULT_BASE_URL};
pub use error::NewsError;
pub use video::extract_youtube_id;
