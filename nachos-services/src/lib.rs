//! Service layer for the Los Nachos Chipies website backend
//!
//! Sits between the HTTP routes and the upstream news client: a small
//! time-windowed response cache plus the fetch orchestration around it.

pub mod news_cache;
pub mod news_service;

pub use news_cache::{NewsCache, REVALIDATE_WINDOW};
pub use news_service::NewsService;
