//! Client-side project feed: fetch the full project list from the
//! showcase API, filter it by search text and tag, and page through it.
pub mod config;
pub mod engine;
pub mod feed;
pub mod session;
