//! Newsdeck - a news reading web app
//!
//! This crate fetches articles from a NewsAPI-compatible backend and renders
//! them server-side as a paginated, searchable card layout.

pub mod config;
pub mod fetcher;
pub mod routes;
pub mod timefmt;
