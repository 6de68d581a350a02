//! Community flea-market board client.
//!
//! Keeps a local copy of a remote bulletin board (posts and comments held in
//! a spreadsheet behind a script endpoint), refreshes it on a timer, and
//! serves the board as a local web page where users browse listings, open a
//! listing's detail view, write new listings and comment.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod constants;
pub mod controller;
pub mod fetcher;
pub mod model;
pub mod render;
pub mod store;
pub mod web;
