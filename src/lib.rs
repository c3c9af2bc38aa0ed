//! Clean Blog library.
//!
//! A server-rendered blog publishing tool: posts live in a single-file
//! SQLite database and are rendered through maud templates.

pub mod components;
pub mod config;
pub mod db;
pub mod forms;
pub mod web;
