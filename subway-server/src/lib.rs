//! Subway line manager.
//!
//! Keeps each line's stations as one ordered chain of sections and lets
//! clients extend, split and shorten that chain over HTTP.

pub mod config;
pub mod domain;
pub mod lines;
pub mod service;
pub mod stations;
pub mod web;
