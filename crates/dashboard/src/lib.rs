//! Salesboard Dashboard library.
//!
//! This crate provides the dashboard functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod charts;
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod routes;
pub mod state;
pub mod views;
