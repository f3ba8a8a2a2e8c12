//! API Client
//!
//! HTTP communication with the Bittree backend.

pub mod client;

pub use client::*;
