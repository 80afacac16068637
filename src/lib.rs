//! Tavus Coach - Conversational video coaching demo
//!
//! This crate serves a landing page that launches a real-time video
//! conversation with a public speaking coach through the Tavus API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
