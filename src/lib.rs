//! Transit Graph - a directed weighted graph core for urban transit networks
//!
//! This crate models a transit network as stations connected by timed routes
//! and answers operational queries over it: shortest travel time, cycle
//! detection, strong connectivity and route-addition suggestions.

pub mod config;
pub mod core;
pub mod services;
pub mod storage;
