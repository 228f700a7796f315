//! Angelscan Core — bar series, indicator library, and the screening gates.
//!
//! This crate contains everything needed to decide whether one symbol
//! matches the Volatility Contraction Pattern with a Fallen-Angel
//! relative-strength recovery:
//! - Domain types (bars, per-symbol series)
//! - Data layer (provider trait, Yahoo Finance client, exchange listings,
//!   universes, stock/benchmark alignment)
//! - Pure indicator functions (SMA, rolling extrema, rate of change,
//!   RS line, momentum composite)
//! - Gate evaluators and the short-circuit/exhaustive pipeline
//!
//! Orchestration across a universe lives in `angelscan-runner`.

pub mod data;
pub mod domain;
pub mod gates;
pub mod indicators;
pub mod params;
pub mod synthetic;
