//! # u-scenario
//!
//! Input preparation for scenario-based vehicle routing with stochastic
//! driver absences: availability scenarios with exact probabilities and the
//! index sets of an arc-indexed optimization model.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Node, Scenario, VehicleData, FleetParameters)
//! - [`io`] — Node file reader and settings document passthrough
//! - [`distance`] — Manhattan/Euclidean metric and distance matrix
//! - [`scenario`] — Availability scenario enumeration and observers
//! - [`formulation`] — Arc formulation index sets and the model input bundle
//! - [`error`] — Crate error type

pub mod distance;
pub mod error;
pub mod formulation;
pub mod io;
pub mod models;
pub mod scenario;

pub use error::{Error, Result};
