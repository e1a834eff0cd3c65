//! Index sets for the arc-indexed routing model.
//!
//! Building is two-phase: [`NodeIndex`] is derived from the node sequence
//! alone, then [`NodeIndex::bind`] adds the vehicle and scenario sets to
//! produce an [`ArcFormulation`]. [`ModelInput`] bundles the result with
//! its inputs for the model builder.

mod arc;
mod input;

pub use arc::{ArcFormulation, NodeIndex};
pub use input::ModelInput;
