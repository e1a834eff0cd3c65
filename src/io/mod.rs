//! Input files: the node sequence and the settings document.

mod nodes;
mod settings;

pub use nodes::{
    load_nodes, read_nodes, NodeFileConfig, DEFAULT_COORD_SCALE, DEFAULT_SERVICE_TIME,
};
pub use settings::Settings;
