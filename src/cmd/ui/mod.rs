//! CLI-specific UI output and rendering modules

pub mod output;
pub mod render;

// Re-export commonly used items for convenience
pub use output::{Output, OutputMode};
