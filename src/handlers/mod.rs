pub mod activities;
pub mod root;
pub mod test_helpers;

// Re-export all handlers for easier imports
pub use activities::*;
pub use root::*;
