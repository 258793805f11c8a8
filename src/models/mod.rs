pub mod activity;
pub mod signup;

// Re-export all models for easier imports
pub use activity::*;
pub use signup::*;
