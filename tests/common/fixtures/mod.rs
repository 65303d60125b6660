mod config;
mod obstacles;

// Re-export test fixtures
pub use config::*;
pub use obstacles::*;
