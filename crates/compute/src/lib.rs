pub mod algorithms;
pub mod engine;

pub use algorithms::mutual::mutual_followers;
pub use algorithms::nth_level::nth_level_followers;
pub use engine::ComputeEngine;
