pub mod mutual;
pub mod nth_level;
