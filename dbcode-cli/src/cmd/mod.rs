pub mod differences;
pub mod encode;
pub mod params;
pub mod rules;
