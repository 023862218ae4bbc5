pub mod board;
pub mod driver;
pub mod engine;
pub mod input;
pub mod pattern;
pub mod render;
pub mod rules;
