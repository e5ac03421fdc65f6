//! Report module - presenting the finished brand kit

pub mod brand_kit;

pub use brand_kit::*;
