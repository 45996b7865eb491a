//! Page components

mod locator;

pub use locator::*;
