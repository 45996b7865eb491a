//! Reusable UI components

mod agency_card;
mod button;
mod input;
mod loading;

pub use agency_card::*;
pub use button::*;
pub use input::*;
pub use loading::*;
