pub mod bessel;
pub mod constants;
pub mod error;
pub mod field;
pub mod frame;
pub mod geometry;
pub mod modes;
pub mod state;

pub use bessel::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use frame::*;
pub use geometry::*;
pub use modes::*;
pub use state::*;
