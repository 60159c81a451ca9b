pub mod brush;
pub mod camera;
pub mod constants;
pub mod error;
pub mod field;
pub mod forces;
pub mod gather;
pub mod params;
pub mod particles;
pub mod pointer;
pub mod sim;
pub mod tween;
pub mod vortex;

pub use brush::*;
pub use camera::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use gather::*;
pub use params::*;
pub use particles::*;
pub use pointer::*;
pub use sim::*;
pub use tween::*;
pub use vortex::*;
