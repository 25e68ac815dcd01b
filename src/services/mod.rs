pub mod projection;
pub mod valuator;

pub use projection::*;
pub use valuator::*;
