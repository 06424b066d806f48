pub mod color;
pub mod legend;
pub mod scale;
pub mod style;

// Symbology crate: pure styling primitives only.
pub use color::*;
pub use legend::*;
pub use scale::*;
pub use style::*;
