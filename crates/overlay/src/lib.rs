//! The earthquake overlay: styled circle markers derived from feed records,
//! the map configuration handed to the widget, and the JSON wire shapes for
//! both.

pub mod geojson;
pub mod map;
pub mod marker;

pub use geojson::*;
pub use map::*;
pub use marker::*;
