mod color;

pub use color::{Color, Hsl};
