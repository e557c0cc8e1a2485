mod buffer;
mod canvas;
mod cell;

pub use buffer::Buffer;
pub use canvas::Canvas;
pub use cell::Cell;
