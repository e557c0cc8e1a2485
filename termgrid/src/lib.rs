pub mod buffer;
pub mod event;
pub mod layout;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Canvas, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::Rect;
pub use terminal::Terminal;
pub use types::*;
