mod cursor;
mod cursor_mut;

pub use cursor::*;
pub use cursor_mut::*;
