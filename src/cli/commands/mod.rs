pub mod add;
pub mod display;
pub mod select;

pub use add::*;
pub use display::*;
pub use select::*;
