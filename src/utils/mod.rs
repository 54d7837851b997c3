pub mod date;
pub mod table;
pub mod text;

pub use text::capitalize;
