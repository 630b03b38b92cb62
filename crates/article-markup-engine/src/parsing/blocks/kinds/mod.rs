pub mod heading;
pub mod list_item;
pub mod raw_line;

pub use heading::Heading;
pub use list_item::ListItem;
pub use raw_line::RawLine;
