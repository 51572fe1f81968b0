pub mod entry;
pub mod path;
