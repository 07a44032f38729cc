pub mod author;
pub mod format;
pub mod markup;
