pub mod entities;
pub mod labels;
