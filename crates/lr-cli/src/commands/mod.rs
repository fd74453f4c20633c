pub mod cast;
pub mod hour;
pub mod lookup;
pub mod tables;
