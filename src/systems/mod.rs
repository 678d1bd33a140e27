pub mod filesystem;
pub mod search;
