pub mod command;
pub mod filesystem;
