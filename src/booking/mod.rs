pub mod entry;
pub mod store;
pub mod validator;
