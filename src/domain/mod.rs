pub mod custom_field;
pub mod date;
pub mod gl_entry;
pub mod gl_transaction;
pub mod ports;
pub mod result;
pub mod session;
