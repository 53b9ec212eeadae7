pub mod csv;
pub mod xml;
