//! The gateway's XML dialect: an owned element tree, its reader and writer,
//! and the request/response envelopes built on top.

pub mod element;
pub mod entities;
pub mod request;
pub mod response;
pub mod serialize;
