pub mod canned;
#[cfg(feature = "transport-http")]
pub mod http;
