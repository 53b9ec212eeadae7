pub mod create_gl_transaction;
pub mod get_api_session;
