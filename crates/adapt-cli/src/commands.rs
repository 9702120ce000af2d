pub mod chat;
pub mod configure;
pub mod history;
pub mod interpret;
pub mod transform;
