pub mod assistant;
pub mod errors;
pub mod history;
pub mod interpret;
pub mod key_manager;
pub mod models;
pub mod prompt_template;
pub mod providers;
