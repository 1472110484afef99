//! Command implementations for font-cli

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod preview;

pub use add::{AddOptions, run_add};
pub use config::run_config_show;
pub use delete::run_delete;
pub use edit::run_edit;
pub use list::run_list;
