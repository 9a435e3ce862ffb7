pub mod paths;
pub mod store;
pub mod validate;

pub use paths::{backup_path, runner_config_dir, settings_file};
pub use store::SettingsStore;
pub use validate::{validate_document, ValidationOutcome};
