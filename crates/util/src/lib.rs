//! Small helpers shared by the Folio crates: path expansion, the user
//! preferences store and the platform mail composer.

pub mod mail;
pub mod path_processing;
pub mod preferences;

pub use mail::{MailError, open_mail_composer};
pub use path_processing::{APP_DIR_NAME, app_config_dir, expand_tilde};
pub use preferences::{PreferencesError, UserPreferences};
