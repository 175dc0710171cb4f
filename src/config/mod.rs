//! Configuration for snaprotate
//!
//! Finding the profile definition file and loading the profiles it defines.

pub mod discovery;
pub mod loader;

pub use discovery::find_definition_file;
pub use loader::{load_profiles, parse_profiles, profile_template, ProfileValidationError};
