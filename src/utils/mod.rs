pub mod paths;

pub use paths::{SanitizeStrategy, project_display_name, sanitize_path};
