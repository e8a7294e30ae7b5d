pub mod config;
pub mod error;
pub mod fields;
pub mod paths;
pub mod prompt;
pub mod render;
pub mod scaffold;
pub mod templates;
pub mod values;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ScaffoldError};
pub use scaffold::Scaffold;
pub use templates::{MappingTable, TemplateSet, TemplateSource};
pub use values::{ManualInput, ScaffoldValues};
