pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod output;
pub mod parser;
pub mod reporter;
pub mod sbom;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, EffectiveConfig};
pub use error::{Result, SbomError};
pub use output::{export, output_filename};
pub use parser::{ModuleCall, load_module};
pub use reporter::Reporter;
pub use sbom::{ModuleInfo, Sbom, SbomBuilder, SourceKind};
