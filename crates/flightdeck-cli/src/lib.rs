pub mod cli;
pub mod common;

pub use cli::{build_cli_command, Cli, Commands};
pub use common::{resolve_data_path, OutputFormat, DEFAULT_DATA_FILE};
