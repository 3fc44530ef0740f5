use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ormcheck binary.
#[derive(Parser, Debug)]
#[command(
    name = "ormcheck",
    version,
    about = "Checks that ORM association mappings agree with declared property types"
)]
pub struct CliArgs {
    /// Path to ormcheck.json. Defaults to ./ormcheck.json when present.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Tolerate a nullable property on a required association.
    /// `--allow-nullable-property-for-required-field=false` turns off a
    /// value set in the config file.
    #[arg(
        long = "allow-nullable-property-for-required-field",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub allow_nullable_property_for_required_field: Option<bool>,

    /// Bootstrap script that prints the object manager's metadata.
    #[arg(long = "object-manager-loader")]
    pub object_manager_loader: Option<PathBuf>,

    /// Program used to run the bootstrap script.
    #[arg(long = "bootstrap-interpreter")]
    pub bootstrap_interpreter: Option<String>,

    /// Interface to-many associations are exposed through.
    #[arg(long = "collection-interface")]
    pub collection_interface: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Analysis input files, or directories to search for them.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod tests;
