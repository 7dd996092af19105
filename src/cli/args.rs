use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the resource/ocid list, one entry per line.
    // Collected as a list so the arity check (exactly one path) stays with
    // the driver, which owns the usage message.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Profile to read from the OCI config file.
    #[arg(long, env = "OCI_CLI_PROFILE", default_value = "DEFAULT")]
    pub profile: String,

    /// Location of the OCI config file (defaults to ~/.oci/config).
    #[arg(long, env = "OCI_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
}
