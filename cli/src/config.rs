use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pawflow", author, version, about)]
pub struct Config {
    /// Path to an API description in json format.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Path to a [pawflow::serializer::Config] in json format.
    ///
    /// Any field left out keeps its default.
    #[arg(long)]
    pub serializer_config: Option<PathBuf>,

    /// File to write the recorded host objects to. Written to stdout if not supplied.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the recording as a single line of json instead of pretty-printing it.
    #[arg(long)]
    pub compact: bool,
}
