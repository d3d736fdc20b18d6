use std::path::PathBuf;

use clap::Parser;

use notes_core::VERSION;

/// notestool - manage short notes in named collections
#[derive(Parser, Debug)]
#[command(name = "notestool")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Collection to open; it is created on the first write. Names that
    /// start with `-` go after `--`.
    #[arg(value_name = "COLLECTION_NAME")]
    pub args: Vec<String>,

    /// Path to the config file
    #[arg(long, env = "NOTESTOOL_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII symbols and borders only
    #[arg(long)]
    pub ascii: bool,
}

impl Cli {
    /// The collection to open, or `None` when usage should be printed
    /// instead: no name, more than one name, or the literal `help`.
    pub fn collection(&self) -> Option<&str> {
        match self.args.as_slice() {
            [name] if name != "help" => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Usage text printed instead of starting a session.
pub fn usage() -> String {
    [
        "",
        "Usage: notestool [OPTIONS] <COLLECTION_NAME>",
        "",
        "Examples:",
        "  notestool coding_ideas   # manage a collection called 'coding_ideas'",
        "  notestool work_notes     # manage a collection called 'work_notes'",
        "",
        "If the collection does not exist, it will be created automatically.",
        "Names starting with '-' must follow '--', e.g. notestool -- -draft",
        "Run `notestool --help` for the available options.",
    ]
    .join("\n")
}
