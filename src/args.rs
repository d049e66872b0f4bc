use clap::{ArgAction, Parser};

/// The usage line printed if neither `-i` nor a search query is given.
pub const USAGE: &str = "Usage: dropsearch [-i] [search query]";

/// Describes the available arguments in the CLI.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Index all bookmarks from Raindrop.io into Meilisearch.
    #[arg(short = 'i', long = "index")]
    pub index: bool,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// The search query.
    ///
    /// Multiple words are joined by a whitespace. Options are only read
    /// before the first word; everything after it belongs to the query.
    #[arg(num_args = 0.., value_name = "QUERY", trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl Args {
    /// The search query built from the positional arguments.
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}
