use clap::Parser;

/// Ranks the states by the weight of their electoral votes relative to their population.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (directory path) The directory containing the input data.
    #[clap(short, long, value_parser, default_value = "data")]
    pub directory: String,

    /// (file name) The JSON file with the population and the electoral votes of each state, relative to
    /// the data directory. It must contain a "States" list with "Name", "Population" and "ElectoralVotes" for each entry.
    #[clap(short, long, value_parser, default_value = "state_data.json")]
    pub input: String,

    /// (file path) Where the JSON snapshot of the states and of the aggregates is written.
    #[clap(short, long, value_parser, default_value = "stateequity.json")]
    pub out: String,

    /// (file path) A reference snapshot in JSON format. If provided, stateequity will
    /// check that the computed snapshot matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
