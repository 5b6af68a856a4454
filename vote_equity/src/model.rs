// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single state (or any other entity that is allocated electoral votes).
///
/// The field names follow the external JSON format.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Population")]
    pub population: u64,
    #[serde(rename = "ElectoralVotes")]
    pub electoral_votes: u64,
    /// Derived score. It is 0 until the equity has been calculated, and it is
    /// never read back from the input.
    #[serde(rename = "VoteEquity", default)]
    pub vote_equity: f64,
}

impl Record {
    pub fn new(name: &str, population: u64, electoral_votes: u64) -> Record {
        Record {
            name: name.to_string(),
            population,
            electoral_votes,
            vote_equity: 0.0,
        }
    }

    /// `<name>,<equity>` with 6 digits after the decimal point.
    pub fn render(&self) -> String {
        format!("{},{:.6}", self.name, self.vote_equity)
    }
}

/// The shape of the input file: only the records are present.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RecordFile {
    #[serde(rename = "States")]
    pub records: Vec<Record>,
}

// ******** Output data structures *********

/// The full snapshot of a dataset, as persisted after the calculation.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub(crate) struct Snapshot<'a> {
    #[serde(rename = "States")]
    pub records: &'a [Record],
    #[serde(rename = "TotalPopulation")]
    pub total_population: u64,
    #[serde(rename = "TotalElectoralVotes")]
    pub total_electoral_votes: u64,
    #[serde(rename = "AveragePopulation")]
    pub average_population: f64,
    #[serde(rename = "AverageElectoralVotes")]
    pub average_electoral_votes: f64,
}

/// Errors that prevent the equity from being computed.
#[derive(PartialEq, Debug, Clone)]
pub enum EquityError {
    /// There is no record, so no average can be taken.
    EmptyDataset,
    /// One of the totals is zero, so every rate would be undefined.
    ZeroTotal { field: &'static str },
    /// This record has no population: its population rate is zero.
    ZeroPopulation { name: String },
    /// The sum of a field over all the records does not fit in a `u64`.
    TotalOverflow { field: &'static str },
    Serialization(String),
}

impl Error for EquityError {}

impl Display for EquityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EquityError::EmptyDataset => {
                write!(f, "the dataset has no records, averages are undefined")
            }
            EquityError::ZeroTotal { field } => {
                write!(f, "the total {} is zero, rates are undefined", field)
            }
            EquityError::ZeroPopulation { name } => {
                write!(f, "{} has a population of zero, its equity is undefined", name)
            }
            EquityError::TotalOverflow { field } => {
                write!(f, "the total {} is too large to be computed", field)
            }
            EquityError::Serialization(msg) => write!(f, "could not serialize dataset: {}", msg),
        }
    }
}
