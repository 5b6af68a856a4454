mod model;
pub mod builder;

use log::{debug, info};

pub use crate::model::*;

/// The aggregate values of a set of records.
///
/// They are computed once from the records and never updated afterwards, so
/// that every equity calculation sees the same totals.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Statistics {
    pub total_population: u64,
    pub total_electoral_votes: u64,
    pub average_population: f64,
    pub average_electoral_votes: f64,
}

impl Statistics {
    /// Computes the totals and then the averages of the given records.
    ///
    /// Fails with [EquityError::EmptyDataset] if there are no records, and
    /// with [EquityError::TotalOverflow] if a total does not fit in a `u64`.
    pub fn compute(records: &[Record]) -> Result<Statistics, EquityError> {
        if records.is_empty() {
            return Err(EquityError::EmptyDataset);
        }
        let total_population = checked_total(records, "population", |r| r.population)?;
        let total_electoral_votes =
            checked_total(records, "electoral votes", |r| r.electoral_votes)?;
        let count = records.len() as f64;
        let stats = Statistics {
            total_population,
            total_electoral_votes,
            average_population: total_population as f64 / count,
            average_electoral_votes: total_electoral_votes as f64 / count,
        };
        info!(
            "Statistics over {} records: total population {}, total electoral votes {}",
            records.len(),
            stats.total_population,
            stats.total_electoral_votes
        );
        Ok(stats)
    }

    /// The share of the total population.
    pub fn population_rate(&self, population: u64) -> f64 {
        population as f64 / self.total_population as f64
    }

    /// The share of the total electoral votes.
    pub fn electoral_vote_rate(&self, electoral_votes: u64) -> f64 {
        electoral_votes as f64 / self.total_electoral_votes as f64
    }

    /// The vote equity of a record:
    ///
    /// ```text
    /// (electoral_votes / total_electoral_votes) / (population / total_population)
    /// ```
    ///
    /// A value above 1 means that each person in this record weighs more than
    /// average in the electoral vote.
    pub fn equity(&self, record: &Record) -> Result<f64, EquityError> {
        if self.total_electoral_votes == 0 {
            return Err(EquityError::ZeroTotal {
                field: "electoral votes",
            });
        }
        if self.total_population == 0 {
            return Err(EquityError::ZeroTotal {
                field: "population",
            });
        }
        if record.population == 0 {
            return Err(EquityError::ZeroPopulation {
                name: record.name.clone(),
            });
        }
        let ev_rate = self.electoral_vote_rate(record.electoral_votes);
        Ok(ev_rate / self.population_rate(record.population))
    }

    /// The average number of electoral votes per person.
    pub fn average_vote_ratio(&self) -> f64 {
        self.average_electoral_votes / self.average_population
    }
}

fn checked_total(
    records: &[Record],
    field: &'static str,
    value: impl Fn(&Record) -> u64,
) -> Result<u64, EquityError> {
    records
        .iter()
        .try_fold(0u64, |acc, r| acc.checked_add(value(r)))
        .ok_or(EquityError::TotalOverflow { field })
}

/// An ordered collection of records, along with their statistics.
///
/// The records cannot be added or removed after construction.
#[derive(PartialEq, Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    statistics: Statistics,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Result<Dataset, EquityError> {
        let statistics = Statistics::compute(&records)?;
        Ok(Dataset {
            records,
            statistics,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Computes the equity of every record, keeping the original order.
    pub fn calculate(self) -> Result<Dataset, EquityError> {
        let statistics = self.statistics;
        let records = self
            .records
            .into_iter()
            .map(|r| {
                let vote_equity = statistics.equity(&r)?;
                debug!("calculate: {}: {}", r.name, vote_equity);
                Ok(Record { vote_equity, ..r })
            })
            .collect::<Result<Vec<Record>, EquityError>>()?;
        Ok(Dataset {
            records,
            statistics,
        })
    }

    /// Sorts the records from the highest equity to the lowest.
    ///
    /// Records with the same equity may come in any order.
    pub fn sort_by_equity_descending(&mut self) {
        self.records.sort_by(|a, b| b.vote_equity.total_cmp(&a.vote_equity));
    }

    /// The rank of the record at position `index` in the current order.
    ///
    /// The first record gets the number of records as its rank and the last
    /// record gets 1. Returns `None` if `index` is not a valid position.
    pub fn rank(&self, index: usize) -> Option<usize> {
        if index < self.records.len() {
            Some(self.records.len() - index)
        } else {
            None
        }
    }

    /// One `<rank>,<name>,<equity>` line per record, in the current order.
    pub fn render(&self) -> String {
        let ranks = (1..=self.records.len()).rev();
        self.records
            .iter()
            .zip(ranks)
            .map(|(r, rank)| format!("{},{}\n", rank, r.render()))
            .collect()
    }

    /// The compact JSON snapshot of the records and of the statistics.
    pub fn serialize(&self) -> Result<Vec<u8>, EquityError> {
        serde_json::to_vec(&self.snapshot())
            .map_err(|e| EquityError::Serialization(e.to_string()))
    }

    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            records: &self.records,
            total_population: self.statistics.total_population,
            total_electoral_votes: self.statistics.total_electoral_votes,
            average_population: self.statistics.average_population,
            average_electoral_votes: self.statistics.average_electoral_votes,
        }
    }
}
