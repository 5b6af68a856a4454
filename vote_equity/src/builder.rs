pub use crate::model::*;
use crate::Dataset;

/// A builder for assembling a dataset in memory.
///
/// ```
/// pub use vote_equity::builder::DatasetBuilder;
/// # use vote_equity::EquityError;
///
/// let mut builder = DatasetBuilder::new();
/// builder.add_record("A", 100, 10);
/// builder.add_record("B", 200, 5);
///
/// let mut dataset = builder.build()?.calculate()?;
/// dataset.sort_by_equity_descending();
/// assert_eq!(dataset.render(), "2,A,2.000000\n1,B,0.500000\n");
///
/// # Ok::<(), EquityError>(())
/// ```
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    pub(crate) _records: Vec<Record>,
}

impl DatasetBuilder {
    pub fn new() -> DatasetBuilder {
        DatasetBuilder {
            _records: Vec::new(),
        }
    }

    /// Starts from an existing list of records, in order.
    pub fn records(self, records: &[Record]) -> DatasetBuilder {
        DatasetBuilder {
            _records: records.to_vec(),
        }
    }

    /// Adds a record. Its equity will be computed by [Dataset::calculate].
    pub fn add_record(&mut self, name: &str, population: u64, electoral_votes: u64) {
        self._records
            .push(Record::new(name, population, electoral_votes));
    }

    /// Computes the statistics and returns the dataset.
    ///
    /// Fails if no record was added.
    pub fn build(self) -> Result<Dataset, EquityError> {
        Dataset::new(self._records)
    }
}
