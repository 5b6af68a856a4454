// Reading the states from the input file.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};
use snafu::prelude::*;

use crate::equity::*;

/// The location of the input data: a directory and a file name inside it.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResourceLocation {
    pub directory: String,
    pub raw_data_file: String,
}

impl Default for ResourceLocation {
    fn default() -> Self {
        ResourceLocation {
            directory: "data".to_string(),
            raw_data_file: "state_data.json".to_string(),
        }
    }
}

impl ResourceLocation {
    pub fn resource_file(&self) -> PathBuf {
        [self.directory.clone(), self.raw_data_file.clone()]
            .iter()
            .collect()
    }
}

/// Reads the states and computes their statistics.
pub fn load(location: &ResourceLocation) -> EquityIoResult<Dataset> {
    let p = location.resource_file();
    let path = p.as_path().display().to_string();
    info!("Attempting to read data file {:?}", path);
    let bytes = fs::read(&p).context(SourceUnreadableSnafu { path: path.clone() })?;
    decode(&bytes, &path)
}

/// Decodes the content of an input file. Only the states are read, the
/// statistics are always recomputed.
pub fn decode(bytes: &[u8], path: &str) -> EquityIoResult<Dataset> {
    let file: RecordFile = serde_json::from_slice(bytes).context(DecodeSnafu { path })?;
    info!("Read {} states from {:?}", file.records.len(), path);
    debug!("decode: records: {:?}", file.records);
    Dataset::new(file.records).context(ComputationSnafu {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location() {
        let p = ResourceLocation::default().resource_file();
        assert_eq!(p, PathBuf::from("data").join("state_data.json"));
    }

    #[test]
    fn decode_computes_statistics() {
        let dataset = decode(
            br#"{"States": [
                {"Name": "A", "Population": 100, "ElectoralVotes": 10},
                {"Name": "B", "Population": 200, "ElectoralVotes": 5, "Capital": "b"}
            ]}"#,
            "test.json",
        )
        .unwrap();
        assert_eq!(dataset.statistics().total_population, 300);
        assert_eq!(dataset.statistics().total_electoral_votes, 15);
        assert_eq!(dataset.statistics().average_population, 150.0);
        assert_eq!(dataset.records()[1].vote_equity, 0.0);
    }

    #[test]
    fn decode_ignores_input_equity() {
        let dataset = decode(
            br#"{"States": [{"Name": "A", "Population": 100, "ElectoralVotes": 10, "VoteEquity": 7.0},
                            {"Name": "B", "Population": 100, "ElectoralVotes": 10}]}"#,
            "test.json",
        )
        .unwrap()
        .calculate()
        .unwrap();
        assert_eq!(dataset.records()[0].vote_equity, 1.0);
    }

    #[test]
    fn decode_malformed() {
        let res = decode(b"{\"States\": [", "test.json");
        assert!(matches!(res, Err(EquityIoError::Decode { .. })));
    }

    #[test]
    fn decode_wrong_shape() {
        let res = decode(
            br#"{"States": [{"Name": "A", "Population": "many", "ElectoralVotes": 3}]}"#,
            "test.json",
        );
        assert!(matches!(res, Err(EquityIoError::Decode { .. })));
        let res = decode(br#"{"Territories": []}"#, "test.json");
        assert!(matches!(res, Err(EquityIoError::Decode { .. })));
        let res = decode(
            br#"{"States": [{"Name": "A", "Population": -4, "ElectoralVotes": 3}]}"#,
            "test.json",
        );
        assert!(matches!(res, Err(EquityIoError::Decode { .. })));
    }

    #[test]
    fn decode_total_overflow() {
        let res = decode(
            br#"{"States": [{"Name": "A", "Population": 18446744073709551615, "ElectoralVotes": 3},
                            {"Name": "B", "Population": 10, "ElectoralVotes": 3}]}"#,
            "test.json",
        );
        assert!(matches!(
            res,
            Err(EquityIoError::Computation {
                source: EquityError::TotalOverflow { .. }
            })
        ));
    }

    #[test]
    fn decode_no_states() {
        let res = decode(br#"{"States": []}"#, "test.json");
        assert!(matches!(
            res,
            Err(EquityIoError::Computation {
                source: EquityError::EmptyDataset
            })
        ));
    }

    #[test]
    fn load_bundled_data() {
        let location = ResourceLocation {
            directory: format!("{}/data", env!("CARGO_MANIFEST_DIR")),
            raw_data_file: "state_data.json".to_string(),
        };
        let dataset = load(&location).unwrap();
        assert_eq!(dataset.records().len(), 51);
        assert_eq!(dataset.statistics().total_electoral_votes, 538);

        let mut dataset = dataset.calculate().unwrap();
        dataset.sort_by_equity_descending();
        assert_eq!(dataset.records()[0].name, "Wyoming");
        assert_eq!(dataset.records()[50].name, "California");
        assert_eq!(dataset.rank(0), Some(51));
        assert_eq!(dataset.rank(50), Some(1));
    }
}
