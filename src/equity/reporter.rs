// Text report, snapshot file and comparison with a reference snapshot.

use std::fs;

use log::{debug, info, warn};
use serde_json::Value as JSValue;
use snafu::prelude::*;
use text_diff::print_diff;

use crate::equity::*;

/// The average electoral votes and the average population on one line, then
/// their ratio, with 8 decimal places.
pub fn summary(stats: &Statistics) -> String {
    format!(
        "{:.8} {:.8}\n{:.8}",
        stats.average_electoral_votes,
        stats.average_population,
        stats.average_vote_ratio()
    )
}

/// Everything printed on the standard output for a ranked dataset: the
/// report, an empty line, the message of a failed snapshot write if any, and
/// the summary lines.
pub fn report_text(dataset: &Dataset, sink_error: Option<&EquityIoError>) -> String {
    let mut text = format!("{}\n", dataset.render());
    if let Some(e) = sink_error {
        text.push_str(&format!("{}\n", e));
    }
    text.push_str(&summary(dataset.statistics()));
    text.push('\n');
    text
}

pub fn write_snapshot(dataset: &Dataset, out: &str) -> EquityIoResult<()> {
    let bytes = dataset.serialize().context(ComputationSnafu {})?;
    debug!("write_snapshot: {} bytes to {:?}", bytes.len(), out);
    fs::write(out, bytes).context(SinkWriteSnafu { path: out })
}

pub fn read_reference(path: &str) -> EquityIoResult<JSValue> {
    let contents = fs::read_to_string(path).context(ReadingReferenceSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingReferenceSnafu { path })?;
    Ok(js)
}

/// Compares the snapshot of the dataset with a reference snapshot.
///
/// Both sides are normalized through a JSON value before being printed, so
/// that the key order and the whitespace of the reference do not matter.
pub fn check_reference(dataset: &Dataset, reference_path: &str) -> EquityIoResult<()> {
    let summary_ref = read_reference(reference_path)?;
    info!("Comparing with reference {:?}", reference_path);
    let pretty_ref = serde_json::to_string_pretty(&summary_ref).context(EncodingSnafu {})?;

    let bytes = dataset.serialize().context(ComputationSnafu {})?;
    let computed: JSValue = serde_json::from_slice(&bytes).context(EncodingSnafu {})?;
    let pretty_computed = serde_json::to_string_pretty(&computed).context(EncodingSnafu {})?;

    if pretty_ref != pretty_computed {
        warn!("Found differences with the reference snapshot");
        print_diff(pretty_ref.as_str(), pretty_computed.as_str(), "\n");
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snafu::IntoError;
    use vote_equity::builder::DatasetBuilder;

    fn two_states() -> Dataset {
        let mut builder = DatasetBuilder::new();
        builder.add_record("A", 100, 10);
        builder.add_record("B", 200, 5);
        let mut dataset = builder.build().unwrap().calculate().unwrap();
        dataset.sort_by_equity_descending();
        dataset
    }

    #[test]
    fn summary_lines() {
        let dataset = two_states();
        assert_eq!(
            summary(dataset.statistics()),
            "7.50000000 150.00000000\n0.05000000"
        );
    }

    #[test]
    fn full_report_layout() {
        let dataset = two_states();
        assert_eq!(
            report_text(&dataset, None),
            "2,A,2.000000\n1,B,0.500000\n\n7.50000000 150.00000000\n0.05000000\n"
        );
    }

    #[test]
    fn full_report_layout_with_sink_error() {
        let dataset = two_states();
        let e = SinkWriteSnafu { path: "out.json" }.into_error(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(
            report_text(&dataset, Some(&e)),
            "2,A,2.000000\n1,B,0.500000\n\nCould not write to file: out.json\n\
             7.50000000 150.00000000\n0.05000000\n"
        );
    }

    #[test]
    fn reference_key_order_does_not_matter() {
        let dataset = two_states();
        let reference_p = std::env::temp_dir().join(format!(
            "stateequity-{}-reference_key_order.json",
            std::process::id()
        ));
        let reference = r#"{
            "AverageElectoralVotes": 7.5,
            "AveragePopulation": 150.0,
            "TotalElectoralVotes": 15,
            "TotalPopulation": 300,
            "States": [
                {"VoteEquity": 2.0, "ElectoralVotes": 10, "Population": 100, "Name": "A"},
                {"Name": "B", "Population": 200, "ElectoralVotes": 5, "VoteEquity": 0.5}
            ]
        }"#;
        fs::write(&reference_p, reference).unwrap();
        check_reference(&dataset, reference_p.to_str().unwrap()).unwrap();
    }

    #[test]
    fn missing_reference() {
        let res = check_reference(&two_states(), "/nonexistent/stateequity-reference.json");
        assert!(matches!(res, Err(EquityIoError::ReadingReference { .. })));
    }
}
