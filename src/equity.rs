use log::{info, warn};
use snafu::prelude::*;

use vote_equity::*;

pub mod loader;
pub mod reporter;

use crate::equity::loader::*;
use crate::equity::reporter::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum EquityIoError {
    #[snafu(display("File error: could not read {path}: {source}"))]
    SourceUnreadable {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Could not decode the states in {path}: {source}"))]
    Decode {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Could not compute the vote equity"))]
    Computation { source: EquityError },
    #[snafu(display("Could not encode the snapshot"))]
    Encoding { source: serde_json::Error },
    #[snafu(display("Could not write to file: {path}"))]
    SinkWrite {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Could not read the reference file {path}"))]
    ReadingReference {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Could not parse the reference file {path}"))]
    ParsingReference {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Difference detected between the computed snapshot and the reference {path}"))]
    ReferenceMismatch { path: String },
}

pub type EquityIoResult<T> = Result<T, EquityIoError>;

/// Where to read from and where to write to.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RunSettings {
    pub location: ResourceLocation,
    pub out: String,
    pub reference: Option<String>,
}

impl Default for RunSettings {
    fn default() -> Self {
        RunSettings {
            location: ResourceLocation::default(),
            out: "stateequity.json".to_string(),
            reference: None,
        }
    }
}

/// Loads the states, computes and ranks their equity, prints the report and
/// writes the snapshot.
///
/// Failing to write the snapshot is reported but does not stop the run.
pub fn run_report(settings: &RunSettings) -> EquityIoResult<()> {
    let dataset = load(&settings.location)?;
    let mut dataset = dataset.calculate().context(ComputationSnafu {})?;
    dataset.sort_by_equity_descending();

    let sink_error = match write_snapshot(&dataset, &settings.out) {
        Ok(()) => {
            info!("Snapshot written to {:?}", settings.out);
            None
        }
        Err(e @ EquityIoError::SinkWrite { .. }) => {
            warn!("run_report: {:?}", e);
            Some(e)
        }
        Err(e) => return Err(e),
    };

    print!("{}", report_text(&dataset, sink_error.as_ref()));

    if let Some(reference_p) = &settings.reference {
        check_reference(&dataset, reference_p)?;
    }
    Ok(())
}
