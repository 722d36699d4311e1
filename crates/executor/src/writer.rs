use csv::Writer;
use std::fs::File;
use std::io;
use std::path::Path;

use super::error::Error;
use super::runner::PathReport;

/// Writes report rows as CSV with a header line.
pub fn write_reports<W: io::Write>(out: W, reports: &[PathReport]) -> Result<(), Error> {
    let mut wtr = Writer::from_writer(out);
    for report in reports {
        wtr.serialize(report)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the report to `path`, or to stdout when no path is given.
pub fn write_reports_to(path: Option<&Path>, reports: &[PathReport]) -> Result<(), Error> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            write_reports(file, reports)?;
            tracing::info!(path = %path.display(), rows = reports.len(), "Report written");
        }
        None => write_reports(io::stdout().lock(), reports)?,
    }
    Ok(())
}
