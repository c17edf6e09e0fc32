//! CSV export of per-trial Monte Carlo samples for the charting layer.
//!
//! Format: one `# generated_at` comment line, then a header row and one row
//! per trial (`trial, actual_total, lateral, strokes`).

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;

use crate::engine::simulate::TrialSample;

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "export io error: {err}"),
            Self::Csv(err) => write!(f, "export csv error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Write samples as CSV to any writer. The caller owns buffering.
pub fn write_samples_csv<W: Write>(samples: &[TrialSample], mut writer: W) -> Result<(), ExportError> {
    writeln!(writer, "# generated_at: {}", Utc::now().to_rfc3339())?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["trial", "actual_total", "lateral", "strokes"])?;
    for (trial, sample) in samples.iter().enumerate() {
        csv_writer.write_record([
            trial.to_string(),
            format!("{:.3}", sample.actual_total),
            format!("{:.3}", sample.lateral),
            format!("{:.4}", sample.strokes),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write samples to a file at `path`.
pub fn export_samples_csv<P: AsRef<Path>>(samples: &[TrialSample], path: P) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_samples_csv(samples, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(actual_total: f64, lateral: f64, strokes: f64) -> TrialSample {
        TrialSample {
            actual_total,
            lateral,
            strokes,
        }
    }

    #[test]
    fn writes_header_comment_and_one_row_per_trial() {
        let samples = vec![sample(150.2, -3.1, 1.0), sample(141.9, 6.0, 2.85)];
        let mut out = Vec::new();
        write_samples_csv(&samples, &mut out).expect("csv write should succeed");

        let text = String::from_utf8(out).expect("csv output should be utf-8");
        let mut lines = text.lines();
        assert!(lines.next().unwrap_or_default().starts_with("# generated_at: "));
        assert_eq!(lines.next(), Some("trial,actual_total,lateral,strokes"));
        assert_eq!(lines.next(), Some("0,150.200,-3.100,1.0000"));
        assert_eq!(lines.next(), Some("1,141.900,6.000,2.8500"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_sample_set_still_writes_header() {
        let mut out = Vec::new();
        write_samples_csv(&[], &mut out).expect("csv write should succeed");
        let text = String::from_utf8(out).expect("csv output should be utf-8");
        assert_eq!(text.lines().count(), 2);
    }
}
