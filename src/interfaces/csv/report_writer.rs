use crate::domain::step::StepReport;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

/// Writes step reports as CSV (with a header row) or as JSON lines.
pub struct ReportWriter<W: Write> {
    sink: Sink<W>,
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

impl<W: Write> ReportWriter<W> {
    pub fn new(destination: W, format: ReportFormat) -> Self {
        let sink = match format {
            ReportFormat::Csv => Sink::Csv(csv::Writer::from_writer(destination)),
            ReportFormat::Json => Sink::Json(destination),
        };
        Self { sink }
    }

    pub fn write_report(&mut self, report: &StepReport) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(report)?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, report)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
