use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str =
    "type, payment, status, fraud_status, gateway_response, verification_result, amount";

/// Writes a steps CSV (header included) to a temporary file.
pub fn steps_file(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
