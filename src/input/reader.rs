use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "no such dataset file: {}",
            path.display()
        )));
    }
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(BufReader::new(
            file,
        )))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads the whole dataset into memory and strips a UTF-8 BOM when the
/// export tool left one behind. Dataset files are small static exports,
/// so buffering them completely keeps the CSV pass single-phase.
pub fn read_dataset_text(path: &Path) -> Result<String, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(strip_bom(&text).to_string())
}

pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Export tools around this dataset disagree on the separator; the
/// original exports use `;`, re-saves from spreadsheets use `,`. The
/// header line settles it.
pub fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or("");
    if header.contains(';') { b';' } else { b',' }
}
