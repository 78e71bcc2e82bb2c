//! Input format detection and record extraction.
//!
//! The four supported layouts overlap (a FASTA header can contain spaces, a
//! `name sequence` line can contain a comma), so detection only looks at the
//! first line and tests the layouts in a fixed order:
//!
//! 1. FASTA, if the first line starts with `>`
//! 2. space delimited, if the first line contains a space
//! 3. csv, if the first line contains exactly one comma
//! 4. a raw list of sequences otherwise

use crate::consts::RECORD_MARKER;
use crate::errors::{Result, TangrsError};
use crate::models::collection::CollectionBuilder;
use crate::models::{InputFormat, SequenceCollection};
use crate::naming::display_name;

///
/// Classify an input by its first line.
///
pub fn detect_format(first_line: &str) -> InputFormat {
    if first_line.starts_with(RECORD_MARKER) {
        InputFormat::Fasta
    } else if first_line.contains(' ') {
        InputFormat::SpaceDelimited
    } else if first_line.matches(',').count() == 1 {
        InputFormat::Csv
    } else {
        InputFormat::RawList
    }
}

///
/// Detect the format of `lines` and extract every record from them.
///
/// # Arguments
/// - lines: the input, one entry per line, line terminators already stripped
///
/// # Errors
/// - [TangrsError::EmptyInput] if there are no lines at all
/// - [TangrsError::ParseError] for the first line that does not fit the detected format
///
pub fn extract_records<S: AsRef<str>>(lines: &[S]) -> Result<SequenceCollection> {
    let first_line = lines.first().ok_or(TangrsError::EmptyInput)?;
    let format = detect_format(first_line.as_ref());

    tracing::debug!(%format, lines = lines.len(), "detected input format");

    extract_with_format(lines, format)
}

///
/// Extract every record from `lines`, parsing them as `format` without detection.
///
pub fn extract_with_format<S: AsRef<str>>(
    lines: &[S],
    format: InputFormat,
) -> Result<SequenceCollection> {
    if lines.is_empty() {
        return Err(TangrsError::EmptyInput);
    }

    let collection = match format {
        InputFormat::Fasta => extract_fasta(lines),
        InputFormat::SpaceDelimited => extract_delimited(lines, format, |line| {
            line.split_once(' ')
                .ok_or("no space between name and sequence")
        }),
        InputFormat::Csv => extract_delimited(lines, format, |line| {
            match line.split_once(',') {
                Some((_, sequence)) if sequence.contains(',') => {
                    Err("more than one comma")
                }
                Some(fields) => Ok(fields),
                None => Err("no comma between name and sequence"),
            }
        }),
        InputFormat::RawList => Ok(extract_raw(lines)),
    }?;

    tracing::debug!(%format, records = collection.len(), "extraction finished");

    Ok(collection)
}

///
/// Multi-line FASTA: every marker line closes the record before it and opens a
/// new one. The pending record is flushed after the last line as well, so no
/// trailing marker is needed.
///
fn extract_fasta<S: AsRef<str>>(lines: &[S]) -> Result<SequenceCollection> {
    let mut builder = CollectionBuilder::new(InputFormat::Fasta);
    let mut current_name: Option<String> = None;
    let mut raw_sequence = String::new();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        if line.starts_with(RECORD_MARKER) {
            if let Some(name) = current_name.take()
                && !raw_sequence.is_empty()
            {
                builder.push(name, &raw_sequence);
            }
            raw_sequence.clear();
            current_name = Some(display_name(line));
        } else if current_name.is_some() {
            raw_sequence.push_str(line.trim());
        } else {
            return Err(TangrsError::parse(
                index,
                line,
                "sequence line before the first header",
            ));
        }
    }

    if let Some(name) = current_name
        && !raw_sequence.is_empty()
    {
        builder.push(name, &raw_sequence);
    }

    Ok(builder.finish())
}

///
/// One `(name, sequence)` pair per line, split by `split`.
///
fn extract_delimited<S, F>(
    lines: &[S],
    format: InputFormat,
    split: F,
) -> Result<SequenceCollection>
where
    S: AsRef<str>,
    F: Fn(&str) -> std::result::Result<(&str, &str), &'static str>,
{
    let mut builder = CollectionBuilder::new(format);

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let (name, sequence) = split(line).map_err(|reason| TangrsError::parse(index, line, reason))?;
        builder.push(display_name(name), sequence.trim());
    }

    Ok(builder.finish())
}

///
/// Every line is one sequence, named after its own id.
///
fn extract_raw<S: AsRef<str>>(lines: &[S]) -> SequenceCollection {
    let mut builder = CollectionBuilder::new(InputFormat::RawList);

    for line in lines {
        let name = builder.next_id().to_string();
        builder.push(name, line.as_ref());
    }

    builder.finish()
}
