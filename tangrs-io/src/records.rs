use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tangrs_core::{SequenceCollection, SequenceRecord};

use crate::ensure_parent;

pub const RECORDS_TSV_HEADER: &str = "id\tname\tsequence";

pub trait CollectionWrite {
    ///
    /// Write the records as a tab separated table with a header line.
    ///
    /// # Arguments
    /// - writer: where to write the table
    fn write_tsv_to<W: Write>(&self, writer: W) -> std::io::Result<()>;

    ///
    /// Write the records as a JSON array of `{id, name, sequence}` objects.
    ///
    /// # Arguments
    /// - writer: where to write the document
    fn write_json_to<W: Write>(&self, writer: W) -> std::io::Result<()>;

    ///
    /// Write the records to disk as a tab separated table
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_tsv<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        ensure_parent(path)?;
        self.write_tsv_to(BufWriter::new(File::create(path)?))
    }

    ///
    /// Write the records to disk as JSON
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_json<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        ensure_parent(path)?;
        self.write_json_to(BufWriter::new(File::create(path)?))
    }
}

impl CollectionWrite for SequenceCollection {
    fn write_tsv_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", RECORDS_TSV_HEADER)?;
        for record in self.iter() {
            writeln!(writer, "{}", record.as_string())?;
        }
        writer.flush()
    }

    fn write_json_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        let records: Vec<SequenceRecord> = self.iter().collect();
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writeln!(writer)?;
        writer.flush()
    }
}
