use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

use tangrs_core::RunSpec;

use crate::ensure_parent;

pub trait RunSpecWrite {
    ///
    /// Write every run spec's argument string to disk, one per line.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_conditions<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;

    ///
    /// Write the conditions file gzip'd
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_conditions_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()>;
}

impl RunSpecWrite for [RunSpec] {
    fn write_conditions<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        ensure_parent(path)?;

        let mut file = BufWriter::new(File::create(path)?);
        for spec in self {
            writeln!(file, "{}", spec.command_arguments)?;
        }
        file.flush()?;

        tracing::debug!(path = %path.display(), specs = self.len(), "wrote conditions file");
        Ok(())
    }

    fn write_conditions_gz<T: AsRef<Path>>(&self, path: T) -> std::io::Result<()> {
        let path = path.as_ref();
        ensure_parent(path)?;

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());
        for spec in self {
            writeln!(encoder, "{}", spec.command_arguments)?;
        }
        encoder.finish()?.flush()?;

        tracing::debug!(path = %path.display(), specs = self.len(), "wrote conditions file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Read;

    use flate2::read::GzDecoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use tangrs_core::{ConditionRegistry, build_run_specs, extract_records};

    #[fixture]
    fn specs() -> Vec<RunSpec> {
        let collection = extract_records(&["alpha,ACDEFG", "beta,HIKLMN"]).unwrap();
        build_run_specs(&collection, &ConditionRegistry::builtin(), "acidic").unwrap()
    }

    #[rstest]
    fn test_write_conditions(specs: Vec<RunSpec>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested").join("conditions.txt");

        assert!(specs.write_conditions(&path).is_ok());

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "alpha nt=\"N\" ct=\"N\" ph=\"4\" te=\"298\" io=\"0.1\" seq=\"ACDEFG\"\n\
             beta nt=\"N\" ct=\"N\" ph=\"4\" te=\"298\" io=\"0.1\" seq=\"HIKLMN\"\n"
        );
    }

    #[rstest]
    fn test_write_conditions_gz(specs: Vec<RunSpec>) {
        let tempdir = tempfile::tempdir().unwrap();
        let plain = tempdir.path().join("conditions.txt");
        let gzipped = tempdir.path().join("conditions.txt.gz");

        specs.write_conditions(&plain).unwrap();
        specs.write_conditions_gz(&gzipped).unwrap();

        let mut decoded = String::new();
        GzDecoder::new(File::open(&gzipped).unwrap())
            .read_to_string(&mut decoded)
            .unwrap();

        assert_eq!(decoded, std::fs::read_to_string(&plain).unwrap());
    }
}
