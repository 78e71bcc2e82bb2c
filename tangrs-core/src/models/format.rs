use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

/// The layouts an input file can be in. Detection tests them in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// `>` header lines, each followed by any number of sequence lines.
    Fasta,
    /// `name sequence`, split on the first space.
    #[serde(rename = "space")]
    SpaceDelimited,
    /// `name,sequence`
    Csv,
    /// One bare sequence per line.
    #[serde(rename = "raw")]
    RawList,
}

impl Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Fasta => write!(f, "fasta"),
            InputFormat::SpaceDelimited => write!(f, "space"),
            InputFormat::Csv => write!(f, "csv"),
            InputFormat::RawList => write!(f, "raw"),
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" | "fa" => Ok(InputFormat::Fasta),
            "space" => Ok(InputFormat::SpaceDelimited),
            "csv" => Ok(InputFormat::Csv),
            "raw" => Ok(InputFormat::RawList),
            _ => Err(format!("Invalid input format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(InputFormat::Fasta)]
    #[case(InputFormat::SpaceDelimited)]
    #[case(InputFormat::Csv)]
    #[case(InputFormat::RawList)]
    fn test_display_parses_back(#[case] format: InputFormat) {
        assert_eq!(InputFormat::from_str(&format.to_string()), Ok(format));
    }

    #[rstest]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(InputFormat::from_str("FASTA"), Ok(InputFormat::Fasta));
        assert_eq!(InputFormat::from_str("fa"), Ok(InputFormat::Fasta));
    }

    #[rstest]
    fn test_from_str_rejects_unknown() {
        assert!(InputFormat::from_str("tsv").is_err());
    }
}
