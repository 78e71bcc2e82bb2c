//! Named experimental conditions passed to the predictor with every sequence.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TangrsError};

pub const DEFAULT_CONDITION: &str = "default";
pub const ACIDIC_CONDITION: &str = "acidic";

///
/// Physicochemical parameters of one condition.
///
/// Terminus states use the predictor's one letter codes (`N` for a free
/// terminus, `A` for acetylated/amidated). Temperature is in Kelvin, ionic
/// strength in M.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ConditionParameters {
    pub n_terminus: String,
    pub c_terminus: String,
    pub ph: f64,
    pub temperature: f64,
    pub ionic_strength: f64,
}

impl ConditionParameters {
    pub fn render(&self) -> String {
        format!(
            "nt=\"{}\" ct=\"{}\" ph=\"{}\" te=\"{}\" io=\"{}\"",
            self.n_terminus, self.c_terminus, self.ph, self.temperature, self.ionic_strength
        )
    }
}

///
/// A named, immutable parameter string.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionTemplate {
    name: String,
    template: String,
}

impl ConditionTemplate {
    pub fn new(name: &str, parameters: &ConditionParameters) -> Self {
        ConditionTemplate {
            name: name.to_string(),
            template: parameters.render(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Display for ConditionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}

/// Shape of a condition config file: one `[conditions.<name>]` table per condition.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct ConditionConfig {
    pub conditions: BTreeMap<String, ConditionParameters>,
}

///
/// The table of known conditions. Fixed once built.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionRegistry {
    templates: BTreeMap<String, ConditionTemplate>,
}

impl ConditionRegistry {
    ///
    /// The conditions every registry starts with: `default` (pH 7.4) and `acidic` (pH 4).
    ///
    pub fn builtin() -> Self {
        let default = ConditionParameters {
            n_terminus: "N".to_string(),
            c_terminus: "N".to_string(),
            ph: 7.4,
            temperature: 298.0,
            ionic_strength: 0.1,
        };
        let acidic = ConditionParameters {
            ph: 4.0,
            ..default.clone()
        };

        let mut templates = BTreeMap::new();
        templates.insert(
            DEFAULT_CONDITION.to_string(),
            ConditionTemplate::new(DEFAULT_CONDITION, &default),
        );
        templates.insert(
            ACIDIC_CONDITION.to_string(),
            ConditionTemplate::new(ACIDIC_CONDITION, &acidic),
        );

        ConditionRegistry { templates }
    }

    ///
    /// The built-in conditions, with every entry of `config` added on top.
    /// A config entry with a built-in name replaces the built-in one.
    ///
    pub fn with_config(config: &ConditionConfig) -> Self {
        let mut registry = ConditionRegistry::builtin();
        for (name, parameters) in &config.conditions {
            registry
                .templates
                .insert(name.clone(), ConditionTemplate::new(name, parameters));
        }
        registry
    }

    ///
    /// Look up a condition by name.
    ///
    /// # Errors
    /// [TangrsError::UnknownCondition] if no condition has that name.
    pub fn get(&self, name: &str) -> Result<&ConditionTemplate> {
        self.templates
            .get(name)
            .ok_or_else(|| TangrsError::UnknownCondition(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        ConditionRegistry::builtin()
    }
}

impl TryFrom<&Path> for ConditionRegistry {
    type Error = TangrsError;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)
            .map_err(|e| TangrsError::ConditionConfig(format!("{}: {}", path.display(), e)))?;
        let config: ConditionConfig = toml::from_str(&toml_str)
            .map_err(|e| TangrsError::ConditionConfig(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(
            path = %path.display(),
            conditions = config.conditions.len(),
            "loaded condition config"
        );

        Ok(ConditionRegistry::with_config(&config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::path::PathBuf;

    #[rstest]
    fn test_builtin_conditions() {
        let registry = ConditionRegistry::builtin();
        let names: Vec<&str> = registry.names().collect();

        assert_eq!(names, vec!["acidic", "default"]);
        assert_eq!(
            registry.get("default").unwrap().as_str(),
            "nt=\"N\" ct=\"N\" ph=\"7.4\" te=\"298\" io=\"0.1\""
        );
        assert_eq!(
            registry.get("acidic").unwrap().as_str(),
            "nt=\"N\" ct=\"N\" ph=\"4\" te=\"298\" io=\"0.1\""
        );
    }

    #[rstest]
    fn test_unknown_condition() {
        let registry = ConditionRegistry::builtin();
        let result = registry.get("unknown");

        assert!(matches!(result, Err(TangrsError::UnknownCondition(name)) if name == "unknown"));
    }

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/conditions/conditions.toml");
        let registry = ConditionRegistry::try_from(path.as_path()).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get("membrane").unwrap().as_str(),
            "nt=\"A\" ct=\"A\" ph=\"6.5\" te=\"310\" io=\"0.15\""
        );
        // overridden built-in
        assert_eq!(
            registry.get("acidic").unwrap().as_str(),
            "nt=\"N\" ct=\"N\" ph=\"3.5\" te=\"298\" io=\"0.1\""
        );
    }

    #[rstest]
    fn test_try_from_missing_file() {
        let path = PathBuf::from("../tests/data/conditions/missing.toml");
        let result = ConditionRegistry::try_from(path.as_path());

        assert!(matches!(result, Err(TangrsError::ConditionConfig(_))));
    }

    #[rstest]
    fn test_try_from_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[conditions.broken]\nph = \"seven\"\n").unwrap();

        let result = ConditionRegistry::try_from(path.as_path());
        assert!(matches!(result, Err(TangrsError::ConditionConfig(_))));
    }
}
