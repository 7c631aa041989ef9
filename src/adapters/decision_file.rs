//! File-backed decision source (JSON or YAML)

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::application::AnalyzeDecisionCommand;
use crate::ports::{DecisionSource, SourceError};

/// Serialization format of a decision document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionFormat {
    Json,
    Yaml,
}

impl DecisionFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse()
    }

    /// Parse a decision document in this format
    pub fn parse(&self, contents: &str) -> Result<AnalyzeDecisionCommand, SourceError> {
        let command: AnalyzeDecisionCommand = match self {
            DecisionFormat::Json => serde_json::from_str(contents)?,
            DecisionFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        Ok(command)
    }
}

impl FromStr for DecisionFormat {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DecisionFormat::Json),
            "yaml" | "yml" => Ok(DecisionFormat::Yaml),
            other => Err(SourceError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Reads a decision document from disk
pub struct FileDecisionSource {
    path: PathBuf,
}

impl FileDecisionSource {
    /// Create a source for the given path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DecisionSource for FileDecisionSource {
    fn load(&self) -> Result<AnalyzeDecisionCommand, SourceError> {
        let format = DecisionFormat::from_path(&self.path)?;
        let contents = fs::read_to_string(&self.path)?;
        debug!(path = %self.path.display(), ?format, "Read decision document");
        format.parse(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Decision;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DecisionFormat::from_path(Path::new("decision.json")).unwrap(),
            DecisionFormat::Json
        );
        assert_eq!(
            DecisionFormat::from_path(Path::new("decision.YML")).unwrap(),
            DecisionFormat::Yaml
        );
        assert!(matches!(
            DecisionFormat::from_path(Path::new("decision.toml")),
            Err(SourceError::UnsupportedFormat(ext)) if ext == "toml"
        ));
        assert!(DecisionFormat::from_path(Path::new("decision")).is_err());
    }

    #[test]
    fn test_parse_yaml_yes_no() {
        let yaml = "decision_type: YES_NO\npros:\n  - Huge raise\ncons:\n  - Longer commute\n";
        let command = DecisionFormat::Yaml.parse(yaml).unwrap();
        assert_eq!(
            command.decision,
            Decision::YesNo {
                pros: vec!["Huge raise".to_string()],
                cons: vec!["Longer commute".to_string()],
            }
        );
        assert!(command.answers.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = DecisionFormat::Json.parse("{ not json");
        assert!(matches!(result, Err(SourceError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = FileDecisionSource::new("/nonexistent/decision.json");
        assert!(matches!(source.load(), Err(SourceError::Io(_))));
    }
}
