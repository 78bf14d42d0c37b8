use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use rodcut_solvers::rod_cutting::CoveragePolicy;

/// A rod-cutting problem as written by a user, before validation.
///
/// `length` stays signed so a negative value reaches the solver's
/// validation and is reported as invalid input rather than a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    pub length: i64,

    #[serde(default)]
    pub prices: Vec<f64>,

    #[serde(default)]
    pub coverage: Option<CoveragePolicy>,
}

impl Problem {
    /// Loads a problem from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let parse: fn(&str) -> Result<Self> = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json,
            Some("toml") => Self::from_toml,
            _ => bail!(
                "unsupported problem file {}: expected a .json or .toml extension",
                path.display()
            ),
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        parse(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json() {
        let problem = Problem::from_json(r#"{"length": 5, "prices": [2, 5, 7, 8, 10]}"#).unwrap();

        assert_eq!(problem.length, 5);
        assert_eq!(problem.prices, vec![2.0, 5.0, 7.0, 8.0, 10.0]);
        assert_eq!(problem.coverage, None);
    }

    #[test]
    fn parses_toml_with_coverage() {
        let text = r#"
            length = 4
            prices = [1.5, 3.0]
            coverage = "unpriced"
        "#;
        let problem = Problem::from_toml(text).unwrap();

        assert_eq!(problem.length, 4);
        assert_eq!(problem.prices, vec![1.5, 3.0]);
        assert_eq!(problem.coverage, Some(CoveragePolicy::Unpriced));
    }

    #[test]
    fn missing_prices_means_empty() {
        let problem = Problem::from_json(r#"{"length": 3}"#).unwrap();
        assert!(problem.prices.is_empty());
    }

    #[test]
    fn negative_length_parses() {
        let problem = Problem::from_json(r#"{"length": -2, "prices": [1]}"#).unwrap();
        assert_eq!(problem.length, -2);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(Problem::from_json(r#"{"length": 1, "price": [1]}"#).is_err());
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = Problem::load(Path::new("problem.yaml")).unwrap_err();
        assert!(err.to_string().contains("expected a .json or .toml extension"));
    }
}
