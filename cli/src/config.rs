use std::path::Path;

use color_eyre::eyre::{bail, Context, Result};
use serde::Deserialize;
use vrn_core::series::GridSpec;

/// `grid` configuration as written in TOML. Missing fields take the defaults
/// of [`GridSpec::default`].
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    series: Option<Vec<String>>,
    numbers: Option<Vec<u32>>,
}

impl GridConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading grid config {}", path.display()))?;
        Self::parse(&text).wrap_err_with(|| format!("parsing grid config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

impl TryFrom<GridConfig> for GridSpec {
    type Error = color_eyre::Report;

    fn try_from(gc: GridConfig) -> Result<Self> {
        let defaults = GridSpec::default();
        let series = gc.series.unwrap_or(defaults.series);
        let numbers = gc.numbers.unwrap_or(defaults.numbers);

        if series.is_empty() {
            bail!("grid config: `series` must not be empty");
        }
        if numbers.is_empty() {
            bail!("grid config: `numbers` must not be empty");
        }

        Ok(GridSpec { series, numbers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrn_core::series::{DEFAULT_NUMBERS, DEFAULT_SERIES};

    #[test]
    fn test_full_config() {
        let config = GridConfig::parse(
            r#"
            series = ["SKA", "SKB"]
            numbers = [1, 2, 3]
            "#,
        )
        .unwrap();
        let spec = GridSpec::try_from(config).unwrap();
        assert_eq!(spec.series, vec!["SKA".to_string(), "SKB".to_string()]);
        assert_eq!(spec.numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_defaults() {
        let spec = GridSpec::try_from(GridConfig::parse("numbers = [7]").unwrap()).unwrap();
        assert_eq!(spec.series.len(), DEFAULT_SERIES.len());
        assert_eq!(spec.numbers, vec![7]);

        let spec = GridSpec::try_from(GridConfig::parse("").unwrap()).unwrap();
        assert_eq!(spec.numbers, DEFAULT_NUMBERS.to_vec());
    }

    #[test]
    fn test_rejects_empty_lists() {
        let config = GridConfig::parse("series = []").unwrap();
        assert!(GridSpec::try_from(config).is_err());

        let config = GridConfig::parse("numbers = []").unwrap();
        assert!(GridSpec::try_from(config).is_err());
    }

    #[test]
    fn test_sample_config() {
        let config = GridConfig::parse(include_str!("../grid.toml")).unwrap();
        let grid = GridSpec::try_from(config).unwrap().build().unwrap();
        assert_eq!(grid.rows.len(), 11);
        let ska: String = grid.row("SKA").unwrap().checksums.iter().collect();
        assert_eq!(ska, "LJGDBZXTRKPKLEJUHS");
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(GridConfig::parse("weights = [1, 2]").is_err());
        assert!(GridConfig::parse("numbers = [-1]").is_err());
    }
}
