//! Environment variable layering tests.
//!
//! Uses figment::Jail so variables never leak between tests.

use figment::Jail;
use kundali_config::{ConfigError, KundaliConfig, OutputFormat};
use kundali_vedic_base::{AyanamshaStrategy, NodeMode};
use pretty_assertions::assert_eq;

#[test]
fn env_selects_ayanamsa() {
    Jail::expect_with(|jail| {
        jail.set_env("KUNDALI_CHART__AYANAMSA", "fixed_j2000");

        let config = KundaliConfig::load().map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.chart.ayanamsa, AyanamshaStrategy::FixedJ2000);
        assert_eq!(config.chart.node_mode, NodeMode::Mean);
        Ok(())
    });
}

#[test]
fn env_sets_output_section() {
    Jail::expect_with(|jail| {
        jail.set_env("KUNDALI_OUTPUT__FORMAT", "narrative");
        jail.set_env("KUNDALI_OUTPUT__PRETTY", "true");
        jail.set_env("KUNDALI_OUTPUT__LOG_LEVEL", "debug");

        let config = KundaliConfig::load().map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.output.format, OutputFormat::Narrative);
        assert!(config.output.pretty);
        assert_eq!(config.output.log_level, "debug");
        Ok(())
    });
}

#[test]
fn env_reaches_nested_star_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("KUNDALI_CHART__REFERENCE_STAR__NAME", "Revati");
        jail.set_env("KUNDALI_CHART__REFERENCE_STAR__RA_DEG", "18.4373");
        jail.set_env("KUNDALI_CHART__REFERENCE_STAR__DEC_DEG", "7.5753");

        let config = KundaliConfig::load().map_err(|e| figment::Error::from(e.to_string()))?;

        let star = &config.chart.reference_star;
        assert_eq!(star.name, "Revati");
        assert!((star.ra_deg - 18.4373).abs() < 1e-12);
        assert!((star.dec_deg - 7.5753).abs() < 1e-12);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "kundali.toml",
            r#"
[chart]
ayanamsa = "fixed_j2000"

[output]
format = "narrative"
"#,
        )?;
        jail.set_env("KUNDALI_CHART__AYANAMSA", "true_star");

        let config = KundaliConfig::load().map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.chart.ayanamsa, AyanamshaStrategy::TrueStar);
        assert_eq!(config.output.format, OutputFormat::Narrative);
        Ok(())
    });
}

#[test]
fn env_overrides_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
[output]
log_level = "trace"
"#,
        )?;
        jail.set_env("KUNDALI_OUTPUT__LOG_LEVEL", "error");

        let config = KundaliConfig::load_from("custom.toml")
            .map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.output.log_level, "error");
        Ok(())
    });
}

#[test]
fn env_with_bad_log_level_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("KUNDALI_OUTPUT__LOG_LEVEL", "verbose");

        let err = KundaliConfig::load().unwrap_err();
        assert!(
            matches!(&err, ConfigError::InvalidValue { field, .. } if field == "output.log_level"),
            "{err}"
        );
        Ok(())
    });
}

#[test]
fn unrelated_prefix_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("KUNDALIX_CHART__AYANAMSA", "fixed_j2000");
        jail.set_env("OTHER_CHART__AYANAMSA", "fixed_j2000");

        let config = KundaliConfig::load().map_err(|e| figment::Error::from(e.to_string()))?;

        assert_eq!(config.chart.ayanamsa, AyanamshaStrategy::TrueStar);
        Ok(())
    });
}
