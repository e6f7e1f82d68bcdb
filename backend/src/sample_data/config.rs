//! Sample data configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling sample data seeding at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SAMPLE_DATA")]
pub struct SampleDataSettings {
    /// Enable sample question seeding on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    //! Unit tests for sample data configuration parsing.

    use std::ffi::OsString;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn seeding_is_disabled_by_default() {
        let settings = SampleDataSettings::load_from_iter([OsString::from("backend")])
            .expect("config should load");
        assert!(!settings.enabled);
    }
}
