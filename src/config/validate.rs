// src/config/validate.rs

use anyhow::{anyhow, Result};

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded configuration.
///
/// There is deliberately little to check: the path table is fixed in code,
/// so the only user-supplied values are booleans and the server port.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.server.port == 0 {
        return Err(anyhow!("[server].port must be non-zero"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = ConfigFile::default();
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn zero_port_is_rejected() {
        let cfg: ConfigFile = toml::from_str("[server]\nport = 0\n").unwrap();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn empty_toml_uses_permissive_defaults() {
        let cfg: ConfigFile = toml::from_str("").unwrap();
        assert!(!cfg.build.fail_fast);
        assert!(!cfg.build.fail_on_lint);
        assert!(!cfg.build.fail_on_empty_glob);
        assert_eq!(cfg.server.port, 3000);
    }
}
