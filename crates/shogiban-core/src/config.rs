//! エンジン設定
//!
//! TOML ファイルから読み込む。未指定の項目は既定値になる。
//!
//! ```toml
//! pool_encoding = "counted"   # "flat" | "counted"
//! drop_policy = "require_vacant" # "minimal" | "require_vacant"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShogiError};
use crate::movegen::DropPolicy;
use crate::position::PoolEncoding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// 持ち駒欄の表記
    pub pool_encoding: PoolEncoding,
    /// 駒打ちの検証規則
    pub drop_policy: DropPolicy,
}

impl EngineConfig {
    /// TOML文字列から読み込む
    pub fn from_toml_str(s: &str) -> Result<EngineConfig> {
        toml::from_str(s).map_err(|e| ShogiError::Config(e.to_string()))
    }

    /// TOMLファイルから読み込む
    pub fn load(path: &Path) -> Result<EngineConfig> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ShogiError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded engine config from {}: {config:?}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.pool_encoding, PoolEncoding::Flat);
        assert_eq!(config.drop_policy, DropPolicy::Minimal);
    }

    #[test]
    fn test_parse_config() {
        let config = EngineConfig::from_toml_str(
            "pool_encoding = \"counted\"\ndrop_policy = \"require_vacant\"\n",
        )
        .unwrap();
        assert_eq!(config.pool_encoding, PoolEncoding::Counted);
        assert_eq!(config.drop_policy, DropPolicy::RequireVacant);
    }

    #[test]
    fn test_reject_unknown_values() {
        assert!(matches!(
            EngineConfig::from_toml_str("pool_encoding = \"sfen\""),
            Err(ShogiError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("turn_limit = 3"),
            Err(ShogiError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/shogiban.toml")).unwrap_err();
        assert!(matches!(err, ShogiError::Config(_)));
    }
}
