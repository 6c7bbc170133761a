// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ============================================================================
// 德语引擎配置
// ============================================================================

/// 德语音译引擎配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GermanConfig {
    /// 是否在启动时绑定德语引擎（默认启用，仍需 `german` feature）
    #[serde(default = "default_enable_german")]
    pub enabled: bool,
    /// 最后阶段的字符替换表
    #[serde(default = "default_german_replace")]
    pub replace: BTreeMap<String, String>,
    /// 缩略词逐字母朗读的分隔符
    #[serde(default = "default_sep_abbreviation")]
    pub sep_abbreviation: String,
}

fn default_enable_german() -> bool {
    true
}

fn default_german_replace() -> BTreeMap<String, String> {
    BTreeMap::from([
        (";".to_string(), ",".to_string()),
        (":".to_string(), " ".to_string()),
    ])
}

fn default_sep_abbreviation() -> String {
    " -- ".to_string()
}

impl Default for GermanConfig {
    fn default() -> Self {
        Self {
            enabled: default_enable_german(),
            replace: default_german_replace(),
            sep_abbreviation: default_sep_abbreviation(),
        }
    }
}

// ============================================================================
// 清洗器配置
// ============================================================================

/// 清洗器配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanerConfig {
    #[serde(default)]
    pub german: GermanConfig,
}

impl CleanerConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join("tts-cleaners").join("config.json"))
    }

    /// 从默认路径加载，文件不存在时使用默认配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;
        let config: CleanerConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("保存配置到: {:?}", path);
        std::fs::write(path, content)?;
        Ok(())
    }
}
