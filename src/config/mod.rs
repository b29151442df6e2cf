use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{FrameError, FrameResult};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub max_log_file_size: u64,
    pub max_log_files: usize,
    /// 是否启用地理空间支持（仍受 `geo` feature 约束）
    pub geo_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "esframe".to_string(),
            max_log_file_size: 100 * 1024 * 1024, // 100MB
            max_log_files: 5,
            geo_enabled: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> FrameResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FrameError::Config(format!("无法读取配置文件 {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| FrameError::Config(format!("配置解析失败: {}", e)))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> FrameResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FrameError::Config(format!("配置序列化失败: {}", e)))?;
        fs::write(path.as_ref(), content)
            .map_err(|e| FrameError::Config(format!("配置写入失败: {}", e)))
    }
}
