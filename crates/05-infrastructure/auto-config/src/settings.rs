//! 自动配置设置
//!
//! 通过 `config` crate 从可选的 TOML 文件和 `AUTO_CONFIG` 前缀的环境变量加载，
//! 环境变量优先。例如 `AUTO_CONFIG__NAMESPACES=demo,my_app::resources`、
//! `AUTO_CONFIG__LOGGING__LEVEL=debug`。

use infrastructure_common::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "AUTO_CONFIG";

/// 环境变量层级分隔符
pub const ENV_SEPARATOR: &str = "__";

/// 自动配置设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoConfigSettings {
    /// 命名空间根
    #[serde(default)]
    pub namespaces: Vec<String>,
    /// 日志设置
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 文本格式
    #[default]
    Plain,
    /// JSON 格式
    Json,
}

/// 日志设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// 日志级别
    pub level: String,
    /// 输出格式
    pub format: LogFormat,
    /// 是否显示目标
    pub show_target: bool,
    /// 是否显示线程ID
    pub show_thread_ids: bool,
    /// 是否显示文件名
    pub show_file: bool,
    /// 是否显示行号
    pub show_line_number: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Plain,
            show_target: true,
            show_thread_ids: false,
            show_file: false,
            show_line_number: false,
        }
    }
}

impl AutoConfigSettings {
    /// 从可选的配置文件和进程环境变量加载
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::build(path, environment())
    }

    /// 从可选的配置文件和给定的环境变量表加载
    pub fn load_with_vars(
        path: Option<&Path>,
        vars: config::Map<String, String>,
    ) -> Result<Self, ConfigError> {
        Self::build(path, environment().source(Some(vars)))
    }

    /// 从 TOML 文本加载，不读取环境变量
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(load_error)
    }

    fn build(path: Option<&Path>, environment: config::Environment) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!("加载配置文件: {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings: Self = builder
            .add_source(environment)
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(load_error)?;

        debug!("命名空间根: {:?}", settings.namespaces);
        Ok(settings)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .list_separator(",")
        .with_list_parse_key("namespaces")
        .try_parsing(true)
}

fn load_error(e: config::ConfigError) -> ConfigError {
    error!("配置加载失败: {}", e);
    ConfigError::settings_load(e.to_string())
}
