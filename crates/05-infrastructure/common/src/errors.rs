//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
///
/// 命名空间根集合为空或格式无效时在构造阶段立即返回，不会进行任何扫描。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("命名空间根集合不能为空")]
    EmptyNamespaceRoots,

    #[error("命名空间根无效: {root:?}, 原因: {reason}")]
    InvalidNamespaceRoot { root: String, reason: String },

    #[error("配置加载失败: {message}")]
    SettingsLoad { message: String },
}

impl ConfigError {
    /// 创建命名空间根无效错误
    pub fn invalid_root(root: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNamespaceRoot {
            root: root.into(),
            reason: reason.into(),
        }
    }

    /// 创建配置加载错误
    pub fn settings_load(message: impl Into<String>) -> Self {
        Self::SettingsLoad {
            message: message.into(),
        }
    }
}

/// 依赖注入错误类型
///
/// 容器无法为已发现的具体类型提供实例时返回，启动随即中止。
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: {type_name}")]
    ComponentNotRegistered { type_name: String },

    #[error("组件创建失败: {type_name}, 原因: {source}")]
    ComponentCreationFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("循环依赖检测到: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("解析深度超过上限 {max_depth}: {type_name}")]
    ResolutionDepthExceeded { type_name: String, max_depth: usize },

    #[error("类型不匹配: 期望 {expected}, 实际 {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl DependencyError {
    /// 创建组件未注册错误
    pub fn not_registered(type_name: impl Into<String>) -> Self {
        Self::ComponentNotRegistered {
            type_name: type_name.into(),
        }
    }

    /// 创建组件创建失败错误
    pub fn creation_failed(
        type_name: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ComponentCreationFailed {
            type_name: type_name.into(),
            source: source.into(),
        }
    }
}

/// 注册错误类型
///
/// 宿主注册表拒绝某次注册时返回，例如健康检查名称重复。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("健康检查名称重复: {name}")]
    DuplicateHealthCheck { name: String },

    #[error("任务名称重复: {name}")]
    DuplicateTask { name: String },

    #[error("{kind} 类型重复注册: {type_name}")]
    DuplicateClass { kind: String, type_name: String },

    #[error("任务不存在: {name}")]
    UnknownTask { name: String },
}

/// 生命周期管理错误类型
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("托管对象启动失败: {name}, 原因: {message}")]
    StartFailed { name: String, message: String },

    #[error("托管对象停止失败: {name}, 原因: {message}")]
    StopFailed { name: String, message: String },
}

/// 自动配置错误类型
///
/// 汇总启动流程中可能出现的全部致命错误，任何一种都不会在本地恢复。
#[derive(Error, Debug)]
pub enum AutoConfigError {
    #[error("配置错误: {source}")]
    Configuration {
        #[from]
        source: ConfigError,
    },

    #[error("解析错误: {source}")]
    Resolution {
        #[from]
        source: DependencyError,
    },

    #[error("注册错误: {source}")]
    Registration {
        #[from]
        source: RegistrationError,
    },
}
