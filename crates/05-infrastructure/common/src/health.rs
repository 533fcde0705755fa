//! 健康检查相关类型定义

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// 健康状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "data")]
pub enum HealthStatus {
    /// 健康状态
    Healthy,
    /// 降级状态
    Degraded {
        message: String,
        details: Option<HashMap<String, String>>,
    },
    /// 不健康状态
    Unhealthy {
        error: String,
        details: Option<HashMap<String, String>>,
    },
}

impl HealthStatus {
    /// 创建健康状态
    pub fn healthy() -> Self {
        Self::Healthy
    }

    /// 创建降级状态
    pub fn degraded(message: impl Into<String>) -> Self {
        Self::Degraded {
            message: message.into(),
            details: None,
        }
    }

    /// 创建不健康状态
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self::Unhealthy {
            error: error.into(),
            details: None,
        }
    }

    /// 创建不健康状态（带详情）
    pub fn unhealthy_with_details(
        error: impl Into<String>,
        details: HashMap<String, String>,
    ) -> Self {
        Self::Unhealthy {
            error: error.into(),
            details: Some(details),
        }
    }

    /// 检查是否健康
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// 检查是否降级
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// 检查是否不健康
    pub fn is_unhealthy(&self) -> bool {
        matches!(self, Self::Unhealthy { .. })
    }
}

/// 健康检查结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// 健康检查名称
    pub name: String,
    /// 健康状态
    pub status: HealthStatus,
    /// 检查耗时
    pub duration: Duration,
    /// 检查时间
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// 创建新的健康检查结果
    pub fn new(name: impl Into<String>, status: HealthStatus, duration: Duration) -> Self {
        Self {
            name: name.into(),
            status,
            duration,
            checked_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        assert!(HealthStatus::healthy().is_healthy());
        assert!(HealthStatus::degraded("慢").is_degraded());
        assert!(HealthStatus::unhealthy("超时").is_unhealthy());
    }

    #[test]
    fn test_status_serialization_is_tagged() {
        let json = serde_json::to_value(HealthStatus::unhealthy("超时")).unwrap();
        assert_eq!(json["status"], "Unhealthy");
        assert_eq!(json["data"]["error"], "超时");
    }
}
