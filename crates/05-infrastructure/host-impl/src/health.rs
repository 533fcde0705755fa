//! 健康检查注册表

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use host_abstractions::HealthCheck;
use infrastructure_common::{HealthCheckResult, HealthStatus, RegistrationError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// 健康检查注册表，以名称为键
#[derive(Default)]
pub struct HealthCheckRegistry {
    checks: DashMap<String, Arc<dyn HealthCheck>>,
}

impl std::fmt::Debug for HealthCheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthCheckRegistry")
            .field("checks", &self.names())
            .finish()
    }
}

impl HealthCheckRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册健康检查，名称重复时拒绝
    pub fn register(
        &self,
        name: &str,
        check: Arc<dyn HealthCheck>,
    ) -> Result<(), RegistrationError> {
        match self.checks.entry(name.to_string()) {
            Entry::Occupied(_) => Err(RegistrationError::DuplicateHealthCheck {
                name: name.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(check);
                debug!("注册健康检查: {}", name);
                Ok(())
            }
        }
    }

    /// 已注册的名称，按字母排序
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.checks.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// 注册数量
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// 依次执行所有健康检查，结果按名称排序
    pub async fn run_health_checks(&self) -> Vec<HealthCheckResult> {
        let mut checks: Vec<(String, Arc<dyn HealthCheck>)> = self
            .checks
            .iter()
            .map(|e| (e.key().clone(), Arc::clone(e.value())))
            .collect();
        checks.sort_by(|a, b| a.0.cmp(&b.0));

        let mut results = Vec::with_capacity(checks.len());
        for (name, check) in checks {
            let start = std::time::Instant::now();
            let status = match tokio::time::timeout(check.timeout(), check.check()).await {
                Ok(status) => status,
                Err(_) => {
                    warn!("健康检查超时: {}", name);
                    HealthStatus::unhealthy("健康检查超时")
                }
            };
            results.push(HealthCheckResult::new(name, status, start.elapsed()));
        }
        results
    }

    /// 汇总整体健康状态
    pub async fn overall_health(&self) -> HealthStatus {
        let results = self.run_health_checks().await;

        let failing: HashMap<String, String> = results
            .iter()
            .filter(|r| !r.status.is_healthy())
            .map(|r| (r.name.clone(), format!("{:?}", r.status)))
            .collect();

        if results.iter().any(|r| r.status.is_unhealthy()) {
            HealthStatus::unhealthy_with_details(
                format!("{}个健康检查未通过", failing.len()),
                failing,
            )
        } else if !failing.is_empty() {
            HealthStatus::degraded(format!("{}个健康检查降级", failing.len()))
        } else {
            HealthStatus::healthy()
        }
    }

    /// 以 JSON 形式输出健康检查报告
    pub async fn report_json(&self) -> serde_json::Value {
        let results = self.run_health_checks().await;
        let entries: serde_json::Map<String, serde_json::Value> = results
            .into_iter()
            .map(|r| {
                let value = serde_json::json!({
                    "healthy": r.status.is_healthy(),
                    "status": r.status,
                    "duration_ms": r.duration.as_millis() as u64,
                    "checked_at": r.checked_at,
                });
                (r.name, value)
            })
            .collect();
        serde_json::Value::Object(entries)
    }
}
