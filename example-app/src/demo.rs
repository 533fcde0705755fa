//! 演示组件
//!
//! 这些类型位于 `example_app::demo` 命名空间下，由自动配置发现和注册。

use async_trait::async_trait;
use component_macros::discoverable;
use host_abstractions::{
    BootstrapContext, BoxError, Bundle, Environment, HealthCheck, Managed, Task, TaskParams,
};
use infrastructure_common::{HealthStatus, RegistrationError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 演示功能包
#[discoverable]
#[derive(Debug, Default)]
pub struct DemoBundle;

impl Bundle for DemoBundle {
    fn initialize(&self, _bootstrap: &mut dyn BootstrapContext) {
        info!("DemoBundle 引导阶段初始化");
    }

    fn run(&self, _environment: &mut dyn Environment) -> Result<(), RegistrationError> {
        info!("DemoBundle 运行阶段回调");
        Ok(())
    }
}

/// 演示任务，把参数回显给调用方
#[discoverable]
#[derive(Debug, Default)]
pub struct DemoTask;

#[async_trait]
impl Task for DemoTask {
    fn name(&self) -> String {
        "demo".to_string()
    }

    async fn execute(&self, params: &TaskParams) -> Result<String, BoxError> {
        let mut keys: Vec<&String> = params.keys().collect();
        keys.sort();
        let lines: Vec<String> = keys
            .into_iter()
            .map(|k| format!("{}={}", k, params[k].join(",")))
            .collect();
        Ok(format!("demo task executed\n{}", lines.join("\n")))
    }
}

/// 任务基类型，只用于共享行为，不会被注册
#[discoverable(abstract)]
#[derive(Debug, Default)]
pub struct BaseTask;

#[async_trait]
impl Task for BaseTask {
    fn name(&self) -> String {
        "base".to_string()
    }

    async fn execute(&self, _params: &TaskParams) -> Result<String, BoxError> {
        Err("BaseTask 不能直接执行".into())
    }
}

/// 连接池，由宿主负责启动和停止
#[discoverable]
#[derive(Debug)]
pub struct ConnectionPool {
    size: usize,
    started: AtomicBool,
    checkouts: AtomicUsize,
}

impl ConnectionPool {
    /// 创建连接池
    pub fn new(size: usize) -> Self {
        Self {
            size,
            started: AtomicBool::new(false),
            checkouts: AtomicUsize::new(0),
        }
    }

    /// 是否已启动
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// 借出一个连接，未启动或容量为零时返回 `None`
    pub fn checkout(&self) -> Option<usize> {
        if !self.is_started() {
            return None;
        }
        self.checkouts
            .fetch_add(1, Ordering::SeqCst)
            .checked_rem(self.size)
    }
}

#[async_trait]
impl Managed for ConnectionPool {
    fn name(&self) -> String {
        "connection-pool".to_string()
    }

    async fn start(&self) -> Result<(), BoxError> {
        tokio::time::sleep(Duration::from_millis(10)).await;
        self.started.store(true, Ordering::SeqCst);
        info!("连接池已启动，大小: {}", self.size);
        Ok(())
    }

    async fn stop(&self) -> Result<(), BoxError> {
        self.started.store(false, Ordering::SeqCst);
        info!("连接池已停止");
        Ok(())
    }
}

/// 数据库健康检查，依赖连接池
#[discoverable]
#[derive(Debug)]
pub struct DatabaseHealthCheck {
    pool: Arc<ConnectionPool>,
}

impl DatabaseHealthCheck {
    /// 创建健康检查
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthCheck for DatabaseHealthCheck {
    fn name(&self) -> String {
        "database".to_string()
    }

    async fn check(&self) -> HealthStatus {
        match self.pool.checkout() {
            Some(_) => HealthStatus::healthy(),
            None => HealthStatus::unhealthy("连接池未启动"),
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(5)
    }
}

/// 订单资源
#[discoverable(path = "/orders")]
#[derive(Debug)]
pub struct OrdersResource;

/// 错误响应映射
#[discoverable(provider)]
#[derive(Debug)]
pub struct JsonErrorMapper;
