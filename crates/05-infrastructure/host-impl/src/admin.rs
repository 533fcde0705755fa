//! 管理端任务注册表

use host_abstractions::{BoxError, Task, TaskParams};
use infrastructure_common::RegistrationError;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// 任务执行错误
#[derive(Error, Debug)]
pub enum TaskError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("任务执行失败: {name}, 原因: {source}")]
    ExecutionFailed { name: String, source: BoxError },
}

/// 管理端任务注册表，以任务名称为键
#[derive(Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, Arc<dyn Task>>,
}

impl std::fmt::Debug for TaskRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskRegistry")
            .field("tasks", &self.names())
            .finish()
    }
}

impl TaskRegistry {
    /// 创建新的注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加任务，名称重复时拒绝
    pub fn add(&mut self, task: Arc<dyn Task>) -> Result<(), RegistrationError> {
        let name = task.name();
        if self.tasks.contains_key(&name) {
            return Err(RegistrationError::DuplicateTask { name });
        }
        debug!("注册管理端任务: {}", name);
        self.tasks.insert(name, task);
        Ok(())
    }

    /// 已注册的任务名称，按字母排序
    pub fn names(&self) -> Vec<String> {
        self.tasks.keys().cloned().collect()
    }

    /// 注册数量
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 按名称执行任务
    pub async fn execute(&self, name: &str, params: &TaskParams) -> Result<String, TaskError> {
        let task = self
            .tasks
            .get(name)
            .cloned()
            .ok_or_else(|| RegistrationError::UnknownTask {
                name: name.to_string(),
            })?;

        info!("执行管理端任务: {}", name);
        task.execute(params)
            .await
            .map_err(|source| TaskError::ExecutionFailed {
                name: name.to_string(),
                source,
            })
    }
}
