//! 托管对象生命周期管理

use host_abstractions::Managed;
use infrastructure_common::{LifecycleError, LifecycleState};
use std::sync::Arc;
use tracing::{error, info};

struct ManagedEntry {
    object: Arc<dyn Managed>,
    state: LifecycleState,
}

/// 托管对象生命周期管理器
///
/// 按添加顺序启动，按相反顺序停止。
#[derive(Default)]
pub struct LifecycleManager {
    entries: Vec<ManagedEntry>,
}

impl std::fmt::Debug for LifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleManager")
            .field("states", &self.states())
            .finish()
    }
}

impl LifecycleManager {
    /// 创建新的管理器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加托管对象
    pub fn manage(&mut self, object: Arc<dyn Managed>) {
        self.entries.push(ManagedEntry {
            object,
            state: LifecycleState::Uninitialized,
        });
    }

    /// 托管对象数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 各托管对象的名称和当前状态，按添加顺序
    pub fn states(&self) -> Vec<(String, LifecycleState)> {
        self.entries
            .iter()
            .map(|e| (e.object.name(), e.state))
            .collect()
    }

    /// 按添加顺序启动全部托管对象，遇到第一个失败即停止
    pub async fn start_all(&mut self) -> Result<(), LifecycleError> {
        for entry in &mut self.entries {
            if !entry.state.can_start() {
                continue;
            }

            let name = entry.object.name();
            entry.state = LifecycleState::Starting;
            match entry.object.start().await {
                Ok(()) => {
                    entry.state = LifecycleState::Running;
                    info!("托管对象已启动: {}", name);
                }
                Err(e) => {
                    entry.state = LifecycleState::Failed;
                    error!("托管对象启动失败: {}, 原因: {}", name, e);
                    return Err(LifecycleError::StartFailed {
                        name,
                        message: e.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// 按相反顺序停止全部托管对象
    ///
    /// 单个对象停止失败不影响其余对象，返回第一个错误。
    pub async fn stop_all(&mut self) -> Result<(), LifecycleError> {
        let mut first_error = None;

        for entry in self.entries.iter_mut().rev() {
            if !entry.state.can_stop() {
                continue;
            }

            let name = entry.object.name();
            entry.state = LifecycleState::Stopping;
            match entry.object.stop().await {
                Ok(()) => {
                    entry.state = LifecycleState::Stopped;
                    info!("托管对象已停止: {}", name);
                }
                Err(e) => {
                    entry.state = LifecycleState::Failed;
                    error!("托管对象停止失败: {}, 原因: {}", name, e);
                    first_error.get_or_insert(LifecycleError::StopFailed {
                        name,
                        message: e.to_string(),
                    });
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
