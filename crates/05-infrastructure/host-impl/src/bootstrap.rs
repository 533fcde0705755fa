//! 引导阶段上下文实现

use host_abstractions::{BootstrapContext, Bundle, Environment};
use infrastructure_common::RegistrationError;
use std::sync::Arc;
use tracing::debug;

/// 默认引导上下文
///
/// 添加功能包时立即调用其 `initialize` 回调，运行阶段通过
/// [`DefaultBootstrap::run_bundles`] 调用 `run` 回调。
#[derive(Default)]
pub struct DefaultBootstrap {
    bundles: Vec<Arc<dyn Bundle>>,
}

impl DefaultBootstrap {
    /// 创建新的引导上下文
    pub fn new() -> Self {
        Self::default()
    }

    /// 已注册的功能包
    pub fn bundles(&self) -> &[Arc<dyn Bundle>] {
        &self.bundles
    }

    /// 按注册顺序调用每个功能包的 `run` 回调
    pub fn run_bundles(&self, environment: &mut dyn Environment) -> Result<(), RegistrationError> {
        for bundle in &self.bundles {
            bundle.run(environment)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DefaultBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultBootstrap")
            .field("bundles", &format!("{} bundles", self.bundles.len()))
            .finish()
    }
}

impl BootstrapContext for DefaultBootstrap {
    fn add_bundle(&mut self, bundle: Arc<dyn Bundle>) -> Result<(), RegistrationError> {
        bundle.initialize(self);
        self.bundles.push(bundle);
        debug!("功能包数量: {}", self.bundles.len());
        Ok(())
    }
}
