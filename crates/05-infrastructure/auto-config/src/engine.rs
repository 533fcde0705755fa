//! 自动配置引擎
//!
//! 构造时构建一次类型目录，随后分两个阶段注册：
//!
//! 1. [`AutoConfig::initialize`] - 引导阶段，只注册功能包
//! 2. [`AutoConfig::run`] - 运行阶段，依次注册健康检查、Provider、可注入提供者、
//!    Resource、管理端任务和托管对象
//!
//! 每个类别依次经过分类、过滤抽象类型、解析实例和注册。任何错误立即返回，
//! 当前类别剩余的类型和之后的类别都不再处理。先调用 `initialize` 再调用
//! `run`，每个阶段只调用一次，这一前提不做检查。

use crate::catalog::Catalog;
use crate::classifier;
use crate::dispatcher;
use crate::resolver::InstanceResolver;
use crate::settings::AutoConfigSettings;
use crate::source::{ClassSource, RegisteredClasses};
use di_abstractions::Injector;
use host_abstractions::{BootstrapContext, Environment};
use infrastructure_common::{AutoConfigError, CapabilityCategory, ConfigError, Phase};
use tracing::debug;

/// 自动配置引擎
#[derive(Debug, Clone)]
pub struct AutoConfig {
    catalog: Catalog,
}

impl AutoConfig {
    /// 使用全局类型表创建引擎
    pub fn new<S: AsRef<str>>(namespaces: &[S]) -> Result<Self, ConfigError> {
        Self::with_source(namespaces, &RegisteredClasses)
    }

    /// 使用指定类型来源创建引擎
    pub fn with_source<S: AsRef<str>>(
        namespaces: &[S],
        source: &dyn ClassSource,
    ) -> Result<Self, ConfigError> {
        let catalog = Catalog::build(namespaces, source)?;
        Ok(Self { catalog })
    }

    /// 从设置创建引擎
    pub fn from_settings(settings: &AutoConfigSettings) -> Result<Self, ConfigError> {
        Self::new(settings.namespaces.as_slice())
    }

    /// 类型目录
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 引导阶段：注册功能包
    pub fn initialize(
        &self,
        bootstrap: &mut dyn BootstrapContext,
        injector: &dyn Injector,
    ) -> Result<(), AutoConfigError> {
        debug!("开始引导阶段注册");
        let resolver = InstanceResolver::new(injector);

        for &category in CapabilityCategory::for_phase(Phase::Bootstrap) {
            for descriptor in classifier::registrable(&self.catalog, category) {
                dispatcher::register_bootstrap(bootstrap, &resolver, category, descriptor)?;
            }
        }

        debug!("引导阶段注册完成");
        Ok(())
    }

    /// 运行阶段：注册其余六个类别
    pub fn run(
        &self,
        environment: &mut dyn Environment,
        injector: &dyn Injector,
    ) -> Result<(), AutoConfigError> {
        debug!("开始运行阶段注册");
        let resolver = InstanceResolver::new(injector);

        for &category in CapabilityCategory::for_phase(Phase::Run) {
            let classes = classifier::registrable(&self.catalog, category);
            debug!("类别 {} 待注册类型数量: {}", category, classes.len());

            for descriptor in classes {
                dispatcher::register_run(environment, &resolver, category, descriptor)?;
            }
        }

        debug!("运行阶段注册完成");
        Ok(())
    }
}
