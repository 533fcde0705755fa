//! # 依赖注入具体实现
//!
//! 提供按类型绑定的依赖注入容器。支持三种绑定方式：
//!
//! - 单例实例：注册时即已构造
//! - 瞬时工厂：每次解析都调用工厂创建新实例
//! - 延迟单例：首次解析时调用工厂，之后复用同一实例
//!
//! 工厂接收一个 [`Injector`]，可以在构造时解析自己的依赖；嵌套解析共享同一条
//! 解析链，用于检测循环依赖。

use di_abstractions::{erase_factory, ComponentFactoryFn, Injector, ResolveContext, ResolveOptions};
use infrastructure_common::{DependencyError, TypeInfo};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

type Instance = Arc<dyn Any + Send + Sync>;

/// 绑定方式
#[derive(Clone)]
enum Binding {
    /// 已构造的单例实例
    Instance(Instance),
    /// 每次解析创建新实例
    Transient(ComponentFactoryFn),
    /// 首次解析时创建，之后复用
    LazySingleton {
        factory: ComponentFactoryFn,
        cell: Arc<OnceCell<Instance>>,
    },
}

impl Binding {
    fn kind(&self) -> &'static str {
        match self {
            Binding::Instance(_) => "singleton",
            Binding::Transient(_) => "transient",
            Binding::LazySingleton { .. } => "lazy-singleton",
        }
    }
}

/// 组件注册信息
#[derive(Clone)]
struct ComponentRegistration {
    type_info: TypeInfo,
    binding: Binding,
}

impl std::fmt::Debug for ComponentRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistration")
            .field("type_info", &self.type_info.name)
            .field("binding", &self.binding.kind())
            .finish()
    }
}

/// 容器配置
#[derive(Debug, Clone)]
pub struct ContainerConfig {
    /// 最大解析深度
    pub max_resolution_depth: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            max_resolution_depth: ResolveOptions::default().max_depth,
        }
    }
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 已注册组件数量
    pub registered_components: usize,
    /// 成功解析次数
    pub resolved_components: usize,
    /// 解析错误次数
    pub resolution_errors: usize,
}

/// 具体的依赖注入容器实现
#[derive(Debug, Default)]
pub struct DiContainerImpl {
    registrations: HashMap<TypeId, ComponentRegistration>,
    config: ContainerConfig,
    stats: Mutex<ContainerStats>,
    resolution_counts: Mutex<HashMap<TypeId, usize>>,
}

impl DiContainerImpl {
    /// 创建新的容器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// 创建容器构建器
    pub fn builder() -> DiContainerBuilder {
        DiContainerBuilder::new()
    }

    /// 绑定单例实例
    pub fn bind_instance<T>(&mut self, instance: T)
    where
        T: Send + Sync + 'static,
    {
        self.bind_singleton(Arc::new(instance));
    }

    /// 绑定已共享的单例实例
    pub fn bind_singleton<T>(&mut self, instance: Arc<T>)
    where
        T: Send + Sync + 'static,
    {
        self.insert(TypeInfo::of::<T>(), Binding::Instance(instance));
    }

    /// 绑定瞬时工厂，每次解析都会创建新实例
    pub fn bind<T, F>(&mut self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&dyn Injector) -> Result<T, DependencyError> + Send + Sync + 'static,
    {
        self.insert(TypeInfo::of::<T>(), Binding::Transient(erase_factory(factory)));
    }

    /// 绑定延迟单例工厂，首次解析时创建
    pub fn bind_lazy_singleton<T, F>(&mut self, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&dyn Injector) -> Result<T, DependencyError> + Send + Sync + 'static,
    {
        self.insert(
            TypeInfo::of::<T>(),
            Binding::LazySingleton {
                factory: erase_factory(factory),
                cell: Arc::new(OnceCell::new()),
            },
        );
    }

    /// 绑定类型擦除的瞬时工厂
    pub fn bind_factory(&mut self, type_info: TypeInfo, factory: ComponentFactoryFn) {
        self.insert(type_info, Binding::Transient(factory));
    }

    /// 检查是否已注册组件
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<T>())
    }

    /// 获取所有已注册的类型
    pub fn registered_types(&self) -> Vec<TypeInfo> {
        let mut types: Vec<TypeInfo> = self
            .registrations
            .values()
            .map(|reg| reg.type_info.clone())
            .collect();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        types
    }

    /// 获取容器统计信息
    pub fn stats(&self) -> ContainerStats {
        self.stats.lock().clone()
    }

    /// 获取指定类型被请求解析的次数（包括失败的请求）
    pub fn resolution_count(&self, type_id: TypeId) -> usize {
        self.resolution_counts
            .lock()
            .get(&type_id)
            .copied()
            .unwrap_or(0)
    }

    fn insert(&mut self, type_info: TypeInfo, binding: Binding) {
        debug!("绑定组件: {} ({})", type_info.name, binding.kind());
        let registration = ComponentRegistration { type_info, binding };
        if let Some(previous) = self
            .registrations
            .insert(registration.type_info.id, registration)
        {
            warn!("覆盖已有绑定: {}", previous.type_info.name);
        }
        self.stats.lock().registered_components = self.registrations.len();
    }

    fn resolve_with(
        &self,
        type_info: &TypeInfo,
        injector: &dyn Injector,
    ) -> Result<Instance, DependencyError> {
        let registration = self
            .registrations
            .get(&type_info.id)
            .ok_or_else(|| DependencyError::not_registered(&type_info.name))?;

        match &registration.binding {
            Binding::Instance(instance) => Ok(Arc::clone(instance)),
            Binding::Transient(factory) => factory(injector),
            Binding::LazySingleton { factory, cell } => {
                cell.get_or_try_init(|| factory(injector)).map(Arc::clone)
            }
        }
    }

    fn record(&self, type_info: &TypeInfo, succeeded: bool) {
        *self
            .resolution_counts
            .lock()
            .entry(type_info.id)
            .or_insert(0) += 1;

        let mut stats = self.stats.lock();
        if succeeded {
            stats.resolved_components += 1;
        } else {
            stats.resolution_errors += 1;
        }
    }
}

impl Injector for DiContainerImpl {
    fn get_instance(&self, type_info: &TypeInfo) -> Result<Instance, DependencyError> {
        let options = ResolveOptions {
            max_depth: self.config.max_resolution_depth,
        };
        ScopedResolver::new(self, options).get_instance(type_info)
    }

    fn has_binding(&self, type_id: TypeId) -> bool {
        self.registrations.contains_key(&type_id)
    }
}

/// 单次顶层解析使用的注入器，嵌套解析共享同一条解析链
struct ScopedResolver<'a> {
    container: &'a DiContainerImpl,
    context: Mutex<ResolveContext>,
}

impl<'a> ScopedResolver<'a> {
    fn new(container: &'a DiContainerImpl, options: ResolveOptions) -> Self {
        Self {
            container,
            context: Mutex::new(ResolveContext::with_options(options)),
        }
    }
}

impl Injector for ScopedResolver<'_> {
    fn get_instance(&self, type_info: &TypeInfo) -> Result<Instance, DependencyError> {
        if let Err(e) = self.context.lock().push_type(type_info) {
            self.container.record(type_info, false);
            return Err(e);
        }

        let result = self.container.resolve_with(type_info, self);
        self.context.lock().pop_type();
        self.container.record(type_info, result.is_ok());
        result
    }

    fn has_binding(&self, type_id: TypeId) -> bool {
        self.container.has_binding(type_id)
    }
}

/// 容器构建器
#[derive(Default)]
pub struct DiContainerBuilder {
    container: DiContainerImpl,
}

impl DiContainerBuilder {
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置容器配置
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.container.config = config;
        self
    }

    /// 添加单例实例
    pub fn singleton<T>(mut self, instance: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        self.container.bind_instance(instance);
        self
    }

    /// 添加瞬时工厂
    pub fn transient<T, F>(mut self, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&dyn Injector) -> Result<T, DependencyError> + Send + Sync + 'static,
    {
        self.container.bind(factory);
        self
    }

    /// 添加延迟单例工厂
    pub fn lazy_singleton<T, F>(mut self, factory: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn(&dyn Injector) -> Result<T, DependencyError> + Send + Sync + 'static,
    {
        self.container.bind_lazy_singleton(factory);
        self
    }

    /// 构建容器
    pub fn build(self) -> DiContainerImpl {
        info!(
            "构建容器完成，注册了 {} 个组件",
            self.container.registrations.len()
        );
        self.container
    }
}
