//! 类型描述符
//!
//! 描述一个已登记的类型：完全限定名、父类型链、注解和抽象标记。
//! 描述符创建后不再修改。

use host_abstractions::{Bundle, HealthCheck, InjectableProvider, Managed, Task};
use infrastructure_common::{Annotation, SupertypeKind, TypeInfo};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 容器解析出的类型擦除实例
pub type Instance = Arc<dyn Any + Send + Sync>;

/// 父类型链中的一项
///
/// 以实例方式注册的父类型携带从擦除实例到 trait 对象的转换函数。
#[derive(Clone, Copy)]
pub enum Supertype {
    Bundle(fn(Instance) -> Option<Arc<dyn Bundle>>),
    HealthCheck(fn(Instance) -> Option<Arc<dyn HealthCheck>>),
    InjectableProvider,
    Managed(fn(Instance) -> Option<Arc<dyn Managed>>),
    Task(fn(Instance) -> Option<Arc<dyn Task>>),
}

impl Supertype {
    /// 父类型标记
    pub fn kind(&self) -> SupertypeKind {
        match self {
            Supertype::Bundle(_) => SupertypeKind::Bundle,
            Supertype::HealthCheck(_) => SupertypeKind::HealthCheck,
            Supertype::InjectableProvider => SupertypeKind::InjectableProvider,
            Supertype::Managed(_) => SupertypeKind::Managed,
            Supertype::Task(_) => SupertypeKind::Task,
        }
    }

    /// `T` 实现了 [`Bundle`]
    pub fn bundle<T: Bundle>() -> Self {
        Supertype::Bundle(|instance| instance.downcast::<T>().ok().map(|t| t as Arc<dyn Bundle>))
    }

    /// `T` 实现了 [`HealthCheck`]
    pub fn health_check<T: HealthCheck>() -> Self {
        Supertype::HealthCheck(|instance| {
            instance
                .downcast::<T>()
                .ok()
                .map(|t| t as Arc<dyn HealthCheck>)
        })
    }

    /// `T` 实现了 [`InjectableProvider`]
    pub fn injectable_provider<T: InjectableProvider>() -> Self {
        Supertype::InjectableProvider
    }

    /// `T` 实现了 [`Managed`]
    pub fn managed<T: Managed>() -> Self {
        Supertype::Managed(|instance| {
            instance
                .downcast::<T>()
                .ok()
                .map(|t| t as Arc<dyn Managed>)
        })
    }

    /// `T` 实现了 [`Task`]
    pub fn task<T: Task>() -> Self {
        Supertype::Task(|instance| instance.downcast::<T>().ok().map(|t| t as Arc<dyn Task>))
    }
}

impl fmt::Debug for Supertype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().trait_name())
    }
}

/// 类型描述符
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    /// 类型信息，名称为完全限定名
    pub type_info: TypeInfo,
    /// 声明的父类型
    pub supertypes: Vec<Supertype>,
    /// 声明的注解
    pub annotations: Vec<Annotation>,
    /// 是否为抽象类型，抽象类型不会被解析
    pub is_abstract: bool,
}

impl ClassDescriptor {
    /// 创建不带父类型和注解的具体类型描述符
    pub fn new(type_info: TypeInfo) -> Self {
        Self {
            type_info,
            supertypes: Vec::new(),
            annotations: Vec::new(),
            is_abstract: false,
        }
    }

    /// 添加父类型
    pub fn with_supertype(mut self, supertype: Supertype) -> Self {
        self.supertypes.push(supertype);
        self
    }

    /// 添加注解
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// 设置抽象标记
    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    /// 完全限定名
    pub fn name(&self) -> &str {
        &self.type_info.name
    }

    /// 父类型链中的指定项
    pub fn supertype(&self, kind: SupertypeKind) -> Option<&Supertype> {
        self.supertypes.iter().find(|s| s.kind() == kind)
    }

    /// 父类型链是否包含指定标记
    pub fn has_supertype(&self, kind: SupertypeKind) -> bool {
        self.supertype(kind).is_some()
    }

    /// 是否带有指定注解
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a.name == name)
    }
}
