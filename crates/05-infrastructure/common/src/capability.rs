//! 能力类别定义
//!
//! 固定的七种能力类别及其标记、注册阶段和注册方式。

use crate::metadata::annotations;
use std::fmt;

/// 注册阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// 引导阶段，在运行阶段之前执行一次
    Bootstrap,
    /// 运行阶段
    Run,
}

/// 父类型标记
///
/// 每个变体对应宿主框架中的一个扩展点 trait。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupertypeKind {
    Bundle,
    HealthCheck,
    InjectableProvider,
    Managed,
    Task,
}

impl SupertypeKind {
    /// 标记 trait 的名称
    pub fn trait_name(self) -> &'static str {
        match self {
            SupertypeKind::Bundle => "Bundle",
            SupertypeKind::HealthCheck => "HealthCheck",
            SupertypeKind::InjectableProvider => "InjectableProvider",
            SupertypeKind::Managed => "Managed",
            SupertypeKind::Task => "Task",
        }
    }
}

/// 类别标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// 通过父类型链匹配
    Supertype(SupertypeKind),
    /// 通过注解匹配
    Annotation(&'static str),
}

/// 注册方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStyle {
    /// 注册由容器解析出的实例
    Instance,
    /// 注册类型本身，由宿主自行管理实例
    Class,
}

/// 能力类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityCategory {
    Bundle,
    HealthCheck,
    Provider,
    InjectableProvider,
    Resource,
    Task,
    Managed,
}

/// 能力描述符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    /// 能力类别
    pub category: CapabilityCategory,
    /// 类别标记
    pub marker: Marker,
    /// 注册阶段
    pub phase: Phase,
    /// 注册方式
    pub style: RegistrationStyle,
    /// 日志中使用的类别标签
    pub label: &'static str,
}

/// 能力描述符表
pub const CAPABILITIES: [CapabilityDescriptor; 7] = [
    CapabilityDescriptor {
        category: CapabilityCategory::Bundle,
        marker: Marker::Supertype(SupertypeKind::Bundle),
        phase: Phase::Bootstrap,
        style: RegistrationStyle::Instance,
        label: "bundle class",
    },
    CapabilityDescriptor {
        category: CapabilityCategory::HealthCheck,
        marker: Marker::Supertype(SupertypeKind::HealthCheck),
        phase: Phase::Run,
        style: RegistrationStyle::Instance,
        label: "injectableHealthCheck",
    },
    CapabilityDescriptor {
        category: CapabilityCategory::Provider,
        marker: Marker::Annotation(annotations::PROVIDER),
        phase: Phase::Run,
        style: RegistrationStyle::Class,
        label: "provider class",
    },
    CapabilityDescriptor {
        category: CapabilityCategory::InjectableProvider,
        marker: Marker::Supertype(SupertypeKind::InjectableProvider),
        phase: Phase::Run,
        style: RegistrationStyle::Class,
        label: "injectableProvider",
    },
    CapabilityDescriptor {
        category: CapabilityCategory::Resource,
        marker: Marker::Annotation(annotations::PATH),
        phase: Phase::Run,
        style: RegistrationStyle::Class,
        label: "resource class",
    },
    CapabilityDescriptor {
        category: CapabilityCategory::Task,
        marker: Marker::Supertype(SupertypeKind::Task),
        phase: Phase::Run,
        style: RegistrationStyle::Instance,
        label: "task",
    },
    CapabilityDescriptor {
        category: CapabilityCategory::Managed,
        marker: Marker::Supertype(SupertypeKind::Managed),
        phase: Phase::Run,
        style: RegistrationStyle::Instance,
        label: "managed",
    },
];

impl CapabilityCategory {
    /// 引导阶段处理的类别
    pub const BOOTSTRAP_ORDER: [CapabilityCategory; 1] = [CapabilityCategory::Bundle];

    /// 运行阶段处理的类别，顺序固定
    pub const RUN_ORDER: [CapabilityCategory; 6] = [
        CapabilityCategory::HealthCheck,
        CapabilityCategory::Provider,
        CapabilityCategory::InjectableProvider,
        CapabilityCategory::Resource,
        CapabilityCategory::Task,
        CapabilityCategory::Managed,
    ];

    /// 获取类别的描述符
    pub fn descriptor(self) -> &'static CapabilityDescriptor {
        match self {
            CapabilityCategory::Bundle => &CAPABILITIES[0],
            CapabilityCategory::HealthCheck => &CAPABILITIES[1],
            CapabilityCategory::Provider => &CAPABILITIES[2],
            CapabilityCategory::InjectableProvider => &CAPABILITIES[3],
            CapabilityCategory::Resource => &CAPABILITIES[4],
            CapabilityCategory::Task => &CAPABILITIES[5],
            CapabilityCategory::Managed => &CAPABILITIES[6],
        }
    }

    /// 类别标记
    pub fn marker(self) -> Marker {
        self.descriptor().marker
    }

    /// 注册阶段
    pub fn phase(self) -> Phase {
        self.descriptor().phase
    }

    /// 注册方式
    pub fn style(self) -> RegistrationStyle {
        self.descriptor().style
    }

    /// 日志标签
    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    /// 指定阶段处理的类别
    pub fn for_phase(phase: Phase) -> &'static [CapabilityCategory] {
        match phase {
            Phase::Bootstrap => &Self::BOOTSTRAP_ORDER,
            Phase::Run => &Self::RUN_ORDER,
        }
    }
}

impl fmt::Display for CapabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_categories() {
        for descriptor in &CAPABILITIES {
            assert_eq!(descriptor.category.descriptor(), descriptor);
        }
    }

    #[test]
    fn test_only_bundle_is_bootstrap() {
        for descriptor in &CAPABILITIES {
            let expected = if descriptor.category == CapabilityCategory::Bundle {
                Phase::Bootstrap
            } else {
                Phase::Run
            };
            assert_eq!(descriptor.phase, expected);
        }
        assert!(!CapabilityCategory::RUN_ORDER.contains(&CapabilityCategory::Bundle));
        assert_eq!(
            CapabilityCategory::BOOTSTRAP_ORDER.len() + CapabilityCategory::RUN_ORDER.len(),
            CAPABILITIES.len()
        );
    }

    #[test]
    fn test_class_registered_categories() {
        let class_style: Vec<_> = CAPABILITIES
            .iter()
            .filter(|d| d.style == RegistrationStyle::Class)
            .map(|d| d.category)
            .collect();
        assert_eq!(
            class_style,
            vec![
                CapabilityCategory::Provider,
                CapabilityCategory::InjectableProvider,
                CapabilityCategory::Resource,
            ]
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(CapabilityCategory::Bundle.label(), "bundle class");
        assert_eq!(CapabilityCategory::HealthCheck.to_string(), "injectableHealthCheck");
        assert_eq!(CapabilityCategory::Resource.label(), "resource class");
    }
}
