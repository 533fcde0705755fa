//! 类型来源
//!
//! 目录构建器只通过 [`ClassSource`] 读取类型，默认来源是全局类型表。

use crate::descriptor::ClassDescriptor;
use crate::table;

/// 类型来源
pub trait ClassSource: Send + Sync {
    /// 返回全部可见类型的描述符
    fn classes(&self) -> Vec<ClassDescriptor>;
}

/// 读取 `#[discoverable]` 登记的全局类型表
#[derive(Debug, Default, Clone, Copy)]
pub struct RegisteredClasses;

impl ClassSource for RegisteredClasses {
    fn classes(&self) -> Vec<ClassDescriptor> {
        table::registered_classes()
    }
}

/// 固定列表类型来源，用于测试和嵌入场景
#[derive(Debug, Default, Clone)]
pub struct StaticClassSource {
    classes: Vec<ClassDescriptor>,
}

impl StaticClassSource {
    /// 使用给定描述符创建来源
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        Self { classes }
    }

    /// 添加描述符
    pub fn with_class(mut self, descriptor: ClassDescriptor) -> Self {
        self.classes.push(descriptor);
        self
    }
}

impl ClassSource for StaticClassSource {
    fn classes(&self) -> Vec<ClassDescriptor> {
        self.classes.clone()
    }
}
