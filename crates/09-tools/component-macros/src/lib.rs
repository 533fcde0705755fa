//! # Component Macros
//!
//! 这个 crate 提供把类型登记到自动配置全局类型表的过程宏。
//!
//! ## 核心宏
//!
//! - [`discoverable`] - 类型登记宏
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::discoverable;
//!
//! #[discoverable]
//! pub struct DemoTask;
//!
//! #[discoverable(abstract)]
//! pub struct BaseTask;
//!
//! #[discoverable(path = "/orders")]
//! pub struct OrdersResource;
//! ```
//!
//! 使用方需要依赖 `auto-config` 和 `ctor`。

use proc_macro::TokenStream;

mod discoverable;

/// 类型登记宏
///
/// 为结构体实现 `Discovered` 标记 trait，并在程序启动时把类型描述符登记到
/// 全局类型表。描述符的完全限定名为 `module_path!()::类型名`，父类型链由
/// 结构体实现的扩展点 trait 自动得出。
///
/// # 参数
///
/// - `abstract` - 抽象类型，不会被解析和注册
/// - `provider` - 添加 Provider 注解
/// - `path = "/x"` - 添加 Path 注解，即 Resource 类型
/// - `name = "CustomName"` - 自定义完全限定名中的类型名称
///
/// 不支持泛型结构体。
///
/// # 示例
///
/// ```rust,ignore
/// #[discoverable(provider)]
/// pub struct JsonMapper;
/// ```
#[proc_macro_attribute]
pub fn discoverable(args: TokenStream, input: TokenStream) -> TokenStream {
    discoverable::discoverable_impl(args, input)
}
