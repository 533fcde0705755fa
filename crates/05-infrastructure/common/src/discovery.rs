//! 组件发现标记
//!
//! 所有扩展点 trait 都以 [`Discovered`] 为父 trait。该 trait 只由
//! `#[discoverable]` 宏生成实现，因此实现了扩展点却没有进入类型表的类型
//! 会在编译期报错。

/// 已进入编译期类型表的类型
///
/// 不要手动实现此 trait，应使用 `#[discoverable]` 宏。
pub trait Discovered: Send + Sync + 'static {}
