//! 实体（Entity）基础抽象
//!
//! 以唯一标识区分的领域对象，状态可变但标识在生命周期内保持不变。
//!
use std::fmt::Display;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可显示与可克隆
    type Id: Clone + Display + PartialEq + Send + Sync;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
