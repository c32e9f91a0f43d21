//! 客户（Customer）上下文
//!
//! 包含客户实体、地址值对象、客户相关事件载荷，以及示例日志处理器。

mod entity;
mod events;
pub mod handlers;
mod value_objects;

pub use entity::Customer;
pub use events::{CustomerAddressChanged, CustomerCreated};
pub use value_objects::Address;
