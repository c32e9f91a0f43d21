//! 仓储实现
//!
//! 基于 `Store` 的内存仓储，实现领域层的 `Repository` 协议，
//! 负责实体字段与行列之间的映射。重建的实体不携带分发器，读取不会发布事件。
//!
mod customer;
mod order;
mod product;

pub use customer::InMemoryCustomerRepository;
pub use order::InMemoryOrderRepository;
pub use product::InMemoryProductRepository;
