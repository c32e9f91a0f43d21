//! 商城基础设施层（shop-infra）
//!
//! 以内存关系表（`store`）模拟数据库，为领域层的仓储协议提供实现：
//! - `models`：与表结构一一对应的行模型；
//! - `repository`：客户、商品、订单仓储，负责实体与行之间的双向映射。
//!
//! 行按写入顺序保存，读取全部时保持创建顺序。
//!
pub mod models;
pub mod repository;
pub mod store;

pub use repository::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
pub use store::Store;
