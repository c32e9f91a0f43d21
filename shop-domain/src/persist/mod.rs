//! 仓储协议（persist）
//!
//! 定义实体到存储的读写接口：`create`/`update`/`find`/`find_all`。
//! 具体存储后端（内存表、关系型数据库等）由基础设施层实现并注入。
//!
mod repository;

pub use repository::{CustomerRepository, OrderRepository, ProductRepository, Repository};
