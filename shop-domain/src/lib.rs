//! 商城领域层（shop-domain）
//!
//! 以一个精简的电商领域为载体，提供：
//! - 实体（`entity`）与值对象（`value_object`）的基础抽象；
//! - 领域事件（`domain_event`）：不可变事件值与类型化载荷；
//! - 进程内事件分发（`eventing`）：按事件类型注册处理器并同步通知；
//! - 具体领域模型：客户（`customer`）、商品（`product`）、订单（`checkout`）；
//! - 仓储协议（`persist`），具体存储由基础设施层实现并注入。
//!
//! 典型用法：
//! 1. 创建 `EventDispatcher` 并按 `EventType` 注册处理器；
//! 2. 以 `Arc<EventDispatcher>` 构造实体，实体在创建与状态变化时发布事件；
//! 3. 处理器在 `notify` 返回前按注册顺序同步执行完毕。
//!
pub mod checkout;
pub mod customer;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod eventing;
pub mod persist;
pub mod product;
pub mod value_object;
