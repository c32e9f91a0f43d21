//! 事件子系统（eventing）
//!
//! 提供进程内、同步的发布/订阅基础设施：
//! - `EventHandler`：对某类事件做出反应的处理器；
//! - `EventDispatcher`：按 `EventType` 维护有序处理器列表，负责注册、注销与通知。
//!
//! 不涉及持久化、跨进程投递、重试或异步调度，处理器在调用方线程上依次执行。
//!
pub mod dispatcher;
pub mod handler;

pub use dispatcher::EventDispatcher;
pub use handler::EventHandler;
