//! 领域事件（Domain Event）
//!
//! 定义分发键 `EventType`、不可变事件值 `Event`，以及类型化载荷需要实现的
//! `DomainEvent` 接口。分发器只依据 `EventType` 路由，载荷对其保持不透明。

mod domain_event_trait;
mod event;
mod event_type;

pub use domain_event_trait::DomainEvent;
pub use event::Event;
pub use event_type::EventType;
