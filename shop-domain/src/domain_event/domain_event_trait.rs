use super::{Event, EventType};
use crate::error::DomainResult;
use serde::Serialize;

/// 类型化事件载荷需要满足的能力边界
pub trait DomainEvent: Serialize {
    /// 载荷对应的分发键
    const EVENT_TYPE: EventType;

    /// 封装为带发生时间的不可变事件
    fn to_event(&self) -> DomainResult<Event> {
        Event::from_payload(Self::EVENT_TYPE, self)
    }
}
