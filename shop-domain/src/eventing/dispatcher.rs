//! 事件分发器（EventDispatcher）
//!
//! 维护 `EventType -> [EventHandler]` 的有序映射：
//! - `register`：追加处理器，不去重，重复注册会导致重复调用；
//! - `unregister`：按 `Arc` 指针身份移除首个匹配项，未注册时静默忽略；
//! - `unregister_all`：清空全部注册，回到初始状态；
//! - `notify`：按注册顺序同步调用处理器，首个失败立即返回，剩余处理器不再执行。
//!
//! 分发器通过 `Arc<EventDispatcher>` 在多个实体间共享，注册表以内部可变性维护，
//! 因此所有操作只需 `&self`。
//!
use super::EventHandler;
use crate::domain_event::{Event, EventType};
use crate::error::{DomainError, DomainResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

type HandlerList = Vec<Arc<dyn EventHandler>>;

/// 进程内同步事件分发器
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<HashMap<EventType, HandlerList>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为事件类型追加处理器
    pub fn register(&self, event_type: EventType, handler: Arc<dyn EventHandler>) {
        debug!(
            event_type = %event_type,
            handler = handler.handler_name(),
            "register event handler"
        );

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_type)
            .or_default()
            .push(handler);
    }

    /// 移除该事件类型下与 `handler` 为同一实例的首个处理器
    pub fn unregister<H>(&self, event_type: EventType, handler: &Arc<H>)
    where
        H: EventHandler + ?Sized,
    {
        let target = Arc::as_ptr(handler).cast::<()>();
        let mut guard = self.handlers.write().unwrap_or_else(PoisonError::into_inner);

        let Some(list) = guard.get_mut(&event_type) else {
            return;
        };

        if let Some(pos) = list
            .iter()
            .position(|h| Arc::as_ptr(h).cast::<()>() == target)
        {
            let removed = list.remove(pos);
            debug!(
                event_type = %event_type,
                handler = removed.handler_name(),
                "unregister event handler"
            );
        }

        if list.is_empty() {
            guard.remove(&event_type);
        }
    }

    /// 清空所有事件类型的注册
    pub fn unregister_all(&self) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        debug!("unregister all event handlers");
    }

    /// 同步通知该事件类型下的全部处理器
    ///
    /// 处理器列表在调用前取快照，处理过程中发生的注册变更不影响本次通知。
    /// 处理器失败不会被吞掉：返回 `DomainError::EventHandler`，剩余处理器不再调用。
    pub fn notify(&self, event: &Event) -> DomainResult<()> {
        let handlers = self.handlers(event.event_type());

        if handlers.is_empty() {
            debug!(event_type = %event.event_type(), "no handlers registered, skip notify");
            return Ok(());
        }

        debug!(
            event_type = %event.event_type(),
            handlers = handlers.len(),
            "notify event handlers"
        );

        for handler in handlers {
            if let Err(err) = handler.handle(event) {
                warn!(
                    event_type = %event.event_type(),
                    handler = handler.handler_name(),
                    error = %err,
                    "event handler failed, abort remaining handlers"
                );
                return Err(DomainError::event_handler(
                    handler.handler_name(),
                    format!("{err:#}"),
                ));
            }
        }

        Ok(())
    }

    /// 该事件类型当前已注册处理器的有序快照
    pub fn handlers(&self, event_type: EventType) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event_type)
            .cloned()
            .unwrap_or_default()
    }

    pub fn handler_count(&self, event_type: EventType) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event_type)
            .map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .all(Vec::is_empty)
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let mut map = f.debug_map();
        for (event_type, list) in guard.iter() {
            let names: Vec<&str> = list.iter().map(|h| h.handler_name()).collect();
            map.entry(event_type, &names);
        }
        map.finish()
    }
}
