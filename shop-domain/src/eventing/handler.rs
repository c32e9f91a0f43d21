//! 事件处理器（EventHandler）
//!
//! 定义消费事件的处理逻辑与名称；处理器绑定到哪类事件由注册时决定。
//!
use crate::domain_event::Event;

/// 事件处理器：处理某一类型的事件
pub trait EventHandler: Send + Sync {
    /// 处理器名称（用于失败定位与日志）
    fn handler_name(&self) -> &str;

    /// 处理事件，返回错误将中止本次通知中剩余的处理器
    fn handle(&self, event: &Event) -> anyhow::Result<()>;
}
