//! 客户事件的日志处理器
//!
//! 仅产生日志副作用，供应用装配时按需注册。
//!
use super::{CustomerAddressChanged, CustomerCreated};
use crate::domain_event::Event;
use crate::eventing::EventHandler;
use tracing::info;

/// `CustomerCreated` 的第一条日志
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerCreatedLogHandler;

impl EventHandler for CustomerCreatedLogHandler {
    fn handler_name(&self) -> &str {
        "customer_created_log"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let created: CustomerCreated = event.payload_as()?;
        info!(
            customer_id = %created.id,
            occurred_at = %event.occurred_at(),
            "first log line for event: {}",
            event.event_type()
        );
        Ok(())
    }
}

/// `CustomerCreated` 的第二条日志
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerCreatedAuditLogHandler;

impl EventHandler for CustomerCreatedAuditLogHandler {
    fn handler_name(&self) -> &str {
        "customer_created_audit_log"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let created: CustomerCreated = event.payload_as()?;
        info!(
            customer_id = %created.id,
            occurred_at = %event.occurred_at(),
            "second log line for event: {}",
            event.event_type()
        );
        Ok(())
    }
}

/// `CustomerAddressChanged` 日志：输出客户标识与新地址
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerAddressChangedLogHandler;

impl CustomerAddressChangedLogHandler {
    pub fn render(changed: &CustomerAddressChanged) -> String {
        format!(
            "customer address: {}, {} changed to: {}",
            changed.id, changed.name, changed.address
        )
    }
}

impl EventHandler for CustomerAddressChangedLogHandler {
    fn handler_name(&self) -> &str {
        "customer_address_changed_log"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let changed: CustomerAddressChanged = event.payload_as()?;
        info!(occurred_at = %event.occurred_at(), "{}", Self::render(&changed));
        Ok(())
    }
}
