use super::ProductCreated;
use crate::domain_event::Event;
use crate::eventing::EventHandler;
use tracing::info;

/// 商品创建通知（以日志代替实际发信）
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductCreatedNotificationHandler;

impl EventHandler for ProductCreatedNotificationHandler {
    fn handler_name(&self) -> &str {
        "product_created_notification"
    }

    fn handle(&self, event: &Event) -> anyhow::Result<()> {
        let created: ProductCreated = event.payload_as()?;
        info!(
            product_id = %created.id,
            price = created.price,
            "sending notification: product {} was created",
            created.name
        );
        Ok(())
    }
}
