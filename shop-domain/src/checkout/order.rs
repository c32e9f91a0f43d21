use super::OrderItem;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// 订单实体
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> DomainResult<Self> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("Id is required"));
        }
        if self.customer_id.is_empty() {
            return Err(DomainError::validation("CustomerId is required"));
        }
        if self.items.is_empty() {
            return Err(DomainError::validation("Items are required"));
        }
        if self.items.iter().any(|item| item.quantity() == 0) {
            return Err(DomainError::validation("Quantity must be greater than 0"));
        }
        Ok(())
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// 追加订单项；校验失败时撤销追加
    pub fn add_item(&mut self, item: OrderItem) -> DomainResult<()> {
        self.items.push(item);
        if let Err(err) = self.validate() {
            self.items.pop();
            return Err(err);
        }
        Ok(())
    }
}

impl Entity for Order {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
