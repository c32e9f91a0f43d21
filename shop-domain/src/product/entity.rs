use super::ProductCreated;
use crate::domain_event::DomainEvent;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::eventing::EventDispatcher;

/// 商品实体
#[derive(Debug, Clone)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// 创建商品并发布 `ProductCreated`
    ///
    /// 商品只在创建时发布事件，因此仅借用分发器而不持有；
    /// 与 `Customer::with_dispatcher` 接收 `Arc` 不同，后者在地址变更时还需发布。
    /// 处理器失败时构造失败，不返回实体。
    pub fn with_dispatcher(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        dispatcher: &EventDispatcher,
    ) -> DomainResult<Self> {
        let product = Self::new(id, name, price)?;

        let event = ProductCreated {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
        }
        .to_event()?;
        dispatcher.notify(&event)?;

        Ok(product)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("Id is required"));
        }
        if self.name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        if self.price.is_nan() || self.price <= 0.0 {
            return Err(DomainError::validation("Price must be greater than zero"));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.name, name.into());
        if let Err(err) = self.validate() {
            self.name = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.price, price);
        if let Err(err) = self.validate() {
            self.price = previous;
            return Err(err);
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.price == other.price
    }
}
