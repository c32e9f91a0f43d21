use crate::domain_event::{DomainEvent, EventType};
use serde::{Deserialize, Serialize};

/// 商品已创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl DomainEvent for ProductCreated {
    const EVENT_TYPE: EventType = EventType::ProductCreated;
}
