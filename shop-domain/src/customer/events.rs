use super::Address;
use crate::domain_event::{DomainEvent, EventType};
use serde::{Deserialize, Serialize};

/// 客户已创建
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
}

impl DomainEvent for CustomerCreated {
    const EVENT_TYPE: EventType = EventType::CustomerCreated;
}

/// 客户地址已变更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddressChanged {
    pub id: String,
    pub name: String,
    pub address: Address,
}

impl DomainEvent for CustomerAddressChanged {
    const EVENT_TYPE: EventType = EventType::CustomerAddressChanged;
}
