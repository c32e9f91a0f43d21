use serde::{Deserialize, Serialize};
use std::fmt;

/// 事件类型：注册方与发布方共同使用的显式分发键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    CustomerCreated,
    CustomerAddressChanged,
    ProductCreated,
}

impl EventType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CustomerCreated => "CustomerCreated",
            Self::CustomerAddressChanged => "CustomerAddressChanged",
            Self::ProductCreated => "ProductCreated",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
