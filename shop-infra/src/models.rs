//! 行模型（Row Model）
//!
//! 每个结构体对应一张表的一行，字段即列；与领域实体解耦，
//! 由仓储负责两者之间的映射。
//!
use serde::Serialize;

/// customers 表；地址列可为空
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerModel {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<u32>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: u64,
}

/// products 表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductModel {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// orders 表；读取时携带关联的订单项行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderModel {
    pub id: String,
    pub customer_id: String,
    pub total: f64,
    pub items: Vec<OrderItemModel>,
}

/// order_items 表
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemModel {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub order_id: String,
    pub product_id: String,
}
