use crate::entity::Entity;

/// 订单项：下单时的商品快照与数量
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: u32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// 单价 × 数量
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl Entity for OrderItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
