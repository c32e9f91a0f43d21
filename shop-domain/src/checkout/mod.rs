//! 结算（Checkout）上下文：订单与订单项

mod order;
mod order_item;

pub use order::Order;
pub use order_item::OrderItem;
