//! 商品（Product）上下文

mod entity;
mod events;
pub mod handlers;

pub use entity::Product;
pub use events::ProductCreated;
