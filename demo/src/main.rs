//! 演示：装配分发器、处理器、实体与内存仓储，走一遍客户与订单的生命周期。
mod config;

use anyhow::Result;
use config::{DemoConfig, LogFormat};
use shop_domain::checkout::{Order, OrderItem};
use shop_domain::customer::handlers::{
    CustomerAddressChangedLogHandler, CustomerCreatedAuditLogHandler, CustomerCreatedLogHandler,
};
use shop_domain::customer::{Address, Customer};
use shop_domain::domain_event::EventType;
use shop_domain::entity::Entity;
use shop_domain::eventing::EventDispatcher;
use shop_domain::persist::Repository;
use shop_domain::product::Product;
use shop_domain::product::handlers::ProductCreatedNotificationHandler;
use shop_infra::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository, Store,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(cfg: &DemoConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&cfg.log_filter)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match cfg.log_format {
        LogFormat::Plain => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
}

fn wire_dispatcher() -> Arc<EventDispatcher> {
    let dispatcher = Arc::new(EventDispatcher::new());
    dispatcher.register(EventType::CustomerCreated, Arc::new(CustomerCreatedLogHandler));
    dispatcher.register(
        EventType::CustomerCreated,
        Arc::new(CustomerCreatedAuditLogHandler),
    );
    dispatcher.register(
        EventType::CustomerAddressChanged,
        Arc::new(CustomerAddressChangedLogHandler),
    );
    dispatcher.register(
        EventType::ProductCreated,
        Arc::new(ProductCreatedNotificationHandler),
    );
    dispatcher
}

/// 每消费 2 元积 1 分，不足 1 分向下取整
fn reward_points_for(total: f64) -> u64 {
    (total / 2.0).floor() as u64
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cfg = DemoConfig::from_env()?;
    init_tracing(&cfg)?;

    let dispatcher = wire_dispatcher();
    let store = Arc::new(Store::new());
    let customers = InMemoryCustomerRepository::new(store.clone());
    let products = InMemoryProductRepository::new(store.clone());
    let orders = InMemoryOrderRepository::new(store.clone());

    let mut customer = Customer::with_dispatcher("c-1", "Customer 1", dispatcher.clone())?;
    customer.change_address(Address::new("Street 1", 1, "01000-000", "City 1")?)?;
    customer.activate()?;
    customers.create(&customer).await?;

    let product = Product::with_dispatcher("p-1", "Product 1", 10.0, &dispatcher)?;
    products.create(&product).await?;

    let order = Order::new(
        "o-1",
        customer.id(),
        vec![OrderItem::new(
            "i-1",
            product.name(),
            product.price(),
            product.id(),
            3,
        )],
    )?;
    orders.create(&order).await?;

    customer.add_reward_points(reward_points_for(order.total()));
    customers.update(&customer).await?;

    let stored = customers.find(customer.id()).await?;
    info!(
        customer_id = %stored.id(),
        active = stored.is_active(),
        reward_points = stored.reward_points(),
        order_total = order.total(),
        "demo finished"
    );

    dispatcher.unregister_all();
    Ok(())
}
