use shop_domain::customer::{Address, Customer};
use shop_domain::domain_event::{Event, EventType};
use shop_domain::entity::Entity;
use shop_domain::error::DomainError;
use shop_domain::eventing::{EventDispatcher, EventHandler};
use shop_domain::persist::Repository;
use shop_domain::product::Product;
use shop_infra::{InMemoryCustomerRepository, InMemoryProductRepository, Store};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn address() -> Address {
    Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap()
}

#[tokio::test]
async fn creates_and_finds_customer() {
    let store = Arc::new(Store::new());
    let repo = InMemoryCustomerRepository::new(store.clone());
    let mut customer = Customer::new("123", "Customer 1").unwrap();
    customer.set_address(address());
    customer.activate().unwrap();
    customer.add_reward_points(15);

    repo.create(&customer).await.unwrap();

    let row = store.customers.find_one("123").await.unwrap();
    assert_eq!(row.street.as_deref(), Some("Street 1"));
    assert_eq!(row.number, Some(1));
    assert_eq!(row.zipcode.as_deref(), Some("Zipcode 1"));
    assert_eq!(row.city.as_deref(), Some("City 1"));
    assert!(row.active);
    assert_eq!(row.reward_points, 15);

    assert_eq!(repo.find(customer.id()).await.unwrap(), customer);
}

#[tokio::test]
async fn customer_without_address_roundtrips() {
    let repo = InMemoryCustomerRepository::new(Arc::new(Store::new()));
    let customer = Customer::new("1", "Customer 1").unwrap();

    repo.create(&customer).await.unwrap();

    let found = repo.find(&"1".to_string()).await.unwrap();
    assert!(found.address().is_none());
    assert!(!found.is_active());
}

#[tokio::test]
async fn updates_customer() {
    let repo = InMemoryCustomerRepository::new(Arc::new(Store::new()));
    let mut customer = Customer::new("123", "Customer 1").unwrap();
    customer.set_address(address());
    repo.create(&customer).await.unwrap();

    customer.change_name("Customer 2").unwrap();
    repo.update(&customer).await.unwrap();

    assert_eq!(repo.find(customer.id()).await.unwrap().name(), "Customer 2");
}

#[tokio::test]
async fn update_of_unknown_customer_is_not_found() {
    let repo = InMemoryCustomerRepository::new(Arc::new(Store::new()));
    let customer = Customer::new("404", "Ghost").unwrap();

    match repo.update(&customer).await.unwrap_err() {
        DomainError::NotFound { reason } => assert_eq!(reason, "Customer not found"),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn unknown_customer_is_not_found() {
    let repo = InMemoryCustomerRepository::new(Arc::new(Store::new()));

    let err = repo.find(&"456ABC".to_string()).await.unwrap_err();
    assert_eq!(err.to_string(), "not found: Customer not found");
}

#[tokio::test]
async fn finds_all_customers() {
    let repo = InMemoryCustomerRepository::new(Arc::new(Store::new()));
    let mut first = Customer::new("1", "Customer 1").unwrap();
    first.set_address(address());
    first.add_reward_points(10);
    let second = Customer::new("2", "Customer 2").unwrap();

    repo.create(&first).await.unwrap();
    repo.create(&second).await.unwrap();

    assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
}

struct Counter(AtomicUsize);

impl EventHandler for Counter {
    fn handler_name(&self) -> &str {
        "counter"
    }

    fn handle(&self, _event: &Event) -> anyhow::Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// 从仓储重建实体不会再次发布创建事件
#[tokio::test]
async fn loading_does_not_publish_events() {
    let dispatcher = Arc::new(EventDispatcher::new());
    let counter = Arc::new(Counter(AtomicUsize::new(0)));
    dispatcher.register(EventType::CustomerCreated, counter.clone());

    let repo = InMemoryCustomerRepository::new(Arc::new(Store::new()));
    let customer = Customer::with_dispatcher("1", "Customer 1", dispatcher).unwrap();
    repo.create(&customer).await.unwrap();

    repo.find(customer.id()).await.unwrap();
    repo.find_all().await.unwrap();

    assert_eq!(counter.0.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn creates_updates_and_lists_products() {
    let store = Arc::new(Store::new());
    let repo = InMemoryProductRepository::new(store.clone());
    let mut product = Product::new("1", "Product 1", 100.0).unwrap();
    let other = Product::new("2", "Product 2", 200.0).unwrap();

    repo.create(&product).await.unwrap();
    repo.create(&other).await.unwrap();

    product.change_name("Product 1b").unwrap();
    product.change_price(120.0).unwrap();
    repo.update(&product).await.unwrap();

    assert_eq!(repo.find(product.id()).await.unwrap(), product);
    assert_eq!(repo.find_all().await.unwrap(), vec![product, other]);
}

#[tokio::test]
async fn duplicate_product_is_rejected() {
    let repo = InMemoryProductRepository::new(Arc::new(Store::new()));
    let product = Product::new("1", "Product 1", 100.0).unwrap();
    repo.create(&product).await.unwrap();

    assert!(matches!(
        repo.create(&product).await,
        Err(DomainError::Repository { .. })
    ));
}
