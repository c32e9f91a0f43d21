use serde_json::json;
use shop_domain::checkout::{Order, OrderItem};
use shop_domain::customer::{Address, Customer};
use shop_domain::entity::Entity;
use shop_domain::error::DomainError;
use shop_domain::persist::Repository;
use shop_domain::product::Product;
use shop_infra::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository, Store,
};
use std::sync::Arc;

async fn create_customer(store: &Arc<Store>) -> Customer {
    let repo = InMemoryCustomerRepository::new(store.clone());
    let mut customer = Customer::new("123", "Customer 1").unwrap();
    customer
        .change_address(Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap())
        .unwrap();
    repo.create(&customer).await.unwrap();
    customer
}

async fn create_product(store: &Arc<Store>) -> Product {
    let repo = InMemoryProductRepository::new(store.clone());
    let product = Product::new("123", "Product 1", 10.0).unwrap();
    repo.create(&product).await.unwrap();
    product
}

fn order_item(id: &str, product: &Product) -> OrderItem {
    OrderItem::new(id, product.name(), product.price(), product.id(), 2)
}

#[tokio::test]
async fn creates_order_with_item_rows() {
    let store = Arc::new(Store::new());
    let customer = create_customer(&store).await;
    let product = create_product(&store).await;
    let item = order_item("1", &product);
    let order = Order::new("123", customer.id(), vec![item.clone()]).unwrap();

    let repo = InMemoryOrderRepository::new(store.clone());
    repo.create(&order).await.unwrap();

    let model = store.order_with_items(order.id()).await.unwrap();
    assert_eq!(
        serde_json::to_value(&model).unwrap(),
        json!({
            "id": "123",
            "customer_id": "123",
            "total": order.total(),
            "items": [{
                "id": item.id(),
                "name": item.name(),
                "price": item.price(),
                "quantity": item.quantity(),
                "order_id": "123",
                "product_id": "123",
            }],
        })
    );
}

#[tokio::test]
async fn updates_order_items() {
    let store = Arc::new(Store::new());
    let customer = create_customer(&store).await;
    let product = create_product(&store).await;
    let first = order_item("1", &product);
    let mut order = Order::new("123", customer.id(), vec![first.clone()]).unwrap();

    let repo = InMemoryOrderRepository::new(store.clone());
    repo.create(&order).await.unwrap();

    let second = order_item("2", &product);
    order.add_item(second.clone()).unwrap();
    repo.update(&order).await.unwrap();

    let model = store.order_with_items(order.id()).await.unwrap();
    assert_eq!(model.total, order.total());
    let item_ids: Vec<&str> = model.items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(item_ids, vec!["1", "2"]);
    assert!(model.items.iter().all(|i| i.order_id == "123"));
    assert!(model.items.iter().all(|i| i.product_id == product.id().as_str()));
}

#[tokio::test]
async fn finds_an_order() {
    let store = Arc::new(Store::new());
    let customer = create_customer(&store).await;
    let product = create_product(&store).await;
    let order = Order::new("123", customer.id(), vec![order_item("456", &product)]).unwrap();

    let repo = InMemoryOrderRepository::new(store.clone());
    repo.create(&order).await.unwrap();

    let found = repo.find(order.id()).await.unwrap();
    assert_eq!(found, order);
}

#[tokio::test]
async fn finds_all_orders_in_creation_order() {
    let store = Arc::new(Store::new());
    let customer = create_customer(&store).await;
    let product = create_product(&store).await;
    let order1 = Order::new("123", customer.id(), vec![order_item("456", &product)]).unwrap();
    let order2 = Order::new("321", customer.id(), vec![order_item("654", &product)]).unwrap();

    let repo = InMemoryOrderRepository::new(store.clone());
    repo.create(&order1).await.unwrap();
    repo.create(&order2).await.unwrap();

    let orders = repo.find_all().await.unwrap();
    assert_eq!(orders, vec![order1, order2]);
}

#[tokio::test]
async fn unknown_order_is_not_found() {
    let repo = InMemoryOrderRepository::new(Arc::new(Store::new()));

    match repo.find(&"missing".to_string()).await.unwrap_err() {
        DomainError::NotFound { reason } => assert_eq!(reason, "Order not found"),
        other => panic!("unexpected {other:?}"),
    }
}

// 订单项主键冲突时订单头一并撤销
#[tokio::test]
async fn failed_item_insert_rolls_back_header() {
    let store = Arc::new(Store::new());
    let product = create_product(&store).await;
    let repo = InMemoryOrderRepository::new(store.clone());

    let first = Order::new("1", "c1", vec![order_item("shared", &product)]).unwrap();
    repo.create(&first).await.unwrap();

    let clash = Order::new("2", "c1", vec![order_item("shared", &product)]).unwrap();
    assert!(matches!(
        repo.create(&clash).await,
        Err(DomainError::Repository { .. })
    ));
    assert!(store.orders.find_one("2").await.is_none());
    assert_eq!(repo.find_all().await.unwrap(), vec![first]);
}

// 订单项主键与其他订单冲突时，更新失败且原订单保持不变
#[tokio::test]
async fn failed_item_update_restores_previous_order() {
    let store = Arc::new(Store::new());
    let product = create_product(&store).await;
    let repo = InMemoryOrderRepository::new(store.clone());

    let first = Order::new("o1", "c1", vec![order_item("i1", &product)]).unwrap();
    let second = Order::new("o2", "c1", vec![order_item("i2", &product)]).unwrap();
    repo.create(&first).await.unwrap();
    repo.create(&second).await.unwrap();

    let mut changed = first.clone();
    changed.add_item(order_item("i2", &product)).unwrap();
    assert!(matches!(
        repo.update(&changed).await,
        Err(DomainError::Repository { .. })
    ));

    let header = store.orders.find_one("o1").await.unwrap();
    assert_eq!(header.total, first.total());
    assert_eq!(repo.find(first.id()).await.unwrap(), first);
    assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
}
