use crate::models::{OrderItemModel, OrderModel};
use crate::store::Store;
use async_trait::async_trait;
use shop_domain::checkout::{Order, OrderItem};
use shop_domain::entity::Entity;
use shop_domain::error::{DomainError, DomainResult};
use shop_domain::persist::{OrderRepository, Repository};
use std::sync::Arc;
use tracing::{debug, warn};

/// 订单仓储：订单头写入 orders，订单项写入 order_items
#[derive(Debug, Clone)]
pub struct InMemoryOrderRepository {
    store: Arc<Store>,
}

impl InMemoryOrderRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    fn header(order: &Order) -> OrderModel {
        OrderModel {
            id: order.id().clone(),
            customer_id: order.customer_id().to_string(),
            total: order.total(),
            items: Vec::new(),
        }
    }

    fn item_rows(order: &Order) -> Vec<OrderItemModel> {
        order
            .items()
            .iter()
            .map(|item| OrderItemModel {
                id: item.id().clone(),
                name: item.name().to_string(),
                price: item.price(),
                quantity: item.quantity(),
                order_id: order.id().clone(),
                product_id: item.product_id().to_string(),
            })
            .collect()
    }

    fn to_entity(model: OrderModel) -> DomainResult<Order> {
        let items = model
            .items
            .into_iter()
            .map(|i| OrderItem::new(i.id, i.name, i.price, i.product_id, i.quantity))
            .collect();
        Order::new(model.id, model.customer_id, items)
    }
}

#[async_trait]
impl Repository<Order> for InMemoryOrderRepository {
    async fn create(&self, entity: &Order) -> DomainResult<()> {
        self.store.orders.insert(Self::header(entity)).await?;

        if let Err(err) = self.store.order_items.insert_all(Self::item_rows(entity)).await {
            // 订单项写入失败时撤销订单头
            let id = entity.id();
            self.store.orders.delete_where(|o| &o.id == id).await;
            return Err(err);
        }
        Ok(())
    }

    async fn update(&self, entity: &Order) -> DomainResult<()> {
        let id = entity.id();
        let Some(previous) = self.store.orders.find_one(id).await else {
            return Err(DomainError::not_found("Order not found"));
        };
        let previous_items = self
            .store
            .order_items
            .find_where(|item| &item.order_id == id)
            .await;

        self.store.orders.update(Self::header(entity)).await;
        let removed = self
            .store
            .order_items
            .delete_where(|item| &item.order_id == id)
            .await;
        debug!(order_id = %id, removed, "replace order items");

        if let Err(err) = self.store.order_items.insert_all(Self::item_rows(entity)).await {
            // 新订单项写入失败时恢复原订单头与订单项
            warn!(order_id = %id, error = %err, "restore order after failed update");
            self.store.orders.update(previous).await;
            self.store.order_items.insert_all(previous_items).await?;
            return Err(err);
        }
        Ok(())
    }

    async fn find(&self, id: &String) -> DomainResult<Order> {
        let model = self
            .store
            .order_with_items(id)
            .await
            .ok_or_else(|| DomainError::not_found("Order not found"))?;
        Self::to_entity(model)
    }

    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        let mut orders = Vec::new();
        for header in self.store.orders.find_all().await {
            if let Some(model) = self.store.order_with_items(&header.id).await {
                orders.push(Self::to_entity(model)?);
            }
        }
        Ok(orders)
    }
}

impl OrderRepository for InMemoryOrderRepository {}
