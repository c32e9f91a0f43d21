//! 内存关系存储（Store）
//!
//! 以 `Table<T>` 表示一张按主键去重、按写入顺序保存的表，
//! `Store` 聚合商城所需的全部表，由各仓储通过 `Arc<Store>` 共享。
//!
use crate::models::{CustomerModel, OrderItemModel, OrderModel, ProductModel};
use shop_domain::error::{DomainError, DomainResult};
use tokio::sync::RwLock;
use tracing::debug;

/// 具有主键的行
pub trait Row: Clone + Send + Sync {
    fn key(&self) -> &str;
}

impl Row for CustomerModel {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Row for ProductModel {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Row for OrderModel {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Row for OrderItemModel {
    fn key(&self) -> &str {
        &self.id
    }
}

/// 单表：主键唯一，行保持插入顺序
#[derive(Debug)]
pub struct Table<T> {
    name: &'static str,
    rows: RwLock<Vec<T>>,
}

impl<T: Row> Table<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// 插入一行；主键冲突返回 `Repository` 错误
    pub async fn insert(&self, row: T) -> DomainResult<()> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.key() == row.key()) {
            return Err(DomainError::repository(format!(
                "duplicate key {} in table {}",
                row.key(),
                self.name
            )));
        }
        debug!(table = self.name, key = row.key(), "insert row");
        rows.push(row);
        Ok(())
    }

    /// 批量插入；任一主键冲突时整批不写入
    pub async fn insert_all(&self, batch: Vec<T>) -> DomainResult<()> {
        let mut rows = self.rows.write().await;
        for (i, row) in batch.iter().enumerate() {
            let clash_existing = rows.iter().any(|r| r.key() == row.key());
            let clash_batch = batch[..i].iter().any(|r| r.key() == row.key());
            if clash_existing || clash_batch {
                return Err(DomainError::repository(format!(
                    "duplicate key {} in table {}",
                    row.key(),
                    self.name
                )));
            }
        }
        debug!(table = self.name, rows = batch.len(), "insert rows");
        rows.extend(batch);
        Ok(())
    }

    /// 按主键原位覆盖；返回是否命中
    pub async fn update(&self, row: T) -> bool {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|r| r.key() == row.key()) {
            Some(slot) => {
                debug!(table = self.name, key = row.key(), "update row");
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub async fn find_one(&self, key: &str) -> Option<T> {
        self.rows
            .read()
            .await
            .iter()
            .find(|r| r.key() == key)
            .cloned()
    }

    pub async fn find_all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn find_where<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|r| predicate(*r))
            .cloned()
            .collect()
    }

    /// 删除满足条件的行，返回删除数量
    pub async fn delete_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| !predicate(r));
        let removed = before - rows.len();
        if removed > 0 {
            debug!(table = self.name, rows = removed, "delete rows");
        }
        removed
    }
}

/// 商城的全部表
#[derive(Debug)]
pub struct Store {
    pub customers: Table<CustomerModel>,
    pub products: Table<ProductModel>,
    /// 订单头；`items` 不落表，读取时由 `order_items` 关联填充
    pub orders: Table<OrderModel>,
    pub order_items: Table<OrderItemModel>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            customers: Table::new("customers"),
            products: Table::new("products"),
            orders: Table::new("orders"),
            order_items: Table::new("order_items"),
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取订单并携带其订单项（按写入顺序）
    pub async fn order_with_items(&self, order_id: &str) -> Option<OrderModel> {
        let mut order = self.orders.find_one(order_id).await?;
        order.items = self
            .order_items
            .find_where(|item| item.order_id == order_id)
            .await;
        Some(order)
    }
}
