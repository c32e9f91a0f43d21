use crate::models::ProductModel;
use crate::store::Store;
use async_trait::async_trait;
use shop_domain::entity::Entity;
use shop_domain::error::{DomainError, DomainResult};
use shop_domain::persist::{ProductRepository, Repository};
use shop_domain::product::Product;
use std::sync::Arc;

/// 商品仓储
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<Store>,
}

impl InMemoryProductRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    fn to_model(product: &Product) -> ProductModel {
        ProductModel {
            id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

#[async_trait]
impl Repository<Product> for InMemoryProductRepository {
    async fn create(&self, entity: &Product) -> DomainResult<()> {
        self.store.products.insert(Self::to_model(entity)).await
    }

    async fn update(&self, entity: &Product) -> DomainResult<()> {
        if self.store.products.update(Self::to_model(entity)).await {
            Ok(())
        } else {
            Err(DomainError::not_found("Product not found"))
        }
    }

    async fn find(&self, id: &String) -> DomainResult<Product> {
        let model = self
            .store
            .products
            .find_one(id)
            .await
            .ok_or_else(|| DomainError::not_found("Product not found"))?;
        Product::new(model.id, model.name, model.price)
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        self.store
            .products
            .find_all()
            .await
            .into_iter()
            .map(|m| Product::new(m.id, m.name, m.price))
            .collect()
    }
}

impl ProductRepository for InMemoryProductRepository {}
