use crate::models::CustomerModel;
use crate::store::Store;
use async_trait::async_trait;
use shop_domain::customer::{Address, Customer};
use shop_domain::entity::Entity;
use shop_domain::error::{DomainError, DomainResult};
use shop_domain::persist::{CustomerRepository, Repository};
use std::sync::Arc;

/// 客户仓储
#[derive(Debug, Clone)]
pub struct InMemoryCustomerRepository {
    store: Arc<Store>,
}

impl InMemoryCustomerRepository {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    fn to_model(customer: &Customer) -> CustomerModel {
        let address = customer.address();
        CustomerModel {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(Address::number),
            zipcode: address.map(|a| a.zip().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }

    fn to_entity(model: CustomerModel) -> DomainResult<Customer> {
        let mut customer = Customer::new(model.id, model.name)?;

        if let (Some(street), Some(number), Some(zip), Some(city)) =
            (model.street, model.number, model.zipcode, model.city)
        {
            customer.set_address(Address::new(street, number, zip, city)?);
        }
        if model.active {
            customer.activate()?;
        }
        customer.add_reward_points(model.reward_points);

        Ok(customer)
    }
}

#[async_trait]
impl Repository<Customer> for InMemoryCustomerRepository {
    async fn create(&self, entity: &Customer) -> DomainResult<()> {
        self.store.customers.insert(Self::to_model(entity)).await
    }

    async fn update(&self, entity: &Customer) -> DomainResult<()> {
        if self.store.customers.update(Self::to_model(entity)).await {
            Ok(())
        } else {
            Err(DomainError::not_found("Customer not found"))
        }
    }

    async fn find(&self, id: &String) -> DomainResult<Customer> {
        let model = self
            .store
            .customers
            .find_one(id)
            .await
            .ok_or_else(|| DomainError::not_found("Customer not found"))?;
        Self::to_entity(model)
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        self.store
            .customers
            .find_all()
            .await
            .into_iter()
            .map(Self::to_entity)
            .collect()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {}
