use crate::checkout::Order;
use crate::customer::Customer;
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::product::Product;
use async_trait::async_trait;

/// 通用仓储：将实体映射为存储行并还原
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Entity,
{
    /// 新增实体；标识已存在时返回错误
    async fn create(&self, entity: &T) -> DomainResult<()>;

    /// 覆盖已有实体；标识不存在时返回 `NotFound`
    async fn update(&self, entity: &T) -> DomainResult<()>;

    /// 按标识读取；不存在时返回 `NotFound`
    async fn find(&self, id: &T::Id) -> DomainResult<T>;

    /// 按写入顺序读取全部实体
    async fn find_all(&self) -> DomainResult<Vec<T>>;
}

pub trait CustomerRepository: Repository<Customer> {}

pub trait ProductRepository: Repository<Product> {}

pub trait OrderRepository: Repository<Order> {}
