use super::{Address, CustomerAddressChanged, CustomerCreated};
use crate::domain_event::DomainEvent;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::eventing::EventDispatcher;
use std::sync::Arc;

/// 客户实体
///
/// 激活状态机：初始为未激活，仅 `activate` 可在已设置地址时切换为激活，
/// `deactivate` 无条件回到未激活。
///
/// 若构造时注入了分发器，创建与地址变更会同步发布事件。
#[derive(Debug, Clone)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
    dispatcher: Option<Arc<EventDispatcher>>,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
            dispatcher: None,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// 创建客户并通过分发器发布 `CustomerCreated`
    ///
    /// 处理器失败时构造失败，不返回实体。
    pub fn with_dispatcher(
        id: impl Into<String>,
        name: impl Into<String>,
        dispatcher: Arc<EventDispatcher>,
    ) -> DomainResult<Self> {
        let mut customer = Self::new(id, name)?;
        customer.dispatcher = Some(dispatcher);

        customer.publish(&CustomerCreated {
            id: customer.id.clone(),
            name: customer.name.clone(),
        })?;

        Ok(customer)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("Id is required"));
        }
        if self.name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        Ok(())
    }

    fn publish(&self, event: &impl DomainEvent) -> DomainResult<()> {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.notify(&event.to_event()?),
            None => Ok(()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.name, name.into());
        if let Err(err) = self.validate() {
            self.name = previous;
            return Err(err);
        }
        Ok(())
    }

    /// 直接设置地址，不发布事件（用于装配或重建）
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// 变更地址并发布 `CustomerAddressChanged`
    ///
    /// 地址先于通知写入，处理器失败不会回滚地址。
    pub fn change_address(&mut self, address: Address) -> DomainResult<()> {
        self.address = Some(address.clone());

        self.publish(&CustomerAddressChanged {
            id: self.id.clone(),
            name: self.name.clone(),
            address,
        })
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        if self.address.is_none() {
            return Err(DomainError::validation(
                "Address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// 累加积分，达到 `u64::MAX` 后保持不变
    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

impl Entity for Customer {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// 分发器属于运行时协作者，不参与领域状态比较
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.address == other.address
            && self.active == other.active
            && self.reward_points == other.reward_points
    }
}
