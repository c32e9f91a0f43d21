use super::event_type::EventType;
use crate::error::DomainResult;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 已发生的事实：类型、发生时间与不透明载荷
///
/// 字段私有且只提供读取方法，构造完成后不可再修改；
/// `occurred_at` 在构造时确定，而不是在分发时确定。
#[derive(Debug, Clone, PartialEq, Builder, Serialize)]
pub struct Event {
    event_type: EventType,
    #[builder(default = Utc::now())]
    occurred_at: DateTime<Utc>,
    payload: Value,
}

impl Event {
    /// 以当前时间创建事件
    pub fn new(event_type: EventType, payload: Value) -> Self {
        Self {
            event_type,
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// 将类型化载荷序列化后创建事件
    pub fn from_payload<T>(event_type: EventType, payload: &T) -> DomainResult<Self>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::new(event_type, serde_json::to_value(payload)?))
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn occurred_at(&self) -> &DateTime<Utc> {
        &self.occurred_at
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// 以类型化视图读取载荷
    pub fn payload_as<T>(&self) -> DomainResult<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use chrono::TimeZone;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Named {
        id: String,
        name: String,
    }

    #[test]
    fn new_stamps_current_time() {
        let before = Utc::now();
        let event = Event::new(EventType::CustomerCreated, json!({"id": "1"}));
        let after = Utc::now();

        assert_eq!(event.event_type(), EventType::CustomerCreated);
        assert!(*event.occurred_at() >= before && *event.occurred_at() <= after);
        assert_eq!(event.payload(), &json!({"id": "1"}));
    }

    #[test]
    fn builder_accepts_fixed_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 4, 27, 0, 0, 0).unwrap();
        let event = Event::builder()
            .event_type(EventType::ProductCreated)
            .occurred_at(at)
            .payload(json!({"id": "p-1"}))
            .build();

        assert_eq!(event.occurred_at(), &at);
    }

    #[test]
    fn typed_payload_roundtrip() {
        let payload = Named {
            id: "1".into(),
            name: "Customer 1".into(),
        };
        let event = Event::from_payload(EventType::CustomerCreated, &payload).unwrap();
        assert_eq!(event.payload(), &json!({"id": "1", "name": "Customer 1"}));

        let back: Named = event.payload_as().unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn payload_shape_mismatch_is_a_serde_error() {
        let event = Event::new(EventType::CustomerCreated, json!({"id": 1}));
        match event.payload_as::<Named>().unwrap_err() {
            DomainError::Serde { .. } => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn clones_keep_their_timestamp() {
        let event = Event::new(EventType::CustomerCreated, Value::Null);
        let copy = event.clone();
        assert_eq!(copy.occurred_at(), event.occurred_at());
    }
}
