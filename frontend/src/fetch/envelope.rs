use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::transport::FetchError;

/// The wrapper a backend endpoint puts around its payload array.
///
/// The backend is not consistent: some collections answer
/// `{"status": 200, "data": [...]}` and others `{"success": true, "data": [...]}`,
/// so every endpoint names the one it speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    StatusCode,
    SuccessFlag,
}

#[derive(Deserialize)]
struct Wrapped {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    success: Option<bool>,
    data: Option<Value>,
}

impl Envelope {
    pub fn unwrap_data<R: DeserializeOwned>(self, body: &str) -> Result<Vec<R>, FetchError> {
        match self.open(body)? {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(|e| FetchError::Shape(e.to_string())))
                .collect(),
            _ => Err(FetchError::Shape("data is not an array".to_string())),
        }
    }

    /// Single-object variant used by lookups that answer one record.
    pub fn unwrap_one<R: DeserializeOwned>(self, body: &str) -> Result<R, FetchError> {
        let data = self
            .open(body)?
            .ok_or_else(|| FetchError::Shape("missing data".to_string()))?;
        serde_json::from_value(data).map_err(|e| FetchError::Shape(e.to_string()))
    }

    fn open(self, body: &str) -> Result<Option<Value>, FetchError> {
        let wrapped: Wrapped = serde_json::from_str(body)
            .map_err(|e| FetchError::Shape(e.to_string()))?;
        let marked = match self {
            Envelope::StatusCode => wrapped.status.as_ref().and_then(Value::as_u64) == Some(200),
            Envelope::SuccessFlag => wrapped.success == Some(true),
        };
        if !marked {
            return Err(FetchError::Shape(format!("missing {} marker", self.marker())));
        }
        Ok(wrapped.data)
    }

    fn marker(self) -> &'static str {
        match self {
            Envelope::StatusCode => "status: 200",
            Envelope::SuccessFlag => "success: true",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn status_envelope_yields_items() {
        let items: Vec<Item> = Envelope::StatusCode
            .unwrap_data(r#"{"status":200,"data":[{"id":1},{"id":2}]}"#)
            .unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn success_envelope_yields_items() {
        let items: Vec<Item> = Envelope::SuccessFlag
            .unwrap_data(r#"{"success":true,"data":[{"id":7}]}"#)
            .unwrap();
        assert_eq!(items, vec![Item { id: 7 }]);
    }

    #[test]
    fn wrong_marker_is_a_shape_error() {
        let err = Envelope::StatusCode
            .unwrap_data::<Item>(r#"{"success":true,"data":[]}"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));

        let err = Envelope::SuccessFlag
            .unwrap_data::<Item>(r#"{"success":false,"data":[]}"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
    }

    #[test]
    fn non_array_data_is_rejected() {
        let err = Envelope::StatusCode
            .unwrap_data::<Item>(r#"{"status":200,"data":{"id":1}}"#)
            .unwrap_err();
        assert_eq!(err, FetchError::Shape("data is not an array".to_string()));
    }

    #[test]
    fn empty_data_is_success() {
        let items: Vec<Item> = Envelope::StatusCode
            .unwrap_data(r#"{"status":200,"data":[]}"#)
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn garbage_body_is_a_shape_error() {
        assert!(matches!(
            Envelope::SuccessFlag.unwrap_data::<Item>("<html>"),
            Err(FetchError::Shape(_))
        ));
    }

    #[test]
    fn single_record_unwraps() {
        let item: Item = Envelope::SuccessFlag
            .unwrap_one(r#"{"success":true,"data":{"id":3}}"#)
            .unwrap();
        assert_eq!(item, Item { id: 3 });
    }
}
