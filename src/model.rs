use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single employee field: scalar for most headers, a list for the
/// multi-valued ones (`projects`, `club`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }
}

/// One directory record. The field set is not a fixed schema: it is the
/// header row of the source sheet at fetch time, plus the derived fields
/// (`monthofbirth`, `yearofbirth`, `joiningyear`) when their source columns
/// exist. Every record from one fetch carries the same field set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Employee {
    pub fields: BTreeMap<String, FieldValue>,
}

impl Employee {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: FieldValue) {
        self.fields.insert(field.into(), value);
    }
}

/// Entry of the top-level `category` list. Only this list carries a `key`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct CategoryEntry {
    pub key: String,
    pub title: String,
    pub photo: String,
}

/// Entry of every grouped list other than `category`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SubCategoryEntry {
    pub title: String,
    pub photo: String,
}

/// The eleven grouped lookup lists. All keys are always present; a list is
/// empty when the source grid had no rows for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct MasterData {
    pub category: Vec<CategoryEntry>,
    pub country: Vec<SubCategoryEntry>,
    pub role: Vec<SubCategoryEntry>,
    pub birthplace: Vec<SubCategoryEntry>,
    pub yearofbirth: Vec<SubCategoryEntry>,
    pub monthofbirth: Vec<SubCategoryEntry>,
    pub project: Vec<SubCategoryEntry>,
    pub club: Vec<SubCategoryEntry>,
    pub gender: Vec<SubCategoryEntry>,
    pub joiningyear: Vec<SubCategoryEntry>,
    pub office: Vec<SubCategoryEntry>,
}

/// Fixed-shape error payload returned by both endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error_code: String,
    pub error_message: String,
}

impl ErrorBody {
    pub fn unauthorized() -> Self {
        ErrorBody {
            error_code: "unauthorized".to_string(),
            error_message: "Invalid secret key".to_string(),
        }
    }

    pub fn employee_failure() -> Self {
        ErrorBody {
            error_code: "00001".to_string(),
            error_message: "Internal Server Error".to_string(),
        }
    }

    pub fn master_data_failure() -> Self {
        ErrorBody {
            error_code: "00002".to_string(),
            error_message: "Internal Server Error".to_string(),
        }
    }
}

/// Both datasets as fetched by the client façade in one round trip.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoryData {
    pub employees: Vec<Employee>,
    pub master_data: MasterData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_serializes_as_a_flat_object() {
        let mut employee = Employee::default();
        employee.set("name", FieldValue::text("Ann"));
        employee.set(
            "projects",
            FieldValue::List(vec!["Atlas".to_string(), "Borealis".to_string()]),
        );
        assert_eq!(
            serde_json::to_value(&employee).unwrap(),
            json!({"name": "Ann", "projects": ["Atlas", "Borealis"]})
        );
    }

    #[test]
    fn field_values_round_trip_untagged() {
        let employee: Employee =
            serde_json::from_value(json!({"name": "Ann", "club": ["Soccer"]})).unwrap();
        assert_eq!(employee.get("name"), Some(&FieldValue::text("Ann")));
        assert_eq!(
            employee.get("club"),
            Some(&FieldValue::List(vec!["Soccer".to_string()]))
        );
    }

    #[test]
    fn error_payloads_have_the_fixed_shapes() {
        assert_eq!(
            serde_json::to_value(ErrorBody::unauthorized()).unwrap(),
            json!({"error_code": "unauthorized", "error_message": "Invalid secret key"})
        );
        assert_eq!(
            serde_json::to_value(ErrorBody::employee_failure()).unwrap(),
            json!({"error_code": "00001", "error_message": "Internal Server Error"})
        );
        assert_eq!(
            serde_json::to_value(ErrorBody::master_data_failure()).unwrap(),
            json!({"error_code": "00002", "error_message": "Internal Server Error"})
        );
    }

    #[test]
    fn master_data_always_carries_all_eleven_keys() {
        let value = serde_json::to_value(MasterData::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 11);
        for key in [
            "category",
            "country",
            "role",
            "birthplace",
            "yearofbirth",
            "monthofbirth",
            "project",
            "club",
            "gender",
            "joiningyear",
            "office",
        ] {
            assert!(object[key].is_array(), "missing list {key}");
        }
    }
}
