use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One employee as the API stores it. Every field is an opaque string.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    #[serde(default, deserialize_with = "opaque_text")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub name: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub email: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub address: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub phone: String,
}

/// Accepts any JSON value as field text: strings verbatim, `null` as empty,
/// anything else in its JSON form.
fn opaque_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Current values of the create form. Field names follow the input ids of
/// the page (`id`, `name`, `email`, `address`, `phone`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmployeeForm {
    #[serde(rename = "id")]
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

impl EmployeeForm {
    /// Snapshot of the fields at submission time.
    pub fn to_record(&self) -> EmployeeRecord {
        EmployeeRecord {
            employee_id: self.employee_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.employee_id,
            &self.name,
            &self.email,
            &self.address,
            &self.phone,
        ]
        .iter()
        .all(|value| value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        EmployeeForm {
            employee_id: "7".into(),
            name: "Ana".into(),
            email: "a@x.com".into(),
            address: "Rd 1".into(),
            phone: "555".into(),
        }
    }

    #[test]
    fn record_mirrors_form_fields() {
        let record = filled().to_record();
        assert_eq!(record.employee_id, "7");
        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.address, "Rd 1");
        assert_eq!(record.phone, "555");
    }

    #[test]
    fn reset_empties_every_field() {
        let mut form = filled();
        assert!(!form.is_blank());
        form.reset();
        assert!(form.is_blank());
        assert_eq!(form, EmployeeForm::default());
    }
}
