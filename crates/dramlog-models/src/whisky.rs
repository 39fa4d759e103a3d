use serde::{Deserialize, Serialize};

/// The whisky being reviewed. Only the name is required; everything else
/// is bottle metadata the reviewer may or may not know.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Whisky {
    pub name: String,
    #[serde(default)]
    pub distillery: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cask: Option<String>,
    /// Position on the 0.0-2.0 whisky color scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottling_type: Option<BottlingType>,
    /// e.g. "234/500"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottle_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_date: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BottlingType {
    Official,
    #[serde(rename = "ib")]
    Independent,
    SingleCask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottling_type_wire_values() {
        assert_eq!(serde_json::to_string(&BottlingType::Official).unwrap(), r#""official""#);
        assert_eq!(serde_json::to_string(&BottlingType::Independent).unwrap(), r#""ib""#);
        assert_eq!(serde_json::to_string(&BottlingType::SingleCask).unwrap(), r#""single_cask""#);
    }

    #[test]
    fn test_whisky_camel_case_wire_format() {
        let whisky = Whisky {
            name: "Springbank 10".to_string(),
            bottling_type: Some(BottlingType::Official),
            bottle_number: Some("234/500".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&whisky).unwrap();
        assert!(json.contains(r#""bottlingType":"official""#));
        assert!(json.contains(r#""bottleNumber":"234/500""#));
    }
}
