//! Frontend Models
//!
//! Data structures matching the local API and the IBGE geography service.

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel value of both dropdowns before anything is chosen
pub const UNSELECTED: &str = "0";

/// Recyclable-item category (matches backend `/items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub image_url: String,
}

/// Brazilian federated state (IBGE `/estados`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Uf {
    pub id: u32,
    #[serde(rename = "sigla")]
    pub code: String,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Municipality (IBGE `/estados/{uf}/municipios`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Body of `POST /points`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<String>,
}

/// The items API has served both numeric and string ids
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_accepts_string_and_numeric_ids() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"id":"1","title":"Papel","image_url":"/p.png"},
                {"id":2,"title":"Vidro","image_url":"/v.png"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].id, "1");
        assert_eq!(items[1].id, "2");
        assert_eq!(items[1].title, "Vidro");
    }

    #[test]
    fn test_uf_reads_ibge_fields() {
        let ufs: Vec<Uf> = serde_json::from_str(
            r#"[{"id":35,"sigla":"SP","nome":"São Paulo","regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}}]"#,
        )
        .unwrap();
        assert_eq!(ufs[0].code, "SP");
        assert_eq!(ufs[0].name, "São Paulo");
    }

    #[test]
    fn test_city_reads_ibge_fields() {
        let cities: Vec<City> =
            serde_json::from_str(r#"[{"id":3550308,"nome":"São Paulo","microrregiao":null}]"#).unwrap();
        assert_eq!(cities, vec![City { id: 3550308, name: "São Paulo".to_string() }]);
    }

    #[test]
    fn test_new_point_serializes_flat() {
        let point = NewPoint {
            name: "Acme".to_string(),
            email: "a@b.c".to_string(),
            whatsapp: "119".to_string(),
            uf: "SP".to_string(),
            city: "Santos".to_string(),
            latitude: -23.9,
            longitude: -46.3,
            items: vec!["1".to_string(), "3".to_string()],
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["uf"], "SP");
        assert_eq!(json["items"], serde_json::json!(["1", "3"]));
    }
}
