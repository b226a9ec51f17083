use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// Catalog product as delivered by the catalog API.
///
/// Read-only to the engine. No schema validation happens here: fields the API
/// omits come through as empty strings or zero rather than failing the whole
/// list, and the extra display fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            category: category.into(),
            brand: None,
            thumbnail: None,
            rating: None,
            stock: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Price as shown on a product card, e.g. `$9.99` or `$10`.
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }

    /// Route of the product detail page.
    pub fn details_path(&self) -> String {
        format!("/products/{}", self.id)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_record_and_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "Popular mascara",
            "price": 9.99,
            "category": "beauty",
            "brand": "Essence",
            "rating": 4.94,
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "thumbnail": "https://cdn.example.com/1/thumbnail.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Numeric(1));
        assert_eq!(product.category, "beauty");
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.stock, Some(5));
        assert_eq!(product.display_price(), "$9.99");
    }

    #[test]
    fn missing_fields_propagate_as_empty_values() {
        let product: Product = serde_json::from_str(r#"{"id": "p-1"}"#).unwrap();
        assert_eq!(product.id, ProductId::Text("p-1".to_string()));
        assert_eq!(product.title, "");
        assert_eq!(product.category, "");
        assert_eq!(product.price, 0.0);
        assert!(product.thumbnail.is_none());
    }

    #[test]
    fn whole_prices_render_without_decimals() {
        let product = Product::new(2u64, "Lamp", "home", 10.0);
        assert_eq!(product.display_price(), "$10");
        assert_eq!(product.details_path(), "/products/2");
    }

    #[test]
    fn identity_is_the_product_id() {
        let product = Product::new("abc", "Lamp", "home", 10.0).with_description("warm light");
        assert_eq!(Entity::id(&product), &ProductId::from("abc"));
        assert_eq!(product.description, "warm light");
    }
}
