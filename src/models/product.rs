//! Product data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product sold by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Product {
    /// Identifier.
    #[schema(example = "prd_XXXXXX")]
    pub id: String,
    /// The product's name.
    #[schema(example = "Product X")]
    pub name: String,
}

/// Response envelope for the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductList {
    /// A list of products.
    pub data: Vec<Product>,
}
