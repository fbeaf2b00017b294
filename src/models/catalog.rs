//! Catalog models: the read-only product/service projection.

/// Immutable snapshot entry of the product/service catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: String,
    pub unit_price: f64,
}

/// Input for creating a catalog entry from the drafting flow.
#[derive(Debug, Clone)]
pub struct NewCatalogEntry {
    pub code: String,
    /// "producto" or "servicio".
    pub kind: String,
    pub name: String,
    pub description: String,
    pub unit_price: f64,
    pub unit: String,
    pub category: String,
}

impl NewCatalogEntry {
    /// Entry with the defaults the quick-create form applies.
    pub fn new(code: impl Into<String>, name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            code: code.into(),
            kind: "producto".to_string(),
            name: name.into(),
            description: String::new(),
            unit_price,
            unit: "pza".to_string(),
            category: String::new(),
        }
    }
}
