//! Wire shapes exchanged with the quotation, catalog, and client endpoints.
//!
//! Field names follow the server API verbatim; conversions to and from the
//! domain models live next to each shape.

use crate::models::{CatalogEntry, Customer, LineItem, NewCatalogEntry, NumericInput};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Quotation submission body, shared by create and update.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuotationPayload {
    pub cliente_id: i64,
    pub items: Vec<ItemPayload>,
    pub fecha_validez: Option<NaiveDate>,
    pub notas: String,
    pub condiciones_comerciales: String,
}

/// One qualifying line item on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemPayload {
    pub producto_id: Option<i64>,
    pub concepto: String,
    pub descripcion: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
}

impl From<&LineItem> for ItemPayload {
    fn from(item: &LineItem) -> Self {
        Self {
            producto_id: item.catalog_ref,
            concepto: item.concept.clone(),
            descripcion: item.description.clone(),
            cantidad: item.quantity.amount(),
            precio_unitario: item.unit_price.amount(),
        }
    }
}

/// Envelope returned by create and update calls. Older deployments answer
/// with `id` instead of `cotizacion_id`.
#[derive(Debug, Default, Deserialize)]
pub struct SaveQuotationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "id")]
    pub cotizacion_id: Option<i64>,
    #[serde(default)]
    pub numero_cotizacion: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{success, message}` envelope (attachment upload and friends).
#[derive(Debug, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Full quotation record as returned by the fetch-for-edit endpoint.
/// Persisted totals are ignored; the ledger rederives them from the items.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotationRecord {
    pub cliente_id: i64,
    #[serde(default)]
    pub fecha_validez: Option<NaiveDate>,
    #[serde(default)]
    pub notas: String,
    #[serde(default)]
    pub condiciones_comerciales: String,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub adjuntos: Vec<AttachmentRecord>,
    #[serde(default)]
    pub numero_cotizacion: Option<String>,
}

/// One persisted line item within a fetched quotation.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub producto_id: Option<i64>,
    pub concepto: String,
    #[serde(default)]
    pub descripcion: String,
    pub cantidad: f64,
    pub precio_unitario: f64,
}

impl ItemRecord {
    /// Rebuild a ledger row under the given ordinal id.
    pub fn into_line_item(self, id: u64) -> LineItem {
        LineItem {
            id,
            catalog_ref: self.producto_id,
            concept: self.concepto,
            description: self.descripcion,
            quantity: NumericInput::from_raw(self.cantidad.to_string()),
            unit_price: NumericInput::from_value(self.precio_unitario),
        }
    }
}

/// Persisted attachment as listed on a fetched quotation.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentRecord {
    pub nombre_original: String,
}

/// Catalog row from `GET /api/productos`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    #[serde(default)]
    pub codigo: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
}

impl From<ProductRecord> for CatalogEntry {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            code: record.codigo,
            name: record.nombre,
            description: record.descripcion.unwrap_or_default(),
            unit_price: record.precio,
        }
    }
}

/// Body for creating a catalog entry from the drafting flow.
#[derive(Debug, Clone, Serialize)]
pub struct NewProductPayload {
    pub codigo: String,
    pub tipo: String,
    pub nombre: String,
    pub descripcion: String,
    pub precio: f64,
    pub unidad: String,
    pub categoria: String,
    pub activo: i64,
}

impl From<&NewCatalogEntry> for NewProductPayload {
    fn from(input: &NewCatalogEntry) -> Self {
        Self {
            codigo: input.code.clone(),
            tipo: input.kind.clone(),
            nombre: input.name.clone(),
            descripcion: input.description.clone(),
            precio: input.unit_price,
            unidad: input.unit.clone(),
            categoria: input.category.clone(),
            activo: 1,
        }
    }
}

/// Envelope returned when a catalog entry is created.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProductResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "id")]
    pub producto_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client row from `GET /api/clientes`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientRecord {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<ClientRecord> for Customer {
    fn from(record: ClientRecord) -> Self {
        Self {
            id: record.id,
            name: record.nombre,
            email: record.email,
        }
    }
}
