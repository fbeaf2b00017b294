//! Line item model for the quotation ledger.

use super::catalog::CatalogEntry;

/// Numeric form input kept in both raw and parsed form.
///
/// Mirrors the tolerant coercion of the quotation form: input that does not
/// parse as a number counts as 0 toward totals while the raw text stays
/// available for redisplay.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput {
    raw: String,
    value: f64,
}

impl NumericInput {
    /// Build from raw user input.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = raw.trim().parse::<f64>().unwrap_or(0.0);
        Self { raw, value }
    }

    /// Build from a known numeric value. The display form is rounded to two
    /// decimals; the full-precision value drives computation.
    pub fn from_value(value: f64) -> Self {
        Self {
            raw: format!("{value:.2}"),
            value,
        }
    }

    pub fn amount(&self) -> f64 {
        self.value
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// A single editable row of the quotation ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Ordinal id handed out by the ledger, never reused within a draft.
    pub id: u64,
    pub catalog_ref: Option<i64>,
    pub concept: String,
    pub description: String,
    pub quantity: NumericInput,
    pub unit_price: NumericInput,
}

impl LineItem {
    /// Fresh empty row; quantity starts at 1 the way the form does.
    pub(crate) fn empty(id: u64) -> Self {
        Self {
            id,
            catalog_ref: None,
            concept: String::new(),
            description: String::new(),
            quantity: NumericInput::from_raw("1"),
            unit_price: NumericInput::from_raw(""),
        }
    }

    pub fn line_subtotal(&self) -> f64 {
        self.quantity.amount() * self.unit_price.amount()
    }

    /// Whether the row meets the bar to be sent to the server: a concept,
    /// a positive quantity, and a non-negative unit price.
    pub fn qualifies(&self) -> bool {
        !self.concept.trim().is_empty()
            && self.quantity.amount() > 0.0
            && self.unit_price.amount() >= 0.0
    }
}

/// Partial field update for a ledger row. Numeric fields carry the raw form
/// input. `catalog_ref: Some(None)` clears the catalog reference.
#[derive(Debug, Clone, Default)]
pub struct LineItemPatch {
    pub catalog_ref: Option<Option<i64>>,
    pub concept: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
}

/// Seed values for a freshly added row.
#[derive(Debug, Clone, Default)]
pub struct ItemPrefill {
    pub catalog_ref: Option<i64>,
    pub concept: String,
    pub description: String,
    pub unit_price: Option<f64>,
}

impl From<&CatalogEntry> for ItemPrefill {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            catalog_ref: Some(entry.id),
            concept: format!("{} - {}", entry.code, entry.name),
            description: entry.description.clone(),
            unit_price: Some(entry.unit_price),
        }
    }
}
