//! The line-item ledger: ordered editable rows plus derived totals.

use crate::models::{CatalogEntry, ItemPrefill, LineItem, LineItemPatch, NumericInput};

/// Fixed tax rate applied to every quotation. It is never transmitted; the
/// server applies the same constant independently.
pub const TAX_RATE: f64 = 0.16;

/// Derived monetary totals over the current item sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Ordered, mutable collection of quotation line items.
///
/// Ids are ordinal and monotonically increasing for the lifetime of a
/// draft; removing a row never frees its id. Totals are derived on demand
/// from the row sequence, so they cannot go stale.
#[derive(Debug, Clone, Default)]
pub struct LineItemLedger {
    items: Vec<LineItem>,
    next_id: u64,
}

impl LineItemLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh row (quantity 1) and return its id. `prefill` seeds
    /// concept, description, price, and catalog reference when the row
    /// originates from a catalog selection.
    pub fn add_item(&mut self, prefill: Option<ItemPrefill>) -> u64 {
        self.next_id += 1;
        let mut item = LineItem::empty(self.next_id);
        if let Some(prefill) = prefill {
            item.catalog_ref = prefill.catalog_ref;
            item.concept = prefill.concept;
            item.description = prefill.description;
            if let Some(price) = prefill.unit_price {
                item.unit_price = NumericInput::from_value(price);
            }
        }
        self.items.push(item);
        self.next_id
    }

    /// Remove the row with the given id. Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Apply a partial update to the row with the given id. Returns false
    /// when no such row exists.
    pub fn update_item(&mut self, id: u64, patch: LineItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if let Some(catalog_ref) = patch.catalog_ref {
            item.catalog_ref = catalog_ref;
        }
        if let Some(concept) = patch.concept {
            item.concept = concept;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(quantity) = patch.quantity {
            item.quantity = NumericInput::from_raw(quantity);
        }
        if let Some(unit_price) = patch.unit_price {
            item.unit_price = NumericInput::from_raw(unit_price);
        }
        true
    }

    /// Prefill a row from a catalog entry: the concept becomes
    /// `"{code} - {name}"`, description and unit price copy the entry.
    pub fn select_catalog_entry(&mut self, id: u64, entry: &CatalogEntry) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.catalog_ref = Some(entry.id);
        item.concept = format!("{} - {}", entry.code, entry.name);
        item.description = entry.description.clone();
        item.unit_price = NumericInput::from_value(entry.unit_price);
        true
    }

    /// Replace the whole row sequence (entering edit mode). The id counter
    /// resumes past the highest loaded id so rows added later never collide
    /// with ids already handed out.
    pub fn load_items(&mut self, items: Vec<LineItem>) {
        self.next_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        self.items = items;
    }

    /// Derived totals over the current rows. Pure: two calls without an
    /// intervening mutation return identical values.
    pub fn totals(&self) -> Totals {
        let subtotal: f64 = self.items.iter().map(LineItem::line_subtotal).sum();
        let tax = round2(subtotal * TAX_RATE);
        Totals {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Rows meeting the submission bar: non-empty concept, quantity above
    /// zero, unit price at or above zero.
    pub fn qualifying_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|item| item.qualifies())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop every row and restart the id sequence (new draft).
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_id = 0;
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
