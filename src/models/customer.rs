//! Client directory projection.

/// A client as listed by the directory endpoint. Quotations reference
/// clients by id only; the rest is display data for the selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}
