//! Services: the ledger, the draft controller, and the HTTP adapters.

pub mod catalog;
pub mod directory;
pub mod draft;
pub mod inactivity;
pub mod ledger;
pub mod notifier;
pub mod quotations;
pub mod session;

pub use catalog::CatalogAdapter;
pub use directory::ClientDirectory;
pub use draft::{DraftController, SubmitReceipt};
pub use inactivity::InactivityTimer;
pub use ledger::{LineItemLedger, Totals, TAX_RATE};
pub use notifier::{LogNotifier, NoopNotifier, Notifier, Severity};
pub use quotations::{QuotationsClient, SavedQuotation};
pub use session::QuotationDraftSession;
