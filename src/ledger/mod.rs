//! Entries, date windows, and the ledger that aggregates them.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod window;

pub use entry::{parse_entry_date, Entry, EntryDraft, ENTRY_DATE_FORMAT};
pub use ledger::{Ledger, LedgerSummary, RemainingToday, WEEK_DAYS};
pub use window::DateWindow;
