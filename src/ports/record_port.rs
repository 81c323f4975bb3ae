//! Record acquisition port trait.

use crate::domain::error::TxlensError;
use crate::domain::record::TransactionRecord;

/// Port for obtaining the transaction records the engine is built over. The
/// engine itself never reads files; callers fetch through this port and hand
/// the records across.
pub trait RecordPort {
    fn fetch_records(&self) -> Result<Vec<TransactionRecord>, TxlensError>;
}
