//! Read receipt entity <-> model mapper

use inbox_core::ReadReceipt;

use crate::models::ReadReceiptModel;

/// Convert ReadReceiptModel to ReadReceipt entity
impl From<ReadReceiptModel> for ReadReceipt {
    fn from(model: ReadReceiptModel) -> Self {
        ReadReceipt {
            message_id: model.message_id,
            user_id: model.user_id,
            read_at: Some(model.read_at),
        }
    }
}
