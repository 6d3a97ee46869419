//! Inquiry message sent by a buyer about a home listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A buyer-to-realtor inquiry about a home.
/// Messages are immutable and never deleted by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for the message
    pub id: Uuid,

    /// Free-text body
    pub message: String,

    /// Buyer who sent the inquiry
    pub buyer_id: Uuid,

    /// Realtor owning the home at the time of the inquiry
    pub realtor_id: Uuid,

    /// Home the inquiry is about
    pub home_id: Uuid,

    /// Timestamp when the message was created
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a new Message linking buyer, realtor, and home
    pub fn new(message: String, buyer_id: Uuid, realtor_id: Uuid, home_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            buyer_id,
            realtor_id,
            home_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_links_all_parties() {
        let buyer_id = Uuid::new_v4();
        let realtor_id = Uuid::new_v4();
        let home_id = Uuid::new_v4();

        let message = Message::new(
            "Is the property still available?".to_string(),
            buyer_id,
            realtor_id,
            home_id,
        );

        assert_eq!(message.buyer_id, buyer_id);
        assert_eq!(message.realtor_id, realtor_id);
        assert_eq!(message.home_id, home_id);
        assert_eq!(message.message, "Is the property still available?");
    }
}
