use std::sync::Arc;

use common::types::Contact;
use configs::ContactConfig;
use sea_orm::DatabaseConnection;

/// Everything a handler may touch: the pool handle and the read-only contact card.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub contact: Arc<Contact>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, contact: ContactConfig) -> Self {
        let contact = Contact { address: contact.address, phone: contact.phone, email: contact.email };
        Self { db, contact: Arc::new(contact) }
    }
}
