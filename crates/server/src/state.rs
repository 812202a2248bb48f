use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::lms::repo::SeaOrmLmsStore;
use service::LmsServices;

/// Shared handler state: the three services over one SeaORM store.
#[derive(Clone)]
pub struct ServerState {
    pub lms: LmsServices<SeaOrmLmsStore>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { lms: LmsServices::new(Arc::new(SeaOrmLmsStore::new(db))) }
    }
}
