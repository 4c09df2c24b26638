use crate::{
    db::{DbPool, OrmConn},
    tracker::CategoryTracker,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub categories: CategoryTracker,
}

impl AppState {
    pub fn new(pool: DbPool, orm: OrmConn) -> Self {
        Self {
            pool,
            orm,
            categories: CategoryTracker::new(),
        }
    }
}
