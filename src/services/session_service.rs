use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::session::PlannerSession;

/// In-memory home of active planning sessions. One itinerary belongs to
/// exactly one session; nothing is shared across sessions.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, PlannerSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn create(&self, start_date: NaiveDate) -> PlannerSession {
        let session = PlannerSession::new(start_date);

        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(session.id, session.clone());

        session
    }

    pub fn get(&self, id: Uuid) -> Option<PlannerSession> {
        self.sessions
            .read()
            .expect("session store lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Run a closure against one session. The closure's result decides
    /// whether the mutation sticks: on `Err` the stored session is left
    /// untouched, so a rejected operation never dents a session.
    pub fn with_session<T, E>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut PlannerSession) -> Result<T, E>,
    ) -> Option<Result<T, E>> {
        let mut sessions = self.sessions.write().expect("session store lock poisoned");
        let stored = sessions.get_mut(&id)?;

        let mut working = stored.clone();
        match f(&mut working) {
            Ok(value) => {
                working.updated_at = Utc::now();
                *stored = working;
                Some(Ok(value))
            }
            Err(err) => Some(Err(err)),
        }
    }

    pub fn remove(&self, id: Uuid) -> Option<PlannerSession> {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(&id)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
