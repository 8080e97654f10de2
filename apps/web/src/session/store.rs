use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error};
use uuid::Uuid;

use crate::match_client::CandidateMatcher;
use crate::session::{Session, SubmitRejected};

pub type SharedSession = Arc<Mutex<Session>>;

/// Sessions idle longer than this are dropped.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);
/// Upper bound on live sessions; the least recently seen is evicted first.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct Entry {
    session: SharedSession,
    last_seen: Instant,
}

/// In-memory map of browser sessions. Nothing is persisted; a restart
/// discards every session.
///
/// Bounded two ways: idle sessions expire after `ttl`, and at most
/// `max_sessions` are kept.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Entry>>>,
    ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Returns the session for `id`, creating a fresh one when the id is
    /// missing, unknown or expired.
    pub async fn get_or_create(&self, id: Option<Uuid>) -> (Uuid, SharedSession) {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;

        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < self.ttl);
        if sessions.len() < before {
            debug!(expired = before - sessions.len(), "Dropped idle sessions");
        }

        if let Some(id) = id {
            if let Some(entry) = sessions.get_mut(&id) {
                entry.last_seen = now;
                return (id, entry.session.clone());
            }
        }

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(oldest) => {
                    sessions.remove(&oldest);
                    debug!(session_id = %oldest, "Evicted least recently seen session");
                }
                None => break,
            }
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(Session::new()));
        sessions.insert(
            id,
            Entry {
                session: session.clone(),
                last_seen: now,
            },
        );
        debug!(session_id = %id, "Created session");
        (id, session)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

/// Applies posted form fields and runs one submission for the session.
///
/// Field edits are ignored while a request is in flight. The network call
/// runs on its own task and its outcome is applied by a second task, so the
/// session leaves the loading state even if the caller is dropped or the
/// request panics.
pub async fn submit_form(
    session: SharedSession,
    fields: &[(String, String)],
    matcher: Arc<dyn CandidateMatcher>,
) -> Result<(), SubmitRejected> {
    let job = {
        let mut guard = session.lock().await;
        if guard.is_loading() {
            return Err(SubmitRejected::InFlight);
        }
        for (name, value) in fields {
            guard.form.set_field_by_name(name, value);
        }
        guard.begin_submit()?
    };

    let request = tokio::spawn(async move { matcher.match_candidates(&job).await });

    let task_session = session.clone();
    let task = tokio::spawn(async move {
        let outcome = request.await;
        let mut guard = task_session.lock().await;
        match outcome {
            Ok(result) => guard.complete(result),
            Err(e) => {
                error!(error = %e, "Match request did not complete");
                guard.abort_submit();
            }
        }
    });

    if let Err(e) = task.await {
        error!(error = %e, "Match completion task failed");
    }

    Ok(())
}
