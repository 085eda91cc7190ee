use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rand::RngCore;

use rr_common::types::ReportResponse;

/// One-shot transition store: a finished report is put under a random
/// token at submit time and taken exactly once when `/report` loads.
/// A second take (reload, direct navigation) yields `None`, which the
/// report page turns into a redirect to the form.
pub struct ReportStore {
    entries: Mutex<HashMap<String, StoredReport>>,
    ttl: Duration,
}

struct StoredReport {
    response: ReportResponse,
    created_at: Instant,
}

impl ReportStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Store a response and return its claim token.
    pub fn put(&self, response: ReportResponse) -> String {
        let mut bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        let token = hex::encode(bytes);

        let mut entries = self.entries.lock().expect("report store poisoned");
        Self::purge_expired(&mut entries, self.ttl);
        entries.insert(
            token.clone(),
            StoredReport {
                response,
                created_at: Instant::now(),
            },
        );
        token
    }

    /// Claim a response, removing it from the store.
    pub fn take(&self, token: &str) -> Option<ReportResponse> {
        let mut entries = self.entries.lock().expect("report store poisoned");
        Self::purge_expired(&mut entries, self.ttl);
        entries.remove(token).map(|stored| stored.response)
    }

    fn purge_expired(entries: &mut HashMap<String, StoredReport>, ttl: Duration) {
        entries.retain(|_, stored| stored.created_at.elapsed() < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rr_common::types::{ReportPayload, ReportResponse};

    fn sample() -> ReportResponse {
        ReportResponse::Success(ReportPayload::default())
    }

    #[test]
    fn test_put_take_roundtrip() {
        let store = ReportStore::new(Duration::from_secs(60));
        let token = store.put(sample());
        assert_eq!(store.take(&token), Some(sample()));
    }

    #[test]
    fn test_take_is_one_shot() {
        let store = ReportStore::new(Duration::from_secs(60));
        let token = store.put(sample());
        assert!(store.take(&token).is_some());
        assert!(store.take(&token).is_none());
    }

    #[test]
    fn test_unknown_token() {
        let store = ReportStore::new(Duration::from_secs(60));
        assert!(store.take("deadbeef").is_none());
    }

    #[test]
    fn test_tokens_are_unique() {
        let store = ReportStore::new(Duration::from_secs(60));
        let a = store.put(sample());
        let b = store.put(sample());
        assert_ne!(a, b);
    }

    #[test]
    fn test_expired_entry_is_gone() {
        let store = ReportStore::new(Duration::ZERO);
        let token = store.put(sample());
        assert!(store.take(&token).is_none());
    }
}
