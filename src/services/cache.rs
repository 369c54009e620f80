use crate::models::Therapist;
use std::sync::Arc;
use std::time::Duration;

const ROSTER_KEY: &str = "roster:all";

/// In-memory roster cache
///
/// The roster is one small shared list refreshed on a TTL, so a single
/// in-process tier is enough. Entries are held behind `Arc` so handlers
/// share the cached roster without cloning it.
pub struct RosterCache {
    entries: moka::future::Cache<String, Arc<Vec<Therapist>>>,
}

impl RosterCache {
    pub fn new(max_capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    /// Get the cached roster, if present and fresh.
    pub async fn get(&self) -> Option<Arc<Vec<Therapist>>> {
        let roster = self.entries.get(ROSTER_KEY).await;
        if roster.is_some() {
            tracing::trace!("Roster cache hit");
        } else {
            tracing::trace!("Roster cache miss");
        }
        roster
    }

    /// Cache a freshly fetched roster, returning the shared handle.
    pub async fn set(&self, roster: Vec<Therapist>) -> Arc<Vec<Therapist>> {
        let roster = Arc::new(roster);
        self.entries
            .insert(ROSTER_KEY.to_string(), Arc::clone(&roster))
            .await;
        tracing::trace!("Roster cache set ({} therapists)", roster.len());
        roster
    }

    /// Drop the cached roster so the next request refetches.
    pub async fn invalidate(&self) {
        self.entries.invalidate(ROSTER_KEY).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_therapist(id: &str) -> Therapist {
        Therapist {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            gender: "Female".to_string(),
            specialty: "Counsellor".to_string(),
            bio: None,
            location: "Kampala".to_string(),
            image: None,
            price: "UGX 40,000".to_string(),
            price_unit: "per session".to_string(),
            languages: vec![],
            tags: vec![],
            available: true,
            rating: 4.0,
            reviews: 5,
            next_available: None,
        }
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = RosterCache::new(10, 60);

        assert!(cache.get().await.is_none());

        cache.set(vec![create_therapist("t1")]).await;

        let roster = cache.get().await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "t1");
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = RosterCache::new(10, 60);

        cache.set(vec![create_therapist("t1")]).await;
        cache.invalidate().await;

        assert!(cache.get().await.is_none());
    }
}
