//! Pet catalog metrics.

use metrics::{counter, gauge};

/// Pet catalog metrics recorder
pub struct PetMetrics;

impl PetMetrics {
    pub fn record_created() {
        counter!("pets_created_total").increment(1);
    }

    pub fn record_updated() {
        counter!("pets_updated_total").increment(1);
    }

    pub fn record_deleted() {
        counter!("pets_deleted_total").increment(1);
    }

    /// Record a delete-all that removed `count` pets
    pub fn record_bulk_deleted(count: u64) {
        counter!("pets_bulk_deleted_total").increment(count);
        tracing::debug!(count, "Recorded bulk delete");
    }

    pub fn record_listed(count: usize) {
        gauge!("pets_listed").set(count as f64);
    }
}
