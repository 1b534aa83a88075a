use crate::model::ImpactSummary;

impl ImpactSummary {
    /// Derived metrics for a final score. Recomputed on demand, never stored.
    pub fn from_score(score: u32, weight_per_bag_kg: f64) -> Self {
        let kg = score as f64 * weight_per_bag_kg;
        Self {
            plastic_weight_kg: kg,
            saved_fish: (kg * 2.0).floor() as u64,
            saved_whales: (kg / 100.0).floor() as u64,
        }
    }
}
