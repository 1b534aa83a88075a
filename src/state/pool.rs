// Live bags on the beach. At most one exists at a time: a new one is only
// spawned once the pool has drained.

use rand::Rng;

use crate::config::GameConfig;
use crate::model::{Bag, BagId, Phase, Playfield, SpriteId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRules {
    pub bag_width: f64,
    pub bag_height: f64,
    pub margin_bottom: f64,
    pub palette_len: usize,
}

impl SpawnRules {
    pub fn from_config(cfg: &GameConfig, palette_len: usize) -> Self {
        Self {
            bag_width: cfg.bag_width,
            bag_height: cfg.bag_height,
            margin_bottom: cfg.spawn_margin_bottom,
            palette_len,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BagPool {
    rules: SpawnRules,
    bags: Vec<Bag>,
    next_id: u64,
}

impl BagPool {
    pub fn new(rules: SpawnRules) -> Self {
        Self {
            rules,
            bags: Vec::new(),
            next_id: 1,
        }
    }

    /// Spawn one bag in the lower half of the playfield when the pool is empty
    /// and the game is running.
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        phase: Phase,
        field: Playfield,
        rng: &mut R,
    ) -> Option<BagId> {
        if phase != Phase::Running || !self.is_empty() {
            return None;
        }
        let r = self.rules;
        let x_span = (field.width - r.bag_width).max(0.0);
        let min_y = field.height * 0.5;
        let y_span = (field.height - r.margin_bottom - min_y).max(0.0);
        let sprite = if r.palette_len > 0 {
            rng.gen_range(0..r.palette_len)
        } else {
            0
        };
        let id = BagId(self.next_id);
        self.next_id += 1;
        self.bags.push(Bag {
            id,
            x: rng.r#gen::<f64>() * x_span,
            y: min_y + rng.r#gen::<f64>() * y_span,
            width: r.bag_width,
            height: r.bag_height,
            sprite: SpriteId(sprite),
        });
        Some(id)
    }

    /// Returns whether a bag was removed; unknown ids are ignored.
    pub fn remove(&mut self, id: BagId) -> bool {
        let before = self.bags.len();
        self.bags.retain(|b| b.id != id);
        self.bags.len() != before
    }

    pub fn clear(&mut self) {
        self.bags.clear();
    }

    /// Read-only view of the live bags; clone the iterator to walk it again.
    pub fn snapshot(&self) -> std::slice::Iter<'_, Bag> {
        self.bags.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.bags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> BagPool {
        BagPool::new(SpawnRules::from_config(&GameConfig::default(), 3))
    }

    const FIELD: Playfield = Playfield {
        width: 800.0,
        height: 400.0,
    };

    #[test]
    fn spawns_only_when_running_and_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut p = pool();
        assert_eq!(p.try_spawn(Phase::Idle, FIELD, &mut rng), None);
        assert_eq!(p.try_spawn(Phase::Over, FIELD, &mut rng), None);
        assert!(p.try_spawn(Phase::Running, FIELD, &mut rng).is_some());
        assert_eq!(p.try_spawn(Phase::Running, FIELD, &mut rng), None);
        assert_eq!(p.snapshot().count(), 1);
    }

    #[test]
    fn spawn_stays_inside_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut p = pool();
        for _ in 0..500 {
            let id = p.try_spawn(Phase::Running, FIELD, &mut rng).unwrap();
            let bag = p.snapshot().next().unwrap().clone();
            assert!(bag.x >= 0.0 && bag.x <= FIELD.width - 50.0, "x={}", bag.x);
            assert!(bag.y >= 200.0 && bag.y <= FIELD.height - 70.0, "y={}", bag.y);
            assert!(bag.sprite.0 < 3);
            assert_eq!((bag.width, bag.height), (50.0, 50.0));
            assert!(p.remove(id));
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = pool();
        let id = p.try_spawn(Phase::Running, FIELD, &mut rng).unwrap();
        assert!(p.remove(id));
        assert!(!p.remove(id));
        assert!(p.is_empty());
    }

    #[test]
    fn ids_are_unique_across_spawns() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = pool();
        let a = p.try_spawn(Phase::Running, FIELD, &mut rng).unwrap();
        p.clear();
        let b = p.try_spawn(Phase::Running, FIELD, &mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn narrow_playfield_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut p = pool();
        let tiny = Playfield {
            width: 10.0,
            height: 60.0,
        };
        p.try_spawn(Phase::Running, tiny, &mut rng).unwrap();
        let bag = p.snapshot().next().unwrap();
        assert_eq!(bag.x, 0.0);
        assert_eq!(bag.y, 30.0);
    }

    #[test]
    fn snapshot_is_restartable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = pool();
        p.try_spawn(Phase::Running, FIELD, &mut rng);
        let snap = p.snapshot();
        assert_eq!(snap.clone().count(), 1);
        assert_eq!(snap.count(), 1);
    }
}
