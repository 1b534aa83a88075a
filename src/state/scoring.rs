use crate::model::{Bag, BagId};

impl Bag {
    /// Half-open box test: the left/top edges are inside, the right/bottom are not.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// First bag under the pointer, in pool order.
pub fn first_hit<'a>(bags: impl IntoIterator<Item = &'a Bag>, px: f64, py: f64) -> Option<BagId> {
    bags.into_iter().find(|b| b.contains(px, py)).map(|b| b.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpriteId;

    fn bag(id: u64, x: f64, y: f64) -> Bag {
        Bag {
            id: BagId(id),
            x,
            y,
            width: 50.0,
            height: 50.0,
            sprite: SpriteId(0),
        }
    }

    #[test]
    fn edges_are_half_open() {
        let b = bag(1, 100.0, 200.0);
        assert!(b.contains(100.0, 200.0));
        assert!(b.contains(149.9, 249.9));
        assert!(!b.contains(150.0, 220.0));
        assert!(!b.contains(120.0, 250.0));
        assert!(!b.contains(99.9, 220.0));
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let bags = vec![bag(1, 0.0, 0.0), bag(2, 25.0, 25.0)];
        assert_eq!(first_hit(&bags, 30.0, 30.0), Some(BagId(1)));
        assert_eq!(first_hit(&bags, 60.0, 60.0), Some(BagId(2)));
        assert_eq!(first_hit(&bags, 90.0, 90.0), None);
    }

    #[test]
    fn empty_pool_never_hits() {
        assert_eq!(first_hit(&Vec::<Bag>::new(), 0.0, 0.0), None);
    }
}
