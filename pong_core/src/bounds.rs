use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box whose top-left corner sits at `pos`
    pub fn from_pos_size(pos: Vec2, width: u32, height: u32) -> Self {
        Self {
            min: pos,
            max: pos + Vec2::new(width as f32, height as f32),
        }
    }

    /// Check if two boxes share a region of positive area.
    /// Boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Collision predicate between two boxes
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: u32, h: u32) -> Aabb {
        Aabb::from_pos_size(Vec2::new(x, y), w, h)
    }

    #[test]
    fn test_from_pos_size() {
        let b = rect(10.0, 20.0, 16, 64);
        assert_eq!(b.min, Vec2::new(10.0, 20.0));
        assert_eq!(b.max, Vec2::new(26.0, 84.0));
    }

    #[test]
    fn test_overlapping_boxes() {
        let paddle = rect(0.0, 100.0, 16, 64);
        let ball = rect(10.0, 120.0, 16, 16);
        assert!(overlaps(&paddle, &ball));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = rect(0.0, 0.0, 100, 100);
        let inner = rect(40.0, 40.0, 10, 10);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 16, 64);
        // a.x + a.width == b.x
        let right = rect(16.0, 10.0, 16, 16);
        assert!(!overlaps(&a, &right));
        // a.y + a.height == b.y
        let below = rect(4.0, 64.0, 16, 16);
        assert!(!overlaps(&a, &below));
        // Corner contact only
        let corner = rect(16.0, 64.0, 16, 16);
        assert!(!overlaps(&a, &corner));
    }

    #[test]
    fn test_separated_boxes() {
        let a = rect(0.0, 0.0, 16, 64);
        let b = rect(300.0, 200.0, 16, 16);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let boxes = [
            rect(0.0, 0.0, 16, 64),
            rect(15.5, 63.5, 16, 16),
            rect(16.0, 0.0, 16, 16),
            rect(-8.0, -8.0, 16, 16),
            rect(304.0, 224.0, 16, 16),
            rect(0.0, 70.0, 16, 16),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
            }
        }
    }
}
