use crate::config::MAX_VERTEX_COUNT;
use crate::errors::GraphError;
use crate::geometry::{Point, Rect, euclidean, squared_euclidean};
use crate::graph::Vertex;

use kdtree::KdTree;
use rand::Rng;


/// Draws allowed per requested vertex before giving up
pub const ATTEMPTS_PER_VERTEX: usize = 3;


/// Place up to `count` vertices inside `bounds` by rejection sampling
///
/// Each draw is a uniform point in the full bounds. It is kept only when it lies
/// inside the margin-shrunk rectangle and is at least `min_separation` away from
/// every vertex kept so far. Sampling stops after `count` vertices or
/// `3 * count` draws, whichever comes first, so a crowded plane yields fewer
/// vertices than requested. That is logged, not an error.
///
/// An `anchor` is placed first without a draw. It counts toward `count` and
/// later draws keep their distance from it.
///
/// Vertex ids are assigned `0..n` in placement order.
pub fn generate_vertices<R>(
    rng: &mut R,
    bounds: &Rect,
    count: usize,
    min_separation: f64,
    margin: f64,
    anchor: Option<Point>,
) -> Result<Vec<Vertex>, GraphError>
where
    R: Rng + ?Sized,
{
    let interior = bounds.shrink(margin)?;
    let max_attempts = count.saturating_mul(ATTEMPTS_PER_VERTEX);

    let mut vertices: Vec<Vertex> = Vec::with_capacity(count.min(MAX_VERTEX_COUNT));
    // point -> index in vertices, used to find the closest placed vertex
    let mut tree: KdTree<f64, usize, [f64; 2]> = KdTree::new(2);
    let mut attempts = 0;

    if let Some(anchor) = anchor.filter(|_| count > 0) {
        tree.add([anchor.x, anchor.y], 0)?;
        vertices.push(Vertex::new(0, anchor.x, anchor.y));
    }

    while vertices.len() < count && attempts < max_attempts {
        attempts += 1;

        let candidate = bounds.random_point(rng);
        if !interior.contains(&candidate) {
            continue;
        }

        if !vertices.is_empty() {
            let closest = tree.nearest(&[candidate.x, candidate.y], 1, &|a: &[f64], b: &[f64]| {
                squared_euclidean(a[0], a[1], b[0], b[1])
            })?;
            // the index only nominates the neighbor, the check uses the exact distance
            let too_close = closest.iter().any(|&(_, &idx)| {
                let placed = &vertices[idx];
                euclidean(candidate.x, candidate.y, placed.x(), placed.y()) < min_separation
            });
            if too_close {
                continue;
            }
        }

        let idx = vertices.len();
        tree.add([candidate.x, candidate.y], idx)?;
        vertices.push(Vertex::new(idx, candidate.x, candidate.y));
    }

    if vertices.len() < count {
        log::warn!(
            "only able to place {} out of {} vertices due to spacing constraints",
            vertices.len(), count
        );
    }

    Ok(vertices)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GeometryError;
    use rand::{rngs::StdRng, RngCore, SeedableRng};
    use std::sync::Mutex;

    /// Seeded rng that counts how many words were pulled from it
    struct CountingRng {
        inner: StdRng,
        calls: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self { inner: StdRng::seed_from_u64(seed), calls: 0 }
        }

        // each draw samples two f64, one u64 apiece
        fn draws(&self) -> usize {
            self.calls / 2
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.calls += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.calls += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.calls += 1;
            self.inner.fill_bytes(dst)
        }
    }

    /// Collects warnings emitted while the tests run
    struct WarnCapture {
        messages: Mutex<Vec<String>>,
    }

    impl log::Log for WarnCapture {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                self.messages.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static WARNINGS: WarnCapture = WarnCapture { messages: Mutex::new(Vec::new()) };

    #[test]
    fn test_vertices_respect_min_separation() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = Rect::new(1280.0, 720.0).unwrap();

        let vertices = generate_vertices(&mut rng, &bounds, 60, 50.0, 0.0, None).unwrap();
        assert!(!vertices.is_empty());
        assert!(vertices.len() <= 60);

        for (i, a) in vertices.iter().enumerate() {
            assert_eq!(a.id.0, i, "ids follow placement order");
            assert!(bounds.contains(&a.point));
            for b in &vertices[i + 1..] {
                assert!(a.distance(b) >= 50.0, "{a:?} and {b:?} are too close");
            }
        }
    }

    #[test]
    fn test_margin_keeps_vertices_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Rect::new(400.0, 300.0).unwrap();
        let interior = bounds.shrink(40.0).unwrap();

        let vertices = generate_vertices(&mut rng, &bounds, 30, 20.0, 40.0, None).unwrap();
        assert!(!vertices.is_empty());
        for vertex in &vertices {
            assert!(interior.contains(&vertex.point), "{vertex:?} is inside the margin");
        }
    }

    #[test]
    fn test_crowded_plane_places_fewer() {
        // a 100x100 plane cannot hold 50 vertices 60 apart
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Rect::new(100.0, 100.0).unwrap();

        let vertices = generate_vertices(&mut rng, &bounds, 50, 60.0, 0.0, None).unwrap();
        assert!(!vertices.is_empty());
        assert!(vertices.len() < 50);
        assert!(vertices.len() <= 6);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let bounds = Rect::new(100.0, 100.0).unwrap();

        let vertices = generate_vertices(&mut rng, &bounds, 0, 10.0, 0.0, None).unwrap();
        assert!(vertices.is_empty());
    }

    #[test]
    fn test_same_seed_same_vertices() {
        let bounds = Rect::new(800.0, 450.0).unwrap();
        let first = generate_vertices(&mut StdRng::seed_from_u64(99), &bounds, 25, 40.0, 0.0, None).unwrap();
        let second = generate_vertices(&mut StdRng::seed_from_u64(99), &bounds, 25, 40.0, 0.0, None).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_margin_too_large() {
        let mut rng = StdRng::seed_from_u64(0);
        let bounds = Rect::new(100.0, 100.0).unwrap();

        let result = generate_vertices(&mut rng, &bounds, 5, 10.0, 60.0, None);
        assert_eq!(result, Err(GraphError::Geometry(GeometryError::MarginTooLarge)));
    }

    #[test]
    fn test_draw_budget_is_three_per_vertex() {
        // nothing fits next to the first vertex, so every draw is spent
        let mut rng = CountingRng::new(4);
        let bounds = Rect::new(100.0, 100.0).unwrap();

        let vertices = generate_vertices(&mut rng, &bounds, 10, 500.0, 0.0, None).unwrap();

        assert_eq!(vertices.len(), 1);
        assert_eq!(rng.draws(), 30);
    }

    #[test]
    fn test_sampling_stops_once_count_is_reached() {
        let mut rng = CountingRng::new(4);
        let bounds = Rect::new(1000.0, 1000.0).unwrap();

        let vertices = generate_vertices(&mut rng, &bounds, 3, 1.0, 0.0, None).unwrap();

        assert_eq!(vertices.len(), 3);
        assert!(rng.draws() < 9);
    }

    #[test]
    fn test_under_placement_is_logged() {
        let _ = log::set_logger(&WARNINGS);
        log::set_max_level(log::LevelFilter::Warn);

        let mut rng = StdRng::seed_from_u64(8);
        let bounds = Rect::new(100.0, 100.0).unwrap();
        let vertices = generate_vertices(&mut rng, &bounds, 12, 500.0, 0.0, None).unwrap();
        assert_eq!(vertices.len(), 1);

        let messages = WARNINGS.messages.lock().unwrap();
        assert!(
            messages.iter().any(|m| m == "only able to place 1 out of 12 vertices due to spacing constraints"),
            "missing warning in {messages:?}"
        );
    }

    #[test]
    fn test_anchor_is_first_and_counted() {
        let mut rng = StdRng::seed_from_u64(21);
        let bounds = Rect::new(960.0, 540.0).unwrap();
        let center = bounds.center();

        let vertices = generate_vertices(&mut rng, &bounds, 20, 50.0, 0.0, Some(center)).unwrap();

        assert!(vertices.len() <= 20);
        assert_eq!(vertices[0], Vertex::new(0, 480.0, 270.0));
        for vertex in &vertices[1..] {
            assert!(vertex.point.distance(&center) >= 50.0, "{vertex:?} crowds the anchor");
        }
    }

    #[test]
    fn test_anchor_alone_fills_count_of_one() {
        let mut rng = CountingRng::new(0);
        let bounds = Rect::new(100.0, 100.0).unwrap();

        let vertices = generate_vertices(&mut rng, &bounds, 1, 10.0, 0.0, Some(bounds.center())).unwrap();
        assert_eq!(vertices, vec![Vertex::new(0, 50.0, 50.0)]);
        assert_eq!(rng.draws(), 0);

        let none = generate_vertices(&mut rng, &bounds, 0, 10.0, 0.0, Some(bounds.center())).unwrap();
        assert!(none.is_empty());
    }
}
