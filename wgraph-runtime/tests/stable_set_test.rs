use wgraph_api::sketch::Sketch;
use wgraph_runtime::{stable_set, Graph};

#[test]
fn test_stable_set_is_independent() {
    let g: Graph<u32> = Graph::from_edges(vec![
        (1, 2, 1.0),
        (1, 3, 1.0),
        (2, 3, 1.0),
        (3, 4, 1.0),
        (4, 5, 1.0),
        (5, 6, 1.0),
        (6, 1, 1.0),
    ]);
    let set = stable_set(&g);
    assert!(!set.is_empty());
    for e in g.edges() {
        assert!(
            !(set.contains(&e.u) && set.contains(&e.v)),
            "edge {:?}-{:?} has both ends in {set:?}",
            e.u,
            e.v
        );
    }
}

#[test]
fn test_stable_set_is_maximal() {
    let g: Graph<u32> =
        Graph::from_edges(vec![(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 1, 1.0)]);
    let set = stable_set(&g);
    // every vertex left out has a neighbor inside
    for v in g.vertices().filter(|v| !set.contains(*v)) {
        assert!(g.neighbors(v).iter().any(|(n, _)| set.contains(n)));
    }
    assert_eq!(set.len(), 2);
}

#[test]
fn test_stable_set_on_sketch_snapshot() {
    let mut sketch = Sketch::new();
    let a = sketch.add_node(0.0, 0.0);
    let b = sketch.add_node(10.0, 0.0);
    let c = sketch.add_node(20.0, 0.0);
    let lone = sketch.add_node(50.0, 50.0);
    sketch.connect(a, b).unwrap();
    sketch.connect(b, c).unwrap();

    let set = stable_set(&sketch.snapshot());
    assert!(set.contains(&b));
    assert!(set.contains(&lone));
    assert!(!set.contains(&a));
    assert!(!set.contains(&c));
}
