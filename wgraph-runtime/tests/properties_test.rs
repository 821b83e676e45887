use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wgraph_runtime::{
    bellman_ford, dijkstra, maximum_spanning_tree, minimum_spanning_tree_kruskal,
    minimum_spanning_tree_prim, stable_set, Graph,
};

const CASES: u64 = 64;

/// Connected graph: a shuffled spanning path plus random extra edges,
/// including self-loops and parallel edges. Weights are small integers so
/// path sums are exact.
fn random_connected_graph(rng: &mut StdRng) -> Graph<u32> {
    let n: u32 = rng.gen_range(1..30);
    let mut order: Vec<u32> = (0..n).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut g = Graph::new();
    g.add_vertex(order[0]);
    for pair in order.windows(2) {
        g.add_edge(pair[0], pair[1], rng.gen_range(0..=20) as f64);
    }
    let extra = rng.gen_range(0..(2 * n as usize + 1));
    for _ in 0..extra {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        g.add_edge(u, v, rng.gen_range(0..=20) as f64);
    }
    g
}

#[test]
fn test_dijkstra_distances_non_negative() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let g = random_connected_graph(&mut rng);
        let source = *g.vertices().next().unwrap();
        let paths = dijkstra(&g, &source).unwrap();
        assert_eq!(paths.distances[&source], 0.0);
        assert!(paths.distances.values().all(|d| *d >= 0.0 && d.is_finite()));
    }
}

#[test]
fn test_bellman_ford_agrees_with_dijkstra() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let g = random_connected_graph(&mut rng);
        for source in g.vertices() {
            let bf = bellman_ford(&g, source).unwrap();
            let dj = dijkstra(&g, source).unwrap();
            assert_eq!(bf, dj.distances, "source {source} in {g:?}");
        }
    }
}

#[test]
fn test_recorded_paths_add_up() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..CASES {
        let g = random_connected_graph(&mut rng);
        let source = *g.vertices().last().unwrap();
        let paths = dijkstra(&g, &source).unwrap();
        for target in g.vertices() {
            let path = paths.path_to(target).unwrap();
            assert_eq!(path.first(), Some(&source));
            assert_eq!(path.last(), Some(target));
            let mut total = 0.0;
            for hop in path.windows(2) {
                total += g
                    .neighbors(&hop[0])
                    .iter()
                    .filter(|(n, _)| *n == hop[1])
                    .map(|(_, w)| *w)
                    .fold(f64::INFINITY, f64::min);
            }
            assert_eq!(total, paths.distances[target]);
        }
    }
}

#[test]
fn test_kruskal_and_prim_agree_on_connected_graphs() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..CASES {
        let g = random_connected_graph(&mut rng);
        let kruskal = minimum_spanning_tree_kruskal(&g).unwrap();
        let prim = minimum_spanning_tree_prim(&g).unwrap();
        assert_eq!(kruskal.len(), g.vertex_count() - 1);
        assert_eq!(prim.len(), g.vertex_count() - 1);
        assert_eq!(kruskal.total_weight(), prim.total_weight());

        let max = maximum_spanning_tree(&g).unwrap();
        assert_eq!(max.len(), g.vertex_count() - 1);
        assert!(max.total_weight() >= kruskal.total_weight());
    }
}

#[test]
fn test_stable_set_independent() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..CASES {
        let g = random_connected_graph(&mut rng);
        let set = stable_set(&g);
        assert!(!set.is_empty());
        for e in g.edges().iter().filter(|e| !e.is_self_loop()) {
            assert!(!(set.contains(&e.u) && set.contains(&e.v)));
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..CASES {
        let g = random_connected_graph(&mut rng);
        let source = *g.vertices().next().unwrap();
        assert_eq!(
            bellman_ford(&g, &source).unwrap(),
            bellman_ford(&g, &source).unwrap()
        );
        assert_eq!(dijkstra(&g, &source).unwrap(), dijkstra(&g, &source).unwrap());
        assert_eq!(
            minimum_spanning_tree_kruskal(&g).unwrap(),
            minimum_spanning_tree_kruskal(&g).unwrap()
        );
        assert_eq!(
            minimum_spanning_tree_prim(&g).unwrap(),
            minimum_spanning_tree_prim(&g).unwrap()
        );
        assert_eq!(
            maximum_spanning_tree(&g).unwrap(),
            maximum_spanning_tree(&g).unwrap()
        );
        assert_eq!(stable_set(&g), stable_set(&g));
    }
}
