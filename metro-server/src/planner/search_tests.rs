//! Cross-checks between the searches, on the built-in network and on
//! randomly generated ones.

use super::*;
use crate::builder::{NetworkConfig, NetworkSpec, build_network, kyiv_metro};
use crate::network::{Network, StationId};

fn kyiv() -> Network {
    build_network(&kyiv_metro(), &NetworkConfig::default()).unwrap()
}

fn quickest(network: &Network, from: &str, to: &str) -> (Vec<String>, Distance) {
    let tree = dijkstra(network, from).unwrap();
    let target = network.id(to).unwrap();
    let names = tree
        .path_to(target)
        .map(|p| p.names(network).into_iter().map(String::from).collect())
        .unwrap_or_default();
    (names, tree.distance_to(target))
}

#[test]
fn along_a_single_line() {
    let network = kyiv();
    let (path, distance) = quickest(&network, "Академмістечко", "Лісова");

    assert_eq!(path.len(), 12);
    assert_eq!(distance, Distance::Finite(33));

    let bfs = bfs_path(&network, "Академмістечко", "Лісова").unwrap().unwrap();
    assert_eq!(bfs.hops(), 11);
    assert_eq!(bfs.line_changes(&network), 0);
}

#[test]
fn one_interchange_is_quickest() {
    let network = kyiv();
    let (path, distance) = quickest(&network, "Героїв Дніпра", "Червоний хутір");

    assert_eq!(distance, Distance::Finite(37));
    assert!(path.iter().any(|s| s == "Площа Українських Героїв"));
    assert!(path.iter().any(|s| s == "Палац спорту"));
    assert!(!path.iter().any(|s| s == "Хрещатик"));
}

#[test]
fn syrets_to_teremky() {
    let network = kyiv();
    let tree = dijkstra(&network, "Сирець").unwrap();
    let teremky = network.id("Теремки").unwrap();
    let path = tree.path_to(teremky).unwrap();

    assert_eq!(tree.distance_to(teremky), Distance::Finite(28));
    assert_eq!(path.total_time(&network), Ok(28));
    assert_eq!(path.line_changes(&network), 1);
}

#[test]
fn searches_agree_on_reachability() {
    let network = kyiv();
    for (from, to) in [
        ("Академмістечко", "Лісова"),
        ("Героїв Дніпра", "Червоний хутір"),
        ("Сирець", "Теремки"),
        ("Позняки", "Майдан Незалежності"),
    ] {
        let bfs = bfs_path(&network, from, to).unwrap().unwrap();
        let dfs = dfs_path(&network, from, to).unwrap().unwrap();

        assert!(bfs.is_valid(&network));
        assert!(dfs.is_valid(&network));
        assert!(bfs.hops() <= dfs.hops(), "{from} -> {to}");
    }
}

#[test]
fn disjoint_routes_have_no_cross_route_path() {
    let spec = NetworkSpec::default()
        .route("Red", ["A", "B", "C"])
        .route("Blue", ["X", "Y", "Z"]);
    let network = build_network(&spec, &NetworkConfig::default()).unwrap();

    for from in ["A", "B", "C"] {
        for to in ["X", "Y", "Z"] {
            assert_eq!(bfs_path(&network, from, to), Ok(None));
            assert_eq!(dfs_path(&network, from, to), Ok(None));
            let tree = dijkstra(&network, from).unwrap();
            let to = network.id(to).unwrap();
            assert_eq!(tree.distance_to(to), Distance::Infinite);
            assert_eq!(tree.path_to(to), None);
        }
    }
}

#[test]
fn rebuilding_gives_identical_all_pairs() {
    let a = all_pairs_shortest_paths(&kyiv()).unwrap();
    let b = all_pairs_shortest_paths(&kyiv()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_station_reaches_itself() {
    let network = kyiv();
    for id in network.station_ids() {
        let name = network.name(id);
        assert_eq!(
            bfs_path(&network, name, name).unwrap().unwrap().stations(),
            &[id]
        );
        assert_eq!(
            dijkstra(&network, name).unwrap().distance_to(id),
            Distance::Finite(0)
        );
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for small random networks: (station count, edges).
    /// Self-loops are filtered out when building.
    fn network_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
        (2usize..9).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 1u32..10);
            (Just(n), prop::collection::vec(edge, 0..(n * 2)))
        })
    }

    fn build(n: usize, edges: &[(usize, usize, u32)]) -> Network {
        let mut network = Network::new();
        for i in 0..n {
            network.add_station(&format!("S{i}"));
        }
        for &(a, b, minutes) in edges {
            if a != b {
                network
                    .add_edge(&format!("S{a}"), &format!("S{b}"), minutes)
                    .unwrap();
            }
        }
        network
    }

    /// Floyd–Warshall reference. With `unit` every connection costs 1.
    fn brute_force(network: &Network, unit: bool) -> Vec<Vec<Option<u64>>> {
        let n = network.len();
        let mut d = vec![vec![None; n]; n];
        for (i, row) in d.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for (a, b, minutes) in network.edges() {
            let w = if unit { 1 } else { u64::from(minutes) };
            d[a.0][b.0] = Some(w);
            d[b.0][a.0] = Some(w);
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let (Some(ik), Some(kj)) = (d[i][k], d[k][j]) {
                        if d[i][j].is_none_or(|ij| ik + kj < ij) {
                            d[i][j] = Some(ik + kj);
                        }
                    }
                }
            }
        }
        d
    }

    proptest! {
        /// BFS finds the fewest connections; DFS never beats it.
        #[test]
        fn bfs_is_hop_minimal((n, edges) in network_strategy()) {
            let network = build(n, &edges);
            let reference = brute_force(&network, true);

            for from in network.station_ids() {
                for to in network.station_ids() {
                    let bfs = bfs_between(&network, from, to);
                    let dfs = dfs_between(&network, from, to);
                    let expected = reference[from.0][to.0];

                    prop_assert_eq!(bfs.as_ref().map(|p| p.hops() as u64), expected);
                    prop_assert_eq!(dfs.is_some(), expected.is_some());
                    if let (Some(bfs), Some(dfs)) = (&bfs, &dfs) {
                        prop_assert!(bfs.is_valid(&network));
                        prop_assert!(dfs.is_valid(&network));
                        prop_assert_eq!(dfs.origin(), from);
                        prop_assert_eq!(dfs.destination(), to);
                        prop_assert!(bfs.hops() <= dfs.hops());
                    }
                }
            }
        }

        /// Dijkstra agrees with the brute-force reference.
        #[test]
        fn dijkstra_matches_reference((n, edges) in network_strategy()) {
            let network = build(n, &edges);
            let reference = brute_force(&network, false);

            for from in network.station_ids() {
                let tree = shortest_paths_from(&network, from).unwrap();
                for to in network.station_ids() {
                    prop_assert_eq!(tree.distance_to(to).minutes(), reference[from.0][to.0]);
                }
            }
        }

        /// Travel time accumulates monotonically along a reconstructed path
        /// and ends at the reported distance.
        #[test]
        fn path_prefix_sums((n, edges) in network_strategy()) {
            let network = build(n, &edges);

            for from in network.station_ids() {
                let tree = shortest_paths_from(&network, from).unwrap();
                for to in network.station_ids() {
                    let Some(path) = tree.path_to(to) else {
                        prop_assert_eq!(tree.distance_to(to), Distance::Infinite);
                        continue;
                    };

                    let mut elapsed = 0u64;
                    for pair in path.stations().windows(2) {
                        let step = network.weight_between(pair[0], pair[1]);
                        prop_assert!(step.is_some());
                        let next = elapsed + u64::from(step.unwrap_or_default());
                        prop_assert!(next >= elapsed);
                        prop_assert_eq!(tree.distance_to(pair[1]), Distance::Finite(next));
                        elapsed = next;
                    }
                    prop_assert_eq!(tree.distance_to(to), Distance::Finite(elapsed));
                }
            }
        }

        /// Building the same input twice yields the same all-pairs result.
        #[test]
        fn all_pairs_is_reproducible((n, edges) in network_strategy()) {
            let first = all_pairs_shortest_paths(&build(n, &edges)).unwrap();
            let second = all_pairs_shortest_paths(&build(n, &edges)).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first, all_pairs_shortest_paths_par(&build(n, &edges)).unwrap());
        }

        /// Hop counts agree with BFS paths.
        #[test]
        fn hop_counts_match_bfs((n, edges) in network_strategy()) {
            let network = build(n, &edges);
            let source = StationId(0);
            let hops = hop_counts(&network, source);

            for to in network.station_ids() {
                prop_assert_eq!(hops[to.0], bfs_between(&network, source, to).map(|p| p.hops()));
            }
        }
    }
}
