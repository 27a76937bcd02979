//! End-to-end coverage: build a graph from a small corpus and run
//! every query against it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wordgraph::{
    augment, normalize, page_rank, page_ranks, random_walk, BridgeQuery, BridgeResult,
    GraphBuilder, PathQuery, PathResult, WalkResult,
};

const CORPUS: &str = "The quick brown fox jumps over the lazy dog.\n\
                      The quick dog barks: the fox runs over the dog!";

#[test]
fn corpus_builds_expected_vocabulary() {
    let graph = GraphBuilder::from_text(CORPUS);

    for word in ["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "barks", "runs"] {
        assert!(graph.contains(word), "missing {}", word);
    }
    assert_eq!(graph.node_count(), 10);
    assert!(!graph.contains("The"));
    assert!(graph
        .words()
        .all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
}

#[test]
fn normalization_matches_builder_tokens() {
    let tokens = normalize(CORPUS);
    let via_tokens = GraphBuilder::from_tokens(&tokens);
    let via_text = GraphBuilder::from_text(CORPUS);

    assert_eq!(via_tokens.node_count(), via_text.node_count());
    assert_eq!(via_tokens.edges(), via_text.edges());
}

#[test]
fn bridge_query_end_to_end() {
    let graph = GraphBuilder::from_text(CORPUS);

    // the → quick → dog and the → lazy → dog both exist
    match BridgeQuery::between("the", "dog").execute(&graph) {
        BridgeResult::Bridges { words, .. } => {
            assert!(words.contains(&"lazy".to_string()));
            assert!(words.contains(&"quick".to_string()));
            let mut sorted = words.clone();
            sorted.sort();
            assert_eq!(words, sorted, "candidates must be lexicographic");
        }
        other => panic!("expected bridges, got {:?}", other),
    }

    assert_eq!(
        BridgeQuery::between("pelican", "dog").execute(&graph),
        BridgeResult::NoSuchWord
    );
}

#[test]
fn augmented_text_interleaves_bridges() {
    let graph = GraphBuilder::from_text(CORPUS);
    let mut rng = StdRng::seed_from_u64(5);

    let out = augment(&graph, "the dog", &mut rng);
    let words: Vec<&str> = out.split(' ').collect();
    assert_eq!(words.len(), 3);
    assert_eq!(words[0], "the");
    assert_eq!(words[2], "dog");
    // The inserted word is a real bridge.
    let mid = graph.word_id(words[1]).unwrap();
    let the = graph.word_id("the").unwrap();
    let dog = graph.word_id("dog").unwrap();
    assert!(graph.has_edge(the, mid) && graph.has_edge(mid, dog));
}

#[test]
fn shortest_path_end_to_end() {
    let graph = GraphBuilder::from_text(CORPUS);

    let PathResult::Path { words, cost } = PathQuery::between("brown", "lazy").execute(&graph)
    else {
        panic!("expected a path");
    };
    assert_eq!(words.first().map(String::as_str), Some("brown"));
    assert_eq!(words.last().map(String::as_str), Some("lazy"));

    let summed: u64 = words
        .windows(2)
        .map(|p| {
            let u = graph.word_id(&p[0]).unwrap();
            let v = graph.word_id(&p[1]).unwrap();
            u64::from(graph.weight(u, v).unwrap())
        })
        .sum();
    assert_eq!(summed, cost);
}

#[test]
fn pagerank_mass_reflects_sink_structure() {
    // Every word in CORPUS reappears with a successor, so the graph is
    // sink-free and the total mass stays at 1.
    let graph = GraphBuilder::from_text(CORPUS);
    let total: f64 = page_ranks(&graph).iter().sum();
    assert!((total - 1.0).abs() < 1e-9);

    // Appending a unique final word creates a sink, and its
    // unredistributed mass pulls the total below 1.
    let with_sink = GraphBuilder::from_text(&format!("{} zenith", CORPUS));
    let leaked: f64 = page_ranks(&with_sink).iter().sum();
    assert!(leaked < 1.0);
    assert!(leaked > 0.0);

    // "the" appears most often and should dominate.
    let the_rank = page_rank(&graph, "the");
    for word in ["brown", "barks", "runs"] {
        assert!(the_rank > page_rank(&graph, word));
    }
}

#[test]
fn random_walk_end_to_end() {
    let graph = GraphBuilder::from_text(CORPUS);

    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let WalkResult::Walk { words } = random_walk(&graph, &mut rng) else {
            panic!("corpus graph is not empty");
        };
        assert!(!words.is_empty());
        assert!(words.len() <= graph.edge_count() + 1);
        for pair in words.windows(2) {
            let u = graph.word_id(&pair[0]).unwrap();
            let v = graph.word_id(&pair[1]).unwrap();
            assert!(graph.has_edge(u, v));
        }
    }
}

#[test]
fn query_results_serialize_for_external_consumers() {
    let graph = GraphBuilder::from_text(CORPUS);

    let bridge = BridgeQuery::between("the", "dog").execute(&graph);
    let json = serde_json::to_value(&bridge).unwrap();
    assert_eq!(json["result"], "bridges");

    let path = PathQuery::between("pelican", "dog").execute(&graph);
    let json = serde_json::to_value(&path).unwrap();
    assert_eq!(json["result"], "no_such_word");
}
