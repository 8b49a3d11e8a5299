use parsimony_tree::model::Node;
use parsimony_tree::{ParsimonyTree, TreeError, parse_tree, parse_tree_with_states};
use std::collections::{BTreeMap, HashMap};

const MOA_NEWICK: &str = "(Tinamou, (Emu, (Kiwi, Moa)));";

fn states(pairs: &[(&str, char)]) -> HashMap<String, char> {
    pairs.iter().map(|&(taxon, state)| (taxon.to_string(), state)).collect()
}

fn position_of<S>(order: &[&Node<S>], node: &Node<S>) -> usize {
    order.iter().position(|n| n.index() == node.index()).unwrap()
}

// --- TESTS CHARACTER STATES ---
#[test]
fn test_states_bound_during_construction() {
    let chars = states(&[("Tinamou", 'A'), ("Emu", 'C'), ("Kiwi", 'G'), ("Moa", 'G')]);
    let tree = parse_tree_with_states(MOA_NEWICK, &chars).unwrap();

    let bound: Vec<_> = tree.leaf_states().collect();
    assert_eq!(
        bound,
        [("Tinamou", Some(&'A')), ("Emu", Some(&'C')), ("Kiwi", Some(&'G')), ("Moa", Some(&'G'))]
    );
    assert!(tree.post_order_iter().filter(|n| n.is_internal()).all(|n| n.state().is_none()));
}

#[test]
fn test_construction_without_states() {
    let tree = parse_tree::<char>(MOA_NEWICK).unwrap();
    assert!(tree.leaves().all(|leaf| leaf.state().is_none()));
}

#[test]
fn test_missing_state_during_construction() {
    let chars = states(&[("Tinamou", 'A'), ("Emu", 'C'), ("Kiwi", 'G')]);
    let result = parse_tree_with_states(MOA_NEWICK, &chars);
    assert_eq!(result.unwrap_err(), TreeError::MissingTaxonState { taxon: "Moa".to_string() });
}

#[test]
fn test_rebind_states() {
    let first = states(&[("Tinamou", 'A'), ("Emu", 'C'), ("Kiwi", 'G'), ("Moa", 'G')]);
    let second = states(&[("Tinamou", 'T'), ("Emu", 'T'), ("Kiwi", 'A'), ("Moa", 'C')]);
    let mut tree = parse_tree_with_states(MOA_NEWICK, &first).unwrap();
    let topology_before: Vec<_> = tree.post_order_iter().map(|n| (n.index(), n.children())).collect();

    tree.bind_states(&second).unwrap();

    assert_eq!(tree.leaf("Tinamou").and_then(|l| l.state()), Some(&'T'));
    assert_eq!(tree.leaf("Moa").and_then(|l| l.state()), Some(&'C'));
    let topology_after: Vec<_> = tree.post_order_iter().map(|n| (n.index(), n.children())).collect();
    assert_eq!(topology_before, topology_after);
    assert!(tree.is_valid());
}

#[test]
fn test_rebind_is_idempotent() {
    let chars = states(&[("Tinamou", 'A'), ("Emu", 'C'), ("Kiwi", 'G'), ("Moa", 'G')]);
    let mut tree = parse_tree::<char>(MOA_NEWICK).unwrap();

    tree.bind_states(&chars).unwrap();
    let once: Vec<_> = tree.leaf_states().map(|(t, s)| (t.to_string(), s.copied())).collect();
    tree.bind_states(&chars).unwrap();
    let twice: Vec<_> = tree.leaf_states().map(|(t, s)| (t.to_string(), s.copied())).collect();

    assert_eq!(once, twice);
}

#[test]
fn test_failed_rebind_leaves_states_untouched() {
    let first = states(&[("Tinamou", 'A'), ("Emu", 'C'), ("Kiwi", 'G'), ("Moa", 'G')]);
    let incomplete = states(&[("Tinamou", 'T'), ("Emu", 'T'), ("Kiwi", 'A')]);
    let mut tree = parse_tree_with_states(MOA_NEWICK, &first).unwrap();

    let err = tree.bind_states(&incomplete).unwrap_err();

    assert_eq!(err, TreeError::MissingTaxonState { taxon: "Moa".to_string() });
    assert_eq!(tree.leaf("Tinamou").and_then(|l| l.state()), Some(&'A'));
    assert_eq!(tree.leaf("Kiwi").and_then(|l| l.state()), Some(&'G'));
}

#[test]
fn test_extra_states_are_ignored() {
    let chars = states(&[("Tinamou", 'A'), ("Emu", 'C'), ("Kiwi", 'G'), ("Moa", 'G'), ("Ostrich", 'T')]);
    let tree = parse_tree_with_states(MOA_NEWICK, &chars).unwrap();
    assert_eq!(tree.num_leaves(), 4);
}

#[test]
fn test_clear_states() {
    let chars = states(&[("Tinamou", 'A'), ("Emu", 'C'), ("Kiwi", 'G'), ("Moa", 'G')]);
    let mut tree = parse_tree_with_states(MOA_NEWICK, &chars).unwrap();
    tree.clear_states();
    assert!(tree.leaf_states().all(|(_, state)| state.is_none()));
}

#[test]
fn test_btree_map_and_set_payload() {
    // Payload is opaque, e.g. a set of possible states
    let chars: BTreeMap<&str, Vec<char>> = BTreeMap::from([
        ("Tinamou", vec!['A']),
        ("Emu", vec!['A', 'C']),
        ("Kiwi", vec!['G']),
        ("Moa", vec!['G', 'T']),
    ]);
    let tree: ParsimonyTree<Vec<char>> = ParsimonyTree::builder(MOA_NEWICK)
        .with_states(&chars)
        .build()
        .unwrap();

    assert_eq!(tree.leaf("Emu").and_then(|l| l.state()), Some(&vec!['A', 'C']));
}

// --- TESTS TRAVERSAL ---
#[test]
fn test_post_order_children_before_parent() {
    let tree = parse_tree::<()>("((A, (B, C)), ((D, E), F));").unwrap();
    let order = tree.post_order();

    assert_eq!(order.len(), tree.num_nodes());
    assert_eq!(order.last().map(|n| n.index()), Some(tree.root_index()));
    for node in &order {
        if let Some((left, right)) = node.children() {
            let own = position_of(&order, node);
            assert!(position_of(&order, &tree[left]) < own);
            assert!(position_of(&order, &tree[right]) < own);
        }
    }
}

#[test]
fn test_post_order_left_subtree_first() {
    let tree = parse_tree::<()>("((A, B), (C, D));").unwrap();
    let ids: Vec<String> = tree.post_order_iter().map(|n| n.id().to_string()).collect();
    assert_eq!(ids, ["A", "B", "8", "C", "D", "9", "7"]);
}

#[test]
fn test_post_order_repeatable() {
    let tree = parse_tree::<()>("((A, B), (C, D));").unwrap();
    let first: Vec<_> = tree.post_order().iter().map(|n| n.index()).collect();
    let second: Vec<_> = tree.post_order().iter().map(|n| n.index()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_pre_order_parent_first() {
    let tree = parse_tree::<()>("((A, B), (C, D));").unwrap();
    let ids: Vec<String> = tree.pre_order_iter().map(|n| n.id().to_string()).collect();
    assert_eq!(ids, ["7", "8", "A", "B", "9", "C", "D"]);
}

#[test]
fn test_concurrent_readers() {
    let tree = parse_tree::<char>(MOA_NEWICK).unwrap();
    let tree = &tree;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || tree.post_order_iter().count()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 7);
        }
    });
}
