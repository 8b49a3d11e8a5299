use criterion::{Criterion, criterion_group, criterion_main};
use parsimony_tree::ParsimonyTree;
use std::collections::HashMap;
use std::hint::black_box;

const TREE_SIZES: &[usize] = &[16, 256, 1024];

/// Newick string of a caterpillar `(T0, (T1, (... (Tn-2, Tn-1)...)));`
fn caterpillar(num_leaves: usize) -> String {
    let mut newick = String::new();
    for i in 0..num_leaves - 1 {
        newick.push_str(&format!("(T{i}, "));
    }
    newick.push_str(&format!("T{}", num_leaves - 1));
    newick.push_str(&")".repeat(num_leaves - 1));
    newick.push(';');
    newick
}

/// Newick string of a balanced tree on `num_leaves` (power of two) taxa
fn balanced(num_leaves: usize) -> String {
    fn subtree(from: usize, to: usize) -> String {
        if to - from == 1 {
            format!("T{from}")
        } else {
            let mid = from + (to - from) / 2;
            format!("({}, {})", subtree(from, mid), subtree(mid, to))
        }
    }
    format!("{};", subtree(0, num_leaves))
}

fn parsing(c: &mut Criterion) {
    for &size in TREE_SIZES {
        let caterpillar = caterpillar(size);
        c.bench_function(&format!("parse caterpillar n{size}"), |b| {
            b.iter(|| ParsimonyTree::<u8>::builder(black_box(&caterpillar)).build().unwrap());
        });

        let balanced = balanced(size);
        c.bench_function(&format!("parse balanced n{size}"), |b| {
            b.iter(|| ParsimonyTree::<u8>::builder(black_box(&balanced)).build().unwrap());
        });
    }
}

fn scoring_support(c: &mut Criterion) {
    for &size in TREE_SIZES {
        let mut tree = ParsimonyTree::<u8>::builder(&balanced(size)).build().unwrap();
        let states: HashMap<String, u8> = tree
            .taxa()
            .iter()
            .enumerate()
            .map(|(i, taxon)| (taxon.clone(), (i % 4) as u8))
            .collect();

        c.bench_function(&format!("bind states n{size}"), |b| {
            b.iter(|| tree.bind_states(black_box(&states)).unwrap());
        });

        c.bench_function(&format!("post-order n{size}"), |b| {
            b.iter(|| tree.post_order_iter().count());
        });
    }
}

criterion_group!(benches, parsing, scoring_support);
criterion_main!(benches);
