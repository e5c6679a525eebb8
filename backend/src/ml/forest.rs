//! Random-forest classifier over the six soil features
//!
//! CART trees with gini impurity, bootstrap sampling and a random feature
//! subset per split. Training is fully deterministic for a given seed: each
//! tree derives its own RNG from the master seed.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{CLASS_COUNT, FEATURE_COUNT};

/// Training parameters for [`RandomForest::fit`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestParameters {
    /// Number of trees in the ensemble
    pub n_trees: usize,
    /// Nodes with fewer samples become leaves
    pub min_samples_split: usize,
    /// Features considered per split (sqrt of the feature count, rounded down)
    pub max_features: usize,
    /// Master seed for bootstrap and feature sampling
    pub seed: u64,
}

impl Default for ForestParameters {
    fn default() -> Self {
        Self {
            n_trees: 100,
            min_samples_split: 2,
            max_features: 2,
            seed: 42,
        }
    }
}

/// One node of a fitted decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
enum TreeNode {
    Leaf {
        class: usize,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

/// A single CART decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    root: TreeNode,
}

impl DecisionTree {
    fn fit(
        rows: &[[f64; FEATURE_COUNT]],
        labels: &[usize],
        indices: Vec<usize>,
        params: &ForestParameters,
        rng: &mut StdRng,
    ) -> Self {
        Self {
            root: grow(rows, labels, indices, params, rng),
        }
    }

    /// Class index for one feature vector
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> usize {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf { class } => return *class,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }
}

fn class_counts(labels: &[usize], indices: &[usize]) -> [usize; CLASS_COUNT] {
    let mut counts = [0; CLASS_COUNT];
    for &index in indices {
        counts[labels[index]] += 1;
    }
    counts
}

fn majority_class(counts: &[usize; CLASS_COUNT]) -> usize {
    let mut best = 0;
    for class in 1..CLASS_COUNT {
        if counts[class] > counts[best] {
            best = class;
        }
    }
    best
}

fn gini(counts: &[usize; CLASS_COUNT], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&count| {
            let p = count as f64 / total;
            p * p
        })
        .sum::<f64>()
}

struct BestSplit {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

fn grow(
    rows: &[[f64; FEATURE_COUNT]],
    labels: &[usize],
    indices: Vec<usize>,
    params: &ForestParameters,
    rng: &mut StdRng,
) -> TreeNode {
    let counts = class_counts(labels, &indices);
    let majority = majority_class(&counts);

    let pure = counts.iter().filter(|&&count| count > 0).count() <= 1;
    if pure || indices.len() < params.min_samples_split {
        return TreeNode::Leaf { class: majority };
    }

    let parent_impurity = gini(&counts, indices.len());
    let features: Vec<usize> = (0..FEATURE_COUNT).collect();
    let candidates: Vec<usize> = features
        .choose_multiple(rng, params.max_features.min(FEATURE_COUNT))
        .copied()
        .collect();

    let mut best: Option<BestSplit> = None;
    for &feature in &candidates {
        let mut sorted = indices.clone();
        sorted.sort_by(|&a, &b| {
            rows[a][feature]
                .partial_cmp(&rows[b][feature])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total = sorted.len();
        let mut left_counts = [0; CLASS_COUNT];
        let mut right_counts = counts;

        for position in 0..total - 1 {
            let index = sorted[position];
            left_counts[labels[index]] += 1;
            right_counts[labels[index]] -= 1;

            let value = rows[index][feature];
            let next = rows[sorted[position + 1]][feature];
            if next <= value {
                // No gap between adjacent values, nothing to split on
                continue;
            }

            let n_left = position + 1;
            let n_right = total - n_left;
            let impurity = (n_left as f64 * gini(&left_counts, n_left)
                + n_right as f64 * gini(&right_counts, n_right))
                / total as f64;

            if best
                .as_ref()
                .map(|current| impurity < current.impurity)
                .unwrap_or(impurity < parent_impurity)
            {
                best = Some(BestSplit {
                    feature,
                    threshold: (value + next) / 2.0,
                    impurity,
                });
            }
        }
    }

    let Some(split) = best else {
        return TreeNode::Leaf { class: majority };
    };

    let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
        .into_iter()
        .partition(|&index| rows[index][split.feature] <= split.threshold);

    TreeNode::Split {
        feature: split.feature,
        threshold: split.threshold,
        left: Box::new(grow(rows, labels, left_indices, params, rng)),
        right: Box::new(grow(rows, labels, right_indices, params, rng)),
    }
}

/// Ensemble of decision trees with majority-vote prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Fit the ensemble on labeled feature rows.
    ///
    /// Each tree is trained on a bootstrap sample drawn with its own RNG
    /// seeded from `params.seed` plus the tree index.
    pub fn fit(rows: &[[f64; FEATURE_COUNT]], labels: &[usize], params: &ForestParameters) -> Self {
        let trees = (0..params.n_trees)
            .map(|tree_index| {
                let mut rng = StdRng::seed_from_u64(params.seed.wrapping_add(tree_index as u64));
                let bootstrap: Vec<usize> = (0..rows.len())
                    .map(|_| rng.gen_range(0..rows.len()))
                    .collect();
                DecisionTree::fit(rows, labels, bootstrap, params, &mut rng)
            })
            .collect();

        Self { trees }
    }

    /// Majority vote over all trees; ties resolve to the lowest class index
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> usize {
        let mut votes = [0usize; CLASS_COUNT];
        for tree in &self.trees {
            votes[tree.predict(features)] += 1;
        }

        let mut best = 0;
        for class in 1..CLASS_COUNT {
            if votes[class] > votes[best] {
                best = class;
            }
        }
        best
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
