//! Random forest regressor
//!
//! Bagged CART regression trees with variance-reduction splits. At startup the
//! service fits one on synthetic uniform noise, so its output carries no soil
//! physics; it is deterministic for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{InferenceError, MoisturePredictor};
use crate::models::SoilFeatures;

/// Hyperparameters for [`RandomForestRegressor`]
#[derive(Debug, Clone, PartialEq)]
pub struct ForestConfig {
    pub n_estimators: usize,
    pub seed: u64,
    /// `None` grows trees until leaves are pure or too small to split
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            seed: 42,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

impl ForestConfig {
    fn validate(&self) -> Result<(), InferenceError> {
        if self.n_estimators == 0 {
            return Err(InferenceError::InvalidConfig(
                "n_estimators must be at least 1".to_string(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(InferenceError::InvalidConfig(
                "min_samples_split must be at least 2".to_string(),
            ));
        }
        if self.min_samples_leaf == 0 {
            return Err(InferenceError::InvalidConfig(
                "min_samples_leaf must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Arena-allocated regression tree; the root is node 0
#[derive(Debug, Clone)]
struct RegressionTree {
    nodes: Vec<Node>,
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    /// Number of samples going left once indices are sorted on `feature`
    left_len: usize,
    score: f64,
}

impl RegressionTree {
    fn fit(x: &[Vec<f64>], y: &[f64], mut indices: Vec<usize>, config: &ForestConfig) -> Self {
        let mut tree = RegressionTree { nodes: Vec::new() };
        tree.build(x, y, &mut indices, 0, config);
        tree
    }

    fn build(
        &mut self,
        x: &[Vec<f64>],
        y: &[f64],
        indices: &mut [usize],
        depth: usize,
        config: &ForestConfig,
    ) -> usize {
        let id = self.nodes.len();
        let mean = indices.iter().map(|&i| y[i]).sum::<f64>() / indices.len() as f64;
        self.nodes.push(Node::Leaf { value: mean });

        let depth_exhausted = config.max_depth.is_some_and(|max| depth >= max);
        if depth_exhausted || indices.len() < config.min_samples_split {
            return id;
        }

        let Some(split) = best_split(x, y, indices, config.min_samples_leaf) else {
            return id;
        };

        indices.sort_by(|&a, &b| x[a][split.feature].total_cmp(&x[b][split.feature]));
        let (left_idx, right_idx) = indices.split_at_mut(split.left_len);

        let left = self.build(x, y, left_idx, depth + 1, config);
        let right = self.build(x, y, right_idx, depth + 1, config);

        self.nodes[id] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        id
    }

    fn predict(&self, row: &[f64]) -> f64 {
        let mut id = 0;
        loop {
            match &self.nodes[id] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    id = if row[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
    }

    fn depth(&self) -> usize {
        fn walk(nodes: &[Node], id: usize) -> usize {
            match &nodes[id] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(nodes, *left).max(walk(nodes, *right)),
            }
        }
        walk(&self.nodes, 0)
    }
}

/// Best variance-reducing split over all features, if any improves on the parent
fn best_split(
    x: &[Vec<f64>],
    y: &[f64],
    indices: &[usize],
    min_samples_leaf: usize,
) -> Option<SplitCandidate> {
    let n = indices.len();
    let n_features = x[indices[0]].len();
    let total_sum: f64 = indices.iter().map(|&i| y[i]).sum();
    let parent_score = total_sum * total_sum / n as f64;

    let mut best: Option<SplitCandidate> = None;
    let mut order = indices.to_vec();

    for feature in 0..n_features {
        order.sort_by(|&a, &b| x[a][feature].total_cmp(&x[b][feature]));

        let mut left_sum = 0.0;
        for k in 1..n {
            left_sum += y[order[k - 1]];

            let lo = x[order[k - 1]][feature];
            let hi = x[order[k]][feature];
            if lo == hi || k < min_samples_leaf || n - k < min_samples_leaf {
                continue;
            }

            let right_sum = total_sum - left_sum;
            // Maximizing this is equivalent to minimizing the children's summed squared error.
            let score = left_sum * left_sum / k as f64 + right_sum * right_sum / (n - k) as f64;

            if score > parent_score + f64::EPSILON
                && best.as_ref().map_or(true, |b| score > b.score)
            {
                best = Some(SplitCandidate {
                    feature,
                    threshold: lo + (hi - lo) / 2.0,
                    left_len: k,
                    score,
                });
            }
        }
    }

    best
}

/// Bagged ensemble of regression trees; prediction is the mean of the trees
#[derive(Debug, Clone)]
pub struct RandomForestRegressor {
    trees: Vec<RegressionTree>,
    n_features: usize,
    config: ForestConfig,
}

impl RandomForestRegressor {
    /// Fit on row-major features `x` against targets `y`
    pub fn fit(config: ForestConfig, x: &[Vec<f64>], y: &[f64]) -> Result<Self, InferenceError> {
        config.validate()?;

        if x.is_empty() || y.is_empty() {
            return Err(InferenceError::EmptyTrainingSet);
        }
        if x.len() != y.len() {
            return Err(InferenceError::InvalidInput(format!(
                "{} feature rows but {} targets",
                x.len(),
                y.len()
            )));
        }

        let n_features = x[0].len();
        if n_features == 0 {
            return Err(InferenceError::InvalidInput(
                "feature rows must not be empty".to_string(),
            ));
        }
        if let Some(row) = x.iter().find(|row| row.len() != n_features) {
            return Err(InferenceError::DimensionMismatch {
                expected: n_features,
                got: row.len(),
            });
        }
        if x.iter().flatten().chain(y).any(|v| !v.is_finite()) {
            return Err(InferenceError::InvalidInput(
                "training data contains non-finite values".to_string(),
            ));
        }

        let n = x.len();
        let mut seeder = StdRng::seed_from_u64(config.seed);
        let trees = (0..config.n_estimators)
            .map(|_| {
                let mut rng = StdRng::seed_from_u64(seeder.gen());
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                RegressionTree::fit(x, y, bootstrap, &config)
            })
            .collect();

        Ok(Self {
            trees,
            n_features,
            config,
        })
    }

    /// Fit on a synthetic data set of `samples` rows (see [`synthetic_training_set`])
    pub fn fit_synthetic(config: ForestConfig, samples: usize) -> Result<Self, InferenceError> {
        let (x, y) = synthetic_training_set(samples, SoilFeatures::LEN, config.seed);
        Self::fit(config, &x, &y)
    }

    pub fn predict_row(&self, row: &[f64]) -> Result<f64, InferenceError> {
        if row.len() != self.n_features {
            return Err(InferenceError::DimensionMismatch {
                expected: self.n_features,
                got: row.len(),
            });
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(InferenceError::InvalidInput(
                "features must be finite numbers".to_string(),
            ));
        }

        let total: f64 = self.trees.iter().map(|tree| tree.predict(row)).sum();
        Ok(total / self.trees.len() as f64)
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// Depth of the deepest tree
    pub fn max_tree_depth(&self) -> usize {
        self.trees.iter().map(RegressionTree::depth).max().unwrap_or(0)
    }
}

impl MoisturePredictor for RandomForestRegressor {
    fn predict(&self, features: &SoilFeatures) -> Result<f64, InferenceError> {
        self.predict_row(&features.to_array())
    }

    fn name(&self) -> &'static str {
        "random-forest"
    }

    fn is_ready(&self) -> bool {
        !self.trees.is_empty()
    }
}

/// Uniform features in `[0, 1)` against uniform targets in `[0, 100)`
pub fn synthetic_training_set(
    samples: usize,
    n_features: usize,
    seed: u64,
) -> (Vec<Vec<f64>>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let x = (0..samples)
        .map(|_| (0..n_features).map(|_| rng.gen::<f64>()).collect())
        .collect();
    let y = (0..samples).map(|_| rng.gen::<f64>() * 100.0).collect();
    (x, y)
}
