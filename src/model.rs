//  Copyright (c) 2020 Christopher Taylor
//
//  Distributed under the Boost Software License, Version 1.0. (See accompanying
//  file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//
use log::{debug, info};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::LdaError;
use crate::estimate::{assign_topic, compute_phi, compute_theta, top_n_terms};
use crate::sampler::resample_token;
use crate::state::CountState;

/// Sampler hyperparameters.
#[derive(Debug, Clone)]
pub struct LdaConfig {
    /// Number of topics K.
    pub n_topics: usize,
    /// Document-topic Dirichlet concentration.
    pub alpha: f64,
    /// Topic-word Dirichlet concentration.
    pub eta: f64,
    /// Number of full sweeps over the corpus, run exactly.
    pub iterations: usize,
    /// Seed of the sampler's random stream.
    pub seed: u64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        LdaConfig {
            n_topics: 10,
            alpha: 0.1,
            eta: 0.01,
            iterations: 1000,
            seed: 0,
        }
    }
}

impl LdaConfig {
    pub fn new(n_topics: usize) -> Self {
        LdaConfig {
            n_topics,
            ..Default::default()
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Collapsed Gibbs sampler for Latent Dirichlet Allocation.
///
/// Owns a validated configuration; `fit` runs the whole inference and
/// hands the final counts to a [`FittedLda`].
#[derive(Debug)]
pub struct Lda {
    config: LdaConfig,
}

impl Lda {
    pub fn new(config: LdaConfig) -> Result<Self, LdaError> {
        if config.n_topics < 1 {
            return Err(LdaError::InvalidConfig(
                "n_topics must be at least 1".to_string(),
            ));
        }
        if config.alpha <= 0.0 {
            return Err(LdaError::InvalidConfig(
                "alpha must be positive".to_string(),
            ));
        }
        if config.eta <= 0.0 {
            return Err(LdaError::InvalidConfig("eta must be positive".to_string()));
        }
        Ok(Lda { config })
    }

    pub fn config(&self) -> &LdaConfig {
        &self.config
    }

    /// Runs the configured number of sweeps over `docs` and returns the
    /// fitted model.
    ///
    /// Each sweep resamples every token in document-major, position-minor
    /// order against the counts left by all previously resampled tokens.
    /// The random stream is consumed in that same fixed order, so a fixed
    /// `(docs, config)` pair reproduces identical assignments.
    pub fn fit(&self, docs: &[Vec<usize>], vocab_size: usize) -> Result<FittedLda, LdaError> {
        if docs.iter().all(|doc| doc.is_empty()) {
            return Err(LdaError::EmptyCorpus);
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let mut state = CountState::initialize(docs, vocab_size, self.config.n_topics, &mut rng)?;

        info!(
            "fitting {} topics over {} documents, vocabulary {}",
            self.config.n_topics,
            docs.len(),
            vocab_size
        );

        for sweep in 0..self.config.iterations {
            for (d, doc) in docs.iter().enumerate() {
                for (pos, &word_id) in doc.iter().enumerate() {
                    resample_token(
                        &mut state,
                        d,
                        pos,
                        word_id,
                        self.config.alpha,
                        self.config.eta,
                        &mut rng,
                    )?;
                }
            }
            if sweep > 0 && sweep % 10 == 0 {
                debug!("sweep {} of {}", sweep, self.config.iterations);
            }
        }

        Ok(FittedLda {
            state,
            alpha: self.config.alpha,
            eta: self.config.eta,
        })
    }
}

/// Final state of a finished run, read-only.
#[derive(Debug)]
pub struct FittedLda {
    state: CountState,
    alpha: f64,
    eta: f64,
}

impl FittedLda {
    /// Topic-over-vocabulary distribution, K x W.
    pub fn phi(&self) -> Result<Array2<f64>, LdaError> {
        compute_phi(&self.state.word_topic, self.eta)
    }

    /// Document-over-topics distribution, D x K.
    pub fn theta(&self) -> Result<Array2<f64>, LdaError> {
        compute_theta(&self.state.doc_topic, self.alpha)
    }

    /// Top `n` vocabulary ids per topic with probabilities, descending.
    pub fn top_terms(&self, n: usize) -> Result<Vec<Vec<(usize, f64)>>, LdaError> {
        Ok(top_n_terms(&self.phi()?, n))
    }

    /// Most probable topic per document.
    pub fn dominant_topics(&self) -> Result<Vec<usize>, LdaError> {
        assign_topic(&self.theta()?)
    }

    pub fn word_topic_counts(&self) -> &Array2<usize> {
        &self.state.word_topic
    }

    pub fn doc_topic_counts(&self) -> &Array2<usize> {
        &self.state.doc_topic
    }

    /// Final per-token topic assignments, by (document, position).
    pub fn assignments(&self) -> &[Vec<usize>] {
        &self.state.assignments
    }
}
