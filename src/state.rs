//  Copyright (c) 2020 Christopher Taylor
//
//  Distributed under the Boost Software License, Version 1.0. (See accompanying
//  file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//
use ndarray::{Array, Array1, Array2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::error::LdaError;

/// Sufficient statistics of the collapsed sampler.
///
/// `assignments` is the authoritative per-token topic; the count tables are
/// derived aggregates kept consistent with it by `decrement`/`increment`.
/// Invariants that hold after initialization and after every single-token
/// update:
///
/// * row `d` of `doc_topic` sums to the length of document `d`,
/// * `word_topic` and `doc_topic` both sum to the corpus token count,
/// * `topic_totals[k]` equals the sum of column `k` of `word_topic`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountState {
    /// W x K: tokens of word `w` currently assigned topic `k`.
    pub word_topic: Array2<usize>,
    /// D x K: tokens of document `d` currently assigned topic `k`.
    pub doc_topic: Array2<usize>,
    /// Per-topic token totals, the column sums of `word_topic`.
    pub topic_totals: Array1<usize>,
    /// Current topic of each token, by (document, position).
    pub assignments: Vec<Vec<usize>>,
}

impl CountState {
    /// Builds the initial state by drawing one topic per token uniformly
    /// from `0..n_topics`, in document-major, position-minor token order.
    ///
    /// Fails with [`LdaError::VocabMismatch`] if any word-id is out of
    /// range for `vocab_size`.
    pub fn initialize<R: Rng>(
        docs: &[Vec<usize>],
        vocab_size: usize,
        n_topics: usize,
        rng: &mut R,
    ) -> Result<CountState, LdaError> {
        for doc in docs {
            for &word_id in doc {
                if word_id >= vocab_size {
                    return Err(LdaError::VocabMismatch {
                        word_id,
                        vocab_size,
                    });
                }
            }
        }

        let total_tokens: usize = docs.iter().map(|doc| doc.len()).sum();
        let draws: Array1<usize> =
            Array::random_using(total_tokens, Uniform::from(0..n_topics), rng);

        let mut state = CountState {
            word_topic: Array2::zeros((vocab_size, n_topics)),
            doc_topic: Array2::zeros((docs.len(), n_topics)),
            topic_totals: Array1::zeros(n_topics),
            assignments: Vec::with_capacity(docs.len()),
        };

        let mut n = 0;
        for (d, doc) in docs.iter().enumerate() {
            let mut z = Vec::with_capacity(doc.len());
            for &word_id in doc {
                let topic = draws[n];
                state.word_topic[[word_id, topic]] += 1;
                state.doc_topic[[d, topic]] += 1;
                state.topic_totals[topic] += 1;
                z.push(topic);
                n += 1;
            }
            state.assignments.push(z);
        }

        Ok(state)
    }

    /// Removes the token's current topic from all count tables, leaving the
    /// assignment entry stale until the matching `increment`.
    pub fn decrement(&mut self, doc: usize, pos: usize, word_id: usize) {
        let topic = self.assignments[doc][pos];
        self.word_topic[[word_id, topic]] -= 1;
        self.doc_topic[[doc, topic]] -= 1;
        self.topic_totals[topic] -= 1;
    }

    /// Adds `topic` to all count tables and records it as the token's
    /// assignment.
    pub fn increment(&mut self, doc: usize, pos: usize, word_id: usize, topic: usize) {
        self.word_topic[[word_id, topic]] += 1;
        self.doc_topic[[doc, topic]] += 1;
        self.topic_totals[topic] += 1;
        self.assignments[doc][pos] = topic;
    }

    pub fn n_topics(&self) -> usize {
        self.topic_totals.len()
    }

    pub fn vocab_size(&self) -> usize {
        self.word_topic.nrows()
    }

    pub fn num_documents(&self) -> usize {
        self.doc_topic.nrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn docs() -> Vec<Vec<usize>> {
        vec![vec![0, 1, 2, 0], vec![2, 3], vec![], vec![3, 3, 3]]
    }

    fn assert_consistent(state: &CountState, docs: &[Vec<usize>]) {
        for (d, doc) in docs.iter().enumerate() {
            assert_eq!(state.doc_topic.row(d).sum(), doc.len());
        }
        let total: usize = docs.iter().map(|doc| doc.len()).sum();
        assert_eq!(state.word_topic.sum(), total);
        assert_eq!(state.doc_topic.sum(), total);
        for k in 0..state.n_topics() {
            assert_eq!(state.topic_totals[k], state.word_topic.column(k).sum());
        }
    }

    #[test]
    fn initialize_satisfies_invariants() {
        let docs = docs();
        let mut rng = StdRng::seed_from_u64(7);
        let state = CountState::initialize(&docs, 4, 3, &mut rng).unwrap();

        assert_eq!(state.word_topic.dim(), (4, 3));
        assert_eq!(state.doc_topic.dim(), (4, 3));
        assert_eq!(state.assignments[2], Vec::<usize>::new());
        for (d, doc) in docs.iter().enumerate() {
            assert_eq!(state.assignments[d].len(), doc.len());
        }
        assert_consistent(&state, &docs);
    }

    #[test]
    fn initialize_rejects_out_of_range_word_id() {
        let docs = vec![vec![0, 5]];
        let mut rng = StdRng::seed_from_u64(7);
        let err = CountState::initialize(&docs, 4, 3, &mut rng).unwrap_err();
        match err {
            LdaError::VocabMismatch {
                word_id,
                vocab_size,
            } => {
                assert_eq!(word_id, 5);
                assert_eq!(vocab_size, 4);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn decrement_then_increment_restores_invariants() {
        let docs = docs();
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = CountState::initialize(&docs, 4, 3, &mut rng).unwrap();
        let before = state.clone();

        let old_topic = state.assignments[0][1];
        state.decrement(0, 1, docs[0][1]);
        assert_eq!(state.word_topic[[docs[0][1], old_topic]], before.word_topic[[docs[0][1], old_topic]] - 1);

        state.increment(0, 1, docs[0][1], old_topic);
        assert_eq!(state, before);

        // moving the token to another topic keeps the aggregate invariants
        let new_topic = (old_topic + 1) % 3;
        state.decrement(0, 1, docs[0][1]);
        state.increment(0, 1, docs[0][1], new_topic);
        assert_eq!(state.assignments[0][1], new_topic);
        assert_consistent(&state, &docs);
    }

    #[test]
    fn initialize_is_deterministic_for_a_seed() {
        let docs = docs();
        let mut rng_a = StdRng::seed_from_u64(4321);
        let mut rng_b = StdRng::seed_from_u64(4321);
        let a = CountState::initialize(&docs, 4, 3, &mut rng_a).unwrap();
        let b = CountState::initialize(&docs, 4, 3, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }
}
