//  Copyright (c) 2020 Christopher Taylor
//
//  Distributed under the Boost Software License, Version 1.0. (See accompanying
//  file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//
use ndarray::Array1;
use rand::Rng;

use crate::error::LdaError;
use crate::state::CountState;

/// Unnormalized conditional weights of each candidate topic for one token,
/// computed against the counts currently in `state`.
///
/// For topic `k` the weight is the product of
///
/// * `(word_topic[word_id, k] + eta) / (topic_totals[k] + W * eta)`, the
///   probability of the token's word under topic `k`, and
/// * `(doc_topic[doc, k] + alpha) / (N_d + K * alpha)`, the probability of
///   topic `k` under the token's document.
///
/// Callers implementing leave-one-out resampling must `decrement` the token
/// first so its own count does not appear in either table.
pub fn conditional(
    state: &CountState,
    doc: usize,
    word_id: usize,
    alpha: f64,
    eta: f64,
) -> Result<Array1<f64>, LdaError> {
    let n_topics = state.n_topics();
    let w_eta = state.vocab_size() as f64 * eta;
    let prior_denom = state.doc_topic.row(doc).sum() as f64 + n_topics as f64 * alpha;
    if prior_denom <= 0.0 {
        return Err(LdaError::DegenerateDistribution(prior_denom));
    }

    let mut weights = Array1::zeros(n_topics);
    for k in 0..n_topics {
        let likelihood_denom = state.topic_totals[k] as f64 + w_eta;
        if likelihood_denom <= 0.0 {
            return Err(LdaError::DegenerateDistribution(likelihood_denom));
        }
        let likelihood = (state.word_topic[[word_id, k]] as f64 + eta) / likelihood_denom;
        let prior = (state.doc_topic[[doc, k]] as f64 + alpha) / prior_denom;
        weights[k] = likelihood * prior;
    }
    Ok(weights)
}

/// Resamples one token: decrement, recompute its conditional against the
/// remaining counts, draw a topic from it, increment. Consumes exactly one
/// draw from `rng`, so a fixed token order gives reproducible sweeps.
pub fn resample_token<R: Rng>(
    state: &mut CountState,
    doc: usize,
    pos: usize,
    word_id: usize,
    alpha: f64,
    eta: f64,
    rng: &mut R,
) -> Result<usize, LdaError> {
    state.decrement(doc, pos, word_id);

    let weights = conditional(state, doc, word_id, alpha, eta)?;
    let total: f64 = weights.sum();
    if total <= 0.0 {
        return Err(LdaError::DegenerateDistribution(total));
    }

    // inverse-CDF draw over the unnormalized weights
    let threshold = rng.gen::<f64>() * total;
    let mut new_topic = state.n_topics() - 1;
    let mut cumulative = 0.0;
    for (k, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative >= threshold {
            new_topic = k;
            break;
        }
    }

    state.increment(doc, pos, word_id, new_topic);
    Ok(new_topic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // one document [w0, w1, w0] assigned topics [0, 1, 0]; W = 2, K = 2
    fn tiny_state() -> CountState {
        CountState {
            word_topic: array![[2, 0], [0, 1]],
            doc_topic: array![[2, 1]],
            topic_totals: array![2, 1],
            assignments: vec![vec![0, 1, 0]],
        }
    }

    #[test]
    fn conditional_excludes_the_decremented_token() {
        let mut state = tiny_state();
        state.decrement(0, 0, 0);

        let weights = conditional(&state, 0, 0, 1.0, 1.0).unwrap();

        // topic 0 must be weighted with the post-decrement count 1, not 2:
        // likelihood = (1 + 1) / (1 + 2), prior = (1 + 1) / (2 + 2)
        assert_abs_diff_eq!(weights[0], (2.0 / 3.0) * 0.5, epsilon = 1e-12);
        // likelihood = (0 + 1) / (1 + 2), prior = (1 + 1) / (2 + 2)
        assert_abs_diff_eq!(weights[1], (1.0 / 3.0) * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn conditional_weights_are_strictly_positive() {
        let state = tiny_state();
        let weights = conditional(&state, 0, 1, 0.5, 0.001).unwrap();
        for &w in weights.iter() {
            assert!(w > 0.0);
        }
    }

    #[test]
    fn resample_preserves_count_invariants() {
        let mut state = tiny_state();
        let mut rng = StdRng::seed_from_u64(99);

        let topic = resample_token(&mut state, 0, 2, 0, 0.1, 0.01, &mut rng).unwrap();

        assert!(topic < 2);
        assert_eq!(state.assignments[0][2], topic);
        assert_eq!(state.word_topic.sum(), 3);
        assert_eq!(state.doc_topic.row(0).sum(), 3);
        for k in 0..2 {
            assert_eq!(state.topic_totals[k], state.word_topic.column(k).sum());
        }
    }

    #[test]
    fn degenerate_mass_is_reported() {
        // all-zero counts with zero priors force a zero total
        let state = CountState {
            word_topic: Array2::zeros((2, 2)),
            doc_topic: Array2::zeros((1, 2)),
            topic_totals: ndarray::Array1::zeros(2),
            assignments: vec![vec![]],
        };
        let err = conditional(&state, 0, 0, 0.0, 0.0).unwrap_err();
        match err {
            LdaError::DegenerateDistribution(_) => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
