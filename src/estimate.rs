//  Copyright (c) 2020 Christopher Taylor
//
//  Distributed under the Boost Software License, Version 1.0. (See accompanying
//  file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//
use ndarray::Array2;
use ndarray_stats::QuantileExt;

use crate::error::LdaError;

/// Smoothed topic-over-vocabulary distribution, K x W.
///
/// Row `k` is `(word_topic[:, k] + eta) / (topic_total[k] + W * eta)` and
/// sums to 1. Pure function of the counts: repeated calls on unchanged
/// input return identical matrices.
pub fn compute_phi(word_topic: &Array2<usize>, eta: f64) -> Result<Array2<f64>, LdaError> {
    let (vocab_size, n_topics) = word_topic.dim();
    let mut phi = Array2::zeros((n_topics, vocab_size));
    for k in 0..n_topics {
        let denom = word_topic.column(k).sum() as f64 + vocab_size as f64 * eta;
        if denom <= 0.0 {
            return Err(LdaError::DegenerateDistribution(denom));
        }
        for w in 0..vocab_size {
            phi[[k, w]] = (word_topic[[w, k]] as f64 + eta) / denom;
        }
    }
    Ok(phi)
}

/// Smoothed document-over-topics distribution, D x K.
///
/// Row `d` is `(doc_topic[d, :] + alpha) / (N_d + K * alpha)` and sums
/// to 1. A zero-length document has an all-zero count row and comes out
/// as the uniform `1/K` prior.
pub fn compute_theta(doc_topic: &Array2<usize>, alpha: f64) -> Result<Array2<f64>, LdaError> {
    let (num_docs, n_topics) = doc_topic.dim();
    let mut theta = Array2::zeros((num_docs, n_topics));
    for d in 0..num_docs {
        let denom = doc_topic.row(d).sum() as f64 + n_topics as f64 * alpha;
        if denom <= 0.0 {
            return Err(LdaError::DegenerateDistribution(denom));
        }
        for k in 0..n_topics {
            theta[[d, k]] = (doc_topic[[d, k]] as f64 + alpha) / denom;
        }
    }
    Ok(theta)
}

/// For each topic, the `n` highest-probability vocabulary ids with their
/// probabilities, descending. Exact ties rank the lower vocabulary id
/// first, so reported terms are reproducible.
pub fn top_n_terms(phi: &Array2<f64>, n: usize) -> Vec<Vec<(usize, f64)>> {
    let mut topics = Vec::with_capacity(phi.nrows());
    for k in 0..phi.nrows() {
        let mut ranked: Vec<(usize, f64)> = phi.row(k).iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap().then(a.0.cmp(&b.0)));
        ranked.truncate(n);
        topics.push(ranked);
    }
    topics
}

/// Most probable topic of each document. Ties resolve to the lowest topic
/// id, the first maximum in the row.
pub fn assign_topic(theta: &Array2<f64>) -> Result<Vec<usize>, LdaError> {
    let mut assigned = Vec::with_capacity(theta.nrows());
    for d in 0..theta.nrows() {
        let topic = theta
            .row(d)
            .argmax()
            .map_err(|_| LdaError::DegenerateDistribution(f64::NAN))?;
        assigned.push(topic);
    }
    Ok(assigned)
}
