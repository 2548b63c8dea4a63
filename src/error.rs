//  Copyright (c) 2020 Christopher Taylor
//
//  Distributed under the Boost Software License, Version 1.0. (See accompanying
//  file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//
use thiserror::Error;

/// Errors that can occur while configuring or running the sampler.
///
/// Inference is a one-shot computation; none of these are retryable.
/// The fix is always to correct the configuration or input and rerun.
#[derive(Error, Debug)]
pub enum LdaError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("corpus is empty or contains no tokens")]
    EmptyCorpus,

    #[error("word id {word_id} outside vocabulary of size {vocab_size}")]
    VocabMismatch { word_id: usize, vocab_size: usize },

    /// A normalization denominator or total probability mass was not
    /// strictly positive. Unreachable for `alpha, eta > 0`, but checked
    /// rather than silently producing NaN probabilities.
    #[error("degenerate distribution: probability mass {0} is not positive")]
    DegenerateDistribution(f64),
}
