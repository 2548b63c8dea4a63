//  Copyright (c) 2020 Christopher Taylor
//
//  Distributed under the Boost Software License, Version 1.0. (See accompanying
//  file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//
// This crate implements LDA w/Collapsed Gibbs Sampling by:
//
//     D. Newman, A. Asuncion, P. Smyth, M. Welling. "Distributed Algorithms for Topic Models." JMLR 2009.
//
// https://www.ics.uci.edu/~asuncion/software/fast.htm
//

//! Latent Dirichlet Allocation with collapsed Gibbs sampling.
//!
//! The sampler consumes documents as sequences of integer word-ids over a
//! fixed vocabulary, maintains word-topic and document-topic count tables,
//! and resamples every token's topic assignment for a configured number of
//! full sweeps. Final counts are smoothed into the topic-term distribution
//! `phi` and the document-topic distribution `theta`.
//!
//! ```
//! use gibbs_lda::{Corpus, Lda, LdaConfig};
//!
//! let mut corpus = Corpus::new();
//! corpus.load("penguins waddle on the ice");
//! corpus.load("markets rallied after the report");
//!
//! let config = LdaConfig::new(2).alpha(1.0).eta(0.01).iterations(100).seed(42);
//! let fitted = Lda::new(config)
//!     .unwrap()
//!     .fit(&corpus.documents, corpus.vocab_size())
//!     .unwrap();
//!
//! let theta = fitted.theta().unwrap();
//! assert_eq!(theta.nrows(), 2);
//! ```
//!
//! Inference is deterministic: the same corpus, configuration, and seed
//! reproduce byte-identical counts and assignments.

pub mod corpus;
pub mod error;
pub mod estimate;
pub mod model;
pub mod sampler;
pub mod state;

pub use corpus::{Corpus, Tokenizer, Vocabulary};
pub use error::LdaError;
pub use estimate::{assign_topic, compute_phi, compute_theta, top_n_terms};
pub use model::{FittedLda, Lda, LdaConfig};
pub use state::CountState;
