//  Copyright (c) 2020 Christopher Taylor
//
//  Distributed under the Boost Software License, Version 1.0. (See accompanying
//  file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//
use std::collections::HashMap;

use regex::Regex;

/// Bijection between distinct words and integer ids `0..W`.
///
/// Ids are assigned in first-seen order, so loading the same texts in the
/// same order always produces the same mapping.
#[derive(Debug, Default)]
pub struct Vocabulary {
    indices: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words, i.e. the vocabulary size `W`.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the id for `word`, assigning a fresh one if unseen.
    pub fn intern(&mut self, word: &str) -> usize {
        if let Some(&id) = self.indices.get(word) {
            return id;
        }
        let id = self.terms.len();
        self.indices.insert(word.to_string(), id);
        self.terms.push(word.to_string());
        id
    }

    pub fn id(&self, word: &str) -> Option<usize> {
        self.indices.get(word).copied()
    }

    pub fn term(&self, id: usize) -> Option<&str> {
        self.terms.get(id).map(String::as_str)
    }
}

/// Splits raw text into lowercased word tokens.
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        // Unicode letters plus combining marks.
        Tokenizer {
            pattern: Regex::new("[\\p{L}\\p{M}]+").unwrap(),
        }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

/// Accumulates raw texts into integer word-id sequences over a shared
/// vocabulary, the input format the sampler consumes.
#[derive(Default)]
pub struct Corpus {
    pub vocabulary: Vocabulary,
    pub documents: Vec<Vec<usize>>,
    tokenizer: Tokenizer,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `text` and appends it as the next document.
    pub fn load(&mut self, text: &str) {
        let doc = self
            .tokenizer
            .tokenize(text)
            .iter()
            .map(|word| self.vocabulary.intern(word))
            .collect();
        self.documents.push(doc);
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_lowercases_and_splits_on_non_letters() {
        let tok = Tokenizer::new();
        let tokens = tok.tokenize("Hello, world! HELLO 42 re-run");
        assert_eq!(tokens, vec!["hello", "world", "hello", "re", "run"]);
    }

    #[test]
    fn vocabulary_is_a_bijection() {
        let mut vocab = Vocabulary::new();
        let a = vocab.intern("alpha");
        let b = vocab.intern("beta");
        let a2 = vocab.intern("alpha");

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.id("beta"), Some(b));
        assert_eq!(vocab.term(a), Some("alpha"));
        assert_eq!(vocab.term(99), None);
    }

    #[test]
    fn corpus_ids_stay_in_bounds() {
        let mut corpus = Corpus::new();
        corpus.load("the cat sat");
        corpus.load("the dog ran");

        assert_eq!(corpus.num_documents(), 2);
        let w = corpus.vocab_size();
        assert_eq!(w, 5); // "the" interned once
        for doc in &corpus.documents {
            for &id in doc {
                assert!(id < w);
            }
        }
        // same word, same id, across documents
        assert_eq!(corpus.documents[0][0], corpus.documents[1][0]);
    }
}
