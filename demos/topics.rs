//  Copyright (c) 2020 Christopher Taylor
//
//  Distributed under the Boost Software License, Version 1.0. (See accompanying
//  file LICENSE_1_0.txt or copy at http://www.boost.org/LICENSE_1_0.txt)
//
use std::{env, fs};

use gibbs_lda::{Corpus, Lda, LdaConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let directory = args.get(1).expect("usage: topics <directory>");

    println!("loading documents from {}", directory);
    let mut corpus = Corpus::new();
    let mut entries: Vec<_> = fs::read_dir(directory)
        .expect("read directory")
        .map(|entry| entry.expect("read directory entry").path())
        .filter(|path| path.is_file())
        .collect();
    entries.sort();
    for path in &entries {
        let text = fs::read_to_string(path).expect("read file");
        corpus.load(&text);
    }

    println!(
        "{} documents, vocabulary of {} words",
        corpus.num_documents(),
        corpus.vocab_size()
    );

    let config = LdaConfig::new(4)
        .alpha(0.2)
        .eta(0.1)
        .iterations(2000)
        .seed(2020);

    println!("running the sampler");
    let fitted = Lda::new(config)
        .expect("valid configuration")
        .fit(&corpus.documents, corpus.vocab_size())
        .expect("inference failed");

    println!("topics!");
    for (k, terms) in fitted.top_terms(10).expect("estimate phi").iter().enumerate() {
        print!("topic {}:", k);
        for &(id, prob) in terms {
            print!(" {} ({:.3})", corpus.vocabulary.term(id).unwrap_or("?"), prob);
        }
        println!();
    }

    let dominant = fitted.dominant_topics().expect("estimate theta");
    for (d, topic) in dominant.iter().enumerate() {
        println!("document {} -> topic {}", d, topic);
    }
}
