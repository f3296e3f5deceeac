//! Randomization of a question pool for one session.
//!
//! Question order and each question's option order are shuffled
//! independently with Fisher–Yates (`SliceRandom::shuffle`), so every
//! permutation of length `n` is reachable with probability `1/n!` under a
//! fair RNG. The input pool is never mutated.

use crate::model::{Question, SessionQuestion};
use rand::Rng;
use rand::seq::SliceRandom;

/// Deals a pool into session questions: shuffled question order, and per
/// question a shuffled option order with the correct index remapped.
pub fn randomize_pool<R: Rng>(pool: &[Question], rng: &mut R) -> Vec<SessionQuestion> {
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.shuffle(rng);
    order
        .into_iter()
        .map(|i| randomize_question(&pool[i], rng))
        .collect()
}

/// Shuffles one question's options and finds the correct answer's new
/// position within the permutation.
pub fn randomize_question<R: Rng>(question: &Question, rng: &mut R) -> SessionQuestion {
    let mut permutation: Vec<usize> = (0..question.options.len()).collect();
    permutation.shuffle(rng);

    let shuffled_options = permutation
        .iter()
        .map(|&i| question.options[i].clone())
        .collect();
    let correct_answer_index = permutation
        .iter()
        .position(|&i| i == question.correct_answer_index)
        .expect("permutation covers every option index");

    SessionQuestion {
        question: question.question.clone(),
        options: question.options.clone(),
        shuffled_options,
        correct_answer_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn question(prompt: &str, options: &[&str], correct: usize) -> Question {
        Question {
            question: prompt.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer_index: correct,
        }
    }

    fn pool() -> Vec<Question> {
        vec![
            question("q1", &["a", "b", "c", "d"], 2),
            question("q2", &["yes", "no"], 0),
            question("q3", &["x", "y", "z"], 1),
        ]
    }

    #[test]
    fn keeps_every_question_and_permutes_options() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(7);
        let session = randomize_pool(&pool, &mut rng);

        assert_eq!(session.len(), pool.len());
        for sq in &session {
            let source = pool
                .iter()
                .find(|q| q.question == sq.question)
                .expect("question survives the shuffle");

            let mut got = sq.shuffled_options.clone();
            let mut want = source.options.clone();
            got.sort();
            want.sort();
            assert_eq!(got, want, "shuffled options are a permutation");

            assert!(sq.correct_answer_index < sq.shuffled_options.len());
            assert_eq!(
                sq.shuffled_options[sq.correct_answer_index],
                source.options[source.correct_answer_index],
                "reindexed correct answer still names the right option"
            );
        }
    }

    #[test]
    fn does_not_mutate_the_input_pool() {
        let pool = pool();
        let before = pool.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let _ = randomize_pool(&pool, &mut rng);
        assert_eq!(pool, before);
    }

    #[test]
    fn single_option_question_is_stable() {
        let q = question("only", &["sole"], 0);
        let mut rng = StdRng::seed_from_u64(3);
        let sq = randomize_question(&q, &mut rng);
        assert_eq!(sq.shuffled_options, vec!["sole"]);
        assert_eq!(sq.correct_answer_index, 0);
    }

    #[test]
    fn question_order_is_roughly_uniform() {
        // 3 questions -> 6 orderings. With 6000 deals each ordering should
        // land near 1000; a seeded RNG keeps this deterministic.
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<String, u32> = HashMap::new();

        for _ in 0..6000 {
            let session = randomize_pool(&pool, &mut rng);
            let key: Vec<&str> = session.iter().map(|q| q.question.as_str()).collect();
            *counts.entry(key.join(",")).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "every ordering is reachable");
        for (ordering, count) in counts {
            assert!(
                (800..=1200).contains(&count),
                "ordering {ordering} appeared {count} times"
            );
        }
    }

    #[test]
    fn option_order_is_roughly_uniform() {
        let q = question("q", &["a", "b", "c"], 0);
        let mut rng = StdRng::seed_from_u64(9);
        let mut counts: HashMap<Vec<String>, u32> = HashMap::new();

        for _ in 0..6000 {
            let sq = randomize_question(&q, &mut rng);
            *counts.entry(sq.shuffled_options).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..=1200).contains(count));
        }
    }
}
