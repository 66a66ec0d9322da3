use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::usage::UsageCounter;
use crate::db::models::ExamQuestion;

/// Questions chosen for one ticket. Rejects a second entry with the same id.
#[derive(Debug, Default)]
pub(crate) struct Selection<'a> {
    questions: Vec<&'a ExamQuestion>,
    ids: HashSet<i64>,
}

impl<'a> Selection<'a> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { questions: Vec::with_capacity(capacity), ids: HashSet::with_capacity(capacity) }
    }

    pub(crate) fn push(&mut self, question: &'a ExamQuestion) -> bool {
        if !self.ids.insert(question.id) {
            return false;
        }
        self.questions.push(question);
        true
    }

    pub(crate) fn extend(&mut self, questions: impl IntoIterator<Item = &'a ExamQuestion>) {
        for question in questions {
            self.push(question);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.questions.len()
    }

    pub(crate) fn contains(&self, question: &ExamQuestion) -> bool {
        self.ids.contains(&question.id)
    }

    pub(crate) fn into_shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Vec<&'a ExamQuestion> {
        self.questions.shuffle(rng);
        self.questions
    }
}

pub(crate) fn pick_random<'a, R: Rng + ?Sized>(
    questions: &[&'a ExamQuestion],
    rng: &mut R,
) -> Option<&'a ExamQuestion> {
    questions.choose(rng).copied()
}

pub(crate) fn pick_random_sections<'s, R: Rng + ?Sized>(
    sections: &[&'s str],
    count: usize,
    rng: &mut R,
) -> Vec<&'s str> {
    let mut picked = sections.to_vec();
    if count >= picked.len() {
        return picked;
    }
    picked.shuffle(rng);
    picked.truncate(count);
    picked
}

/// Questions of `pool` not yet in `selection`, each id at most once, in pool order.
fn candidates<'a>(pool: &'a [ExamQuestion], selection: &Selection<'_>) -> Vec<&'a ExamQuestion> {
    let mut seen = HashSet::with_capacity(pool.len());
    pool.iter()
        .filter(|question| !selection.contains(question) && seen.insert(question.id))
        .collect()
}

pub(crate) fn pick_random_excluding<'a, R: Rng + ?Sized>(
    pool: &'a [ExamQuestion],
    count: usize,
    selection: &Selection<'_>,
    rng: &mut R,
) -> Vec<&'a ExamQuestion> {
    let mut available = candidates(pool, selection);
    available.shuffle(rng);
    available.truncate(count);
    available
}

pub(crate) fn least_used<'a>(
    questions: &[&'a ExamQuestion],
    usage: &UsageCounter,
) -> Option<&'a ExamQuestion> {
    questions.iter().copied().min_by_key(|question| usage.count(question))
}

/// Up to `count` not yet selected questions with the lowest usage, ties in pool order.
pub(crate) fn least_used_excluding<'a>(
    pool: &'a [ExamQuestion],
    count: usize,
    selection: &Selection<'_>,
    usage: &UsageCounter,
) -> Vec<&'a ExamQuestion> {
    let mut available = candidates(pool, selection);
    available.sort_by_key(|question| usage.count(question));
    available.truncate(count);
    available
}
