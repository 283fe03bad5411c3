//! Random question selection for quiz play

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::db::models::Question;

/// Which questions a quiz round draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePool {
    /// Every question
    All,
    /// Questions of one category
    Category(i64),
}

impl CandidatePool {
    /// Category id 0 selects every question
    pub fn from_category_id(id: i64) -> Self {
        if id == 0 {
            CandidatePool::All
        } else {
            CandidatePool::Category(id)
        }
    }
}

/// Pick a question uniformly among the candidates not listed in `previous`
///
/// Returns `None` when the pool is empty or every candidate was already asked.
pub fn select_unseen<R>(candidates: Vec<Question>, previous: &[i64], rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !seen.contains(&q.id))
        .collect();

    unseen.choose(rng).cloned()
}
