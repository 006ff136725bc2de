//! Quiz question selection.
//!
//! The random source is a parameter so callers can seed it; production
//! callers pass an OS-seeded `StdRng`.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::Question;
use crate::types::DbId;

/// Pick one question uniformly at random from `candidates`, skipping any id
/// in `previously_asked`.
///
/// Returns `None` when every candidate has already been asked.
pub fn select_quiz_question<'a, R: Rng + ?Sized>(
    candidates: &'a [Question],
    previously_asked: &HashSet<DbId>,
    rng: &mut R,
) -> Option<&'a Question> {
    let remaining: Vec<&Question> = candidates
        .iter()
        .filter(|q| !previously_asked.contains(&q.id))
        .collect();

    remaining.choose(rng).copied()
}
