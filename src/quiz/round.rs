use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::{check_size, Entry, QuizError, Round, OPTION_COUNT};

/// Picks the entry to show and the names to offer for it.
///
/// Algorithm:
/// 1. Choose the correct entry uniformly from `entries`
/// 2. Sample `OPTION_COUNT` distinct names without replacement
/// 3. If the correct name was not sampled, overwrite a random slot with it
///
/// The sample is drawn without replacement and the correct name is absent
/// from it whenever step 3 fires, so the options stay distinct.
pub fn generate_round<R: Rng + ?Sized>(entries: &[Entry], rng: &mut R) -> Result<Round, QuizError> {
    check_size(entries)?;

    let correct = entries
        .choose(rng)
        .ok_or(QuizError::InvalidCatalog)?
        .clone();

    let mut options = entries
        .choose_multiple(rng, OPTION_COUNT)
        .map(|e| e.name.clone())
        .collect::<Vec<_>>();

    if !options.contains(&correct.name) {
        let slot = rng.gen_range(0..options.len());
        debug!(
            "replacing option {:?} in slot {} with the answer {:?}",
            options[slot], slot, correct.name
        );
        options[slot] = correct.name.clone();
    }

    Ok(Round { correct, options })
}
