//! Deterministic item generation from an RNG seed.
//!
//! The same seed and count always produce identical output, which lets a
//! seeding run be reproduced exactly from the seed it logged.

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StreetName};
use fake::faker::internet::raw::SafeEmail;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::FirstName;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

use crate::catalog::{ADJECTIVES, MATERIALS, PRODUCTS};
use crate::error::GenerationError;
use crate::seed::ExampleItemSeed;

/// Number of items a seeding run inserts when no count is given.
pub const DEFAULT_ITEM_COUNT: usize = 100;

/// Largest number of items a single generation call produces.
pub const MAX_ITEM_COUNT: usize = 10_000;

/// Word range for generated descriptions.
const DESCRIPTION_WORDS: std::ops::Range<usize> = 4..12;

/// Generates `count` example items from `seed`.
///
/// Every item has a distinct random UUID and non-empty values for the
/// listing's mandatory fields (title, location, phone number, user name and
/// user id), plus a description and city.
///
/// # Errors
///
/// Returns [`GenerationError::CountOutOfRange`] when `count` is zero or
/// exceeds [`MAX_ITEM_COUNT`].
///
/// # Example
///
/// ```
/// use example_items::generate_example_items;
///
/// let items = generate_example_items(7, 5).expect("generated");
/// assert!(items.iter().all(|item| !item.title.is_empty()));
/// ```
pub fn generate_example_items(
    seed: u64,
    count: usize,
) -> Result<Vec<ExampleItemSeed>, GenerationError> {
    if count == 0 || count > MAX_ITEM_COUNT {
        return Err(GenerationError::CountOutOfRange {
            requested: count,
            max: MAX_ITEM_COUNT,
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..count).map(|_| generate_single_item(&mut rng)).collect())
}

/// Draws a fresh seed from the thread-local RNG.
///
/// Callers log the returned value so a run can be replayed later.
#[must_use]
pub fn random_seed() -> u64 {
    rand::random()
}

fn generate_single_item(rng: &mut ChaCha8Rng) -> ExampleItemSeed {
    let id = generate_id(rng);
    let title = generate_title(rng);
    let description: String = Sentence(EN, DESCRIPTION_WORDS).fake_with_rng(rng);
    let building: String = BuildingNumber(EN).fake_with_rng(rng);
    let street: String = StreetName(EN).fake_with_rng(rng);
    let city: String = CityName(EN).fake_with_rng(rng);
    let phone_number: String = PhoneNumber(EN).fake_with_rng(rng);
    let user_name: String = FirstName(EN).fake_with_rng(rng);
    let user_id: String = SafeEmail(EN).fake_with_rng(rng);

    ExampleItemSeed {
        id,
        title,
        description,
        location: format!("{building} {street}"),
        city,
        phone_number,
        user_name,
        user_id,
    }
}

/// Builds a version 4 UUID from RNG bytes so ids follow the seed.
fn generate_id(rng: &mut ChaCha8Rng) -> Uuid {
    let bytes: [u8; 16] = rng.random();
    Builder::from_random_bytes(bytes).into_uuid()
}

/// Composes a title such as "Rustic Oak Lamp".
fn generate_title(rng: &mut ChaCha8Rng) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Classic");
    let material = MATERIALS.choose(rng).copied().unwrap_or("Wooden");
    let product = PRODUCTS.choose(rng).copied().unwrap_or("Item");
    format!("{adjective} {material} {product}")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1)]
    #[case(10)]
    #[case(DEFAULT_ITEM_COUNT)]
    fn generates_requested_count(#[case] count: usize) {
        let items = generate_example_items(42, count).expect("generation should succeed");
        assert_eq!(items.len(), count);
    }

    #[rstest]
    #[case(0)]
    #[case(MAX_ITEM_COUNT + 1)]
    fn rejects_out_of_range_counts(#[case] count: usize) {
        let result = generate_example_items(42, count);
        assert_eq!(
            result,
            Err(GenerationError::CountOutOfRange {
                requested: count,
                max: MAX_ITEM_COUNT,
            })
        );
    }

    #[test]
    fn same_seed_produces_identical_items() {
        let first = generate_example_items(123, 20).expect("generated");
        let second = generate_example_items(123, 20).expect("generated");
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_produce_different_items() {
        let first = generate_example_items(1, 5).expect("generated");
        let second = generate_example_items(2, 5).expect("generated");
        assert_ne!(first, second);
    }

    #[test]
    fn ids_are_unique_version_four_uuids() {
        let items = generate_example_items(99, DEFAULT_ITEM_COUNT).expect("generated");
        let ids: HashSet<Uuid> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), items.len());
        assert!(items.iter().all(|item| item.id.get_version_num() == 4));
    }

    #[test]
    fn mandatory_fields_are_never_blank() {
        let items = generate_example_items(7, DEFAULT_ITEM_COUNT).expect("generated");
        for item in &items {
            for value in [
                &item.title,
                &item.location,
                &item.phone_number,
                &item.user_name,
                &item.user_id,
            ] {
                assert!(!value.trim().is_empty(), "blank field in {item:?}");
            }
        }
    }

    #[test]
    fn titles_use_catalog_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let title = generate_title(&mut rng);
        let words: Vec<&str> = title.split(' ').collect();
        assert_eq!(words.len(), 3);
        assert!(ADJECTIVES.contains(&words[0]));
        assert!(MATERIALS.contains(&words[1]));
        assert!(PRODUCTS.contains(&words[2]));
    }

    #[test]
    fn user_ids_look_like_emails() {
        let items = generate_example_items(11, 10).expect("generated");
        assert!(items.iter().all(|item| item.user_id.contains('@')));
    }
}
