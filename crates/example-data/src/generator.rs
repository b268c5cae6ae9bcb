//! Deterministic resident generation.
//!
//! Residents are derived from a ChaCha RNG seeded with a caller-supplied
//! value, so the same seed always yields the same people. Levels are derived
//! from points using the 200-point bands the backend uses for progression.

use chrono::{DateTime, TimeDelta, Utc};
use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::seed::UserSeed;
use crate::validation::{NAME_MAX, email_for, is_presentable_name, normalise_name};

/// Maximum number of attempts to generate a presentable name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Points spanned by one level.
pub const POINTS_PER_LEVEL: u32 = 200;

/// Upper bound for generated point totals.
const MAX_GENERATED_POINTS: u32 = 3_000;

/// Days since the Unix epoch for 2024-01-01, the earliest generated join date.
const JOIN_WINDOW_START_DAY: i64 = 19_723;

/// Width of the join-date window in days.
const JOIN_WINDOW_DAYS: i64 = 365;

/// Probability numerator for generating a plain resident (80%).
const RESIDENT_NUMERATOR: u32 = 4;

/// Probability denominator for role selection.
const RESIDENT_DENOMINATOR: u32 = 5;

/// Roles assigned to the remaining generated members.
const ORGANISATION_ROLES: [&str; 3] = ["ngo", "company", "government"];

/// Generates `count` residents with numeric ids starting at `first_id`.
///
/// # Errors
///
/// Returns [`GenerationError::DisplayNameGenerationFailed`] if no
/// presentable name is produced within the retry budget.
///
/// # Example
///
/// ```
/// use example_data::generate_residents;
///
/// let first = generate_residents(42, 3, 10).expect("generated");
/// let second = generate_residents(42, 3, 10).expect("generated");
/// assert_eq!(first, second);
/// assert_eq!(first[0].id, "10");
/// ```
pub fn generate_residents(
    seed: u64,
    count: usize,
    first_id: u64,
) -> Result<Vec<UserSeed>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut residents = Vec::with_capacity(count);

    for id in (first_id..).take(count) {
        residents.push(generate_single_resident(&mut rng, id)?);
    }

    Ok(residents)
}

fn generate_single_resident(rng: &mut ChaCha8Rng, id: u64) -> Result<UserSeed, GenerationError> {
    let name = generate_name(rng)?;
    let points = rng.random_range(0..=MAX_GENERATED_POINTS);
    let role = if rng.random_ratio(RESIDENT_NUMERATOR, RESIDENT_DENOMINATOR) {
        "resident"
    } else {
        ORGANISATION_ROLES[rng.random_range(0..ORGANISATION_ROLES.len())]
    };
    let join_day = JOIN_WINDOW_START_DAY + rng.random_range(0..JOIN_WINDOW_DAYS);

    Ok(UserSeed {
        id: id.to_string(),
        email: email_for(&name),
        name,
        avatar: None,
        bio: None,
        level: points / POINTS_PER_LEVEL,
        points,
        badge_ids: Vec::new(),
        joined_at: DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(join_day),
        role: role.to_owned(),
    })
}

fn generate_name(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let candidate = normalise_name(&format!("{first} {last}"));

        if candidate.chars().count() <= NAME_MAX && is_presentable_name(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::DisplayNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}
