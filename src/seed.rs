//! File-backed seed cache for reproducible randomness.
//!
//! Randomized collaborators (the Monte Carlo rehearsal, the solver's own
//! sampling) want a 64-bit seed that stays stable across invocations. The
//! cache persists a two-line record of `(requested value, resolved seed)`:
//! re-requesting the same value returns the previously resolved seed, while a
//! different request, a missing file, or a garbled file regenerates the
//! record. Only the write path can fail; every read problem uniformly means
//! "no cached seed available".

use std::fs;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// What the caller asked the cache for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedRequest {
    /// Use this exact seed value.
    Fixed(u64),
    /// Draw 64 random bits (and cache them).
    Random,
}

impl SeedRequest {
    /// Interpret a raw integer argument: non-negative values request that
    /// exact seed, negative values request a random one.
    pub fn from_raw(raw: i64) -> Self {
        if raw >= 0 {
            SeedRequest::Fixed(raw as u64)
        } else {
            SeedRequest::Random
        }
    }

    /// Discriminator stored on the first line of the cache file.
    fn discriminant(self) -> i64 {
        match self {
            SeedRequest::Fixed(value) => value as i64,
            SeedRequest::Random => -1,
        }
    }
}

/// Error from the seed cache.
///
/// Read-side problems never surface here; only a failure to persist the
/// freshly resolved record does.
#[derive(Debug)]
pub enum SeedError {
    /// Writing the cache file failed.
    Io(std::io::Error),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to persist seed cache: {err}"),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Resolve a seed request against the cache at `path`.
///
/// If the file holds a record for the same request, its seed is returned
/// unchanged. Otherwise the request is resolved (fixed value, or fresh random
/// bits), the record is rewritten, and the new seed returned.
pub fn load_or_create(request: SeedRequest, path: &Path) -> Result<u64, SeedError> {
    if let Some(seed) = read_cached(request, path) {
        return Ok(seed);
    }

    let seed = match request {
        SeedRequest::Fixed(value) => value,
        SeedRequest::Random => rand::rng().random(),
    };

    fs::write(path, format!("{}\n{}\n", request.discriminant(), seed))?;
    Ok(seed)
}

/// Deterministic RNG for a resolved seed.
pub fn rng_from_seed(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

fn read_cached(request: SeedRequest, path: &Path) -> Option<u64> {
    let text = fs::read_to_string(path).ok()?;
    let mut lines = text.lines();
    let stored: i64 = lines.next()?.trim().parse().ok()?;
    let seed: u64 = lines.next()?.trim().parse().ok()?;
    (stored == request.discriminant()).then_some(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fixed_request_resolves_to_itself() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed");
        let seed = load_or_create(SeedRequest::Fixed(42), &path).unwrap();
        assert_eq!(seed, 42);
    }

    #[test]
    fn garbled_file_regenerates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed");
        fs::write(&path, "not a number\nalso not\n").unwrap();
        let seed = load_or_create(SeedRequest::Fixed(7), &path).unwrap();
        assert_eq!(seed, 7);
        // and the record is now well-formed
        assert_eq!(load_or_create(SeedRequest::Fixed(7), &path).unwrap(), 7);
    }

    #[test]
    fn truncated_file_regenerates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seed");
        fs::write(&path, "13\n").unwrap();
        assert_eq!(load_or_create(SeedRequest::Fixed(13), &path).unwrap(), 13);
    }

    #[test]
    fn negative_raw_value_is_random_request() {
        assert_eq!(SeedRequest::from_raw(-1), SeedRequest::Random);
        assert_eq!(SeedRequest::from_raw(-1000), SeedRequest::Random);
        assert_eq!(SeedRequest::from_raw(0), SeedRequest::Fixed(0));
        assert_eq!(SeedRequest::from_raw(5), SeedRequest::Fixed(5));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;
        let mut a = rng_from_seed(0xfeed);
        let mut b = rng_from_seed(0xfeed);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
