//! Caching behavior of the seed collaborator.

use roshambo::seed::{load_or_create, SeedRequest};
use tempfile::TempDir;

#[test]
fn same_request_returns_same_seed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seed");

    let first = load_or_create(SeedRequest::Fixed(1234), &path).unwrap();
    let second = load_or_create(SeedRequest::Fixed(1234), &path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn changed_request_invalidates_cache() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seed");

    let first = load_or_create(SeedRequest::Fixed(1), &path).unwrap();
    let second = load_or_create(SeedRequest::Fixed(2), &path).unwrap();
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    // the new record replaced the old one
    let third = load_or_create(SeedRequest::Fixed(2), &path).unwrap();
    assert_eq!(third, 2);
}

#[test]
fn random_request_is_cached_until_invalidated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seed");

    let first = load_or_create(SeedRequest::Random, &path).unwrap();
    let second = load_or_create(SeedRequest::Random, &path).unwrap();
    assert_eq!(first, second, "random seed must be served from the cache");

    // a fixed request overwrites the random record; asking for random again
    // draws fresh bits rather than resurrecting the old ones
    let fixed = load_or_create(SeedRequest::Fixed(9), &path).unwrap();
    assert_eq!(fixed, 9);
    let reseeded = load_or_create(SeedRequest::Random, &path).unwrap();
    let cached_again = load_or_create(SeedRequest::Random, &path).unwrap();
    assert_eq!(reseeded, cached_again);
}

#[test]
fn missing_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never-written-before");
    let seed = load_or_create(SeedRequest::Fixed(77), &path).unwrap();
    assert_eq!(seed, 77);
}
