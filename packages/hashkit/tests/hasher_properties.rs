//! Property tests: determinism, digest length, sensitivity, isolation

use hashkit::{HashError, Hasher, HasherType};
use proptest::prelude::*;
use std::thread;

fn any_hasher_type() -> impl Strategy<Value = HasherType> {
    prop::sample::select(HasherType::ALL.to_vec())
}

proptest! {
    #[test]
    fn hashing_is_deterministic(t in any_hasher_type(), data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let first = Hasher::new(t).hash(&data).unwrap();
        let second = Hasher::new(t).hash(&data).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn digest_length_is_fixed(t in any_hasher_type(), data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let digest = Hasher::new(t).hash(&data).unwrap();
        prop_assert_eq!(digest.len(), t.digest_len());
        prop_assert_eq!(digest.hasher_type(), t);
    }

    #[test]
    fn single_bit_flip_changes_digest(
        t in any_hasher_type(),
        data in prop::collection::vec(any::<u8>(), 1..512),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let hasher = Hasher::new(t);
        let mut flipped = data.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= 1 << bit;
        prop_assert_ne!(hasher.hash(&data).unwrap(), hasher.hash(&flipped).unwrap());
    }

    #[test]
    fn hash_into_matches_hash(t in any_hasher_type(), data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let hasher = Hasher::new(t);
        let mut dst = [0u8; 64];
        let written = hasher.hash_into(&mut dst, &data).unwrap();
        prop_assert_eq!(written, t.digest_len());
        let expected = hasher.hash(&data).unwrap();
        prop_assert_eq!(&dst[..written], expected.as_bytes());
    }

    #[test]
    fn unknown_codes_are_rejected(code in 11u32..) {
        prop_assert!(matches!(Hasher::from_code(code), Err(HashError::UnsupportedAlgorithm(_))));
    }
}

#[test]
fn empty_input_succeeds_for_every_algorithm() {
    for t in HasherType::ALL {
        let digest = Hasher::new(t).hash(&[]).expect("empty input must hash");
        assert_eq!(digest.len(), t.digest_len(), "{t}");
    }
}

#[test]
fn reuse_does_not_leak_state() {
    for t in HasherType::ALL {
        let reused = Hasher::new(t);
        let _ = reused.hash(b"first input").expect("hash");
        let after = reused.hash(b"second input").expect("hash");
        let fresh = Hasher::new(t).hash(b"second input").expect("hash");
        assert_eq!(after, fresh, "{t}");
    }
}

#[test]
fn concurrent_instances_are_independent() {
    let inputs: Vec<Vec<u8>> = (0..16u8).map(|i| vec![i; 1000 + usize::from(i)]).collect();

    for t in HasherType::ALL {
        let expected: Vec<_> = inputs
            .iter()
            .map(|input| Hasher::new(t).hash(input).expect("hash"))
            .collect();

        let shared = Hasher::new(t);
        thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .enumerate()
                .map(|(i, input)| {
                    let own = Hasher::new(t);
                    let shared = &shared;
                    s.spawn(move || {
                        let digest = if i % 2 == 0 {
                            own.hash(input)
                        } else {
                            shared.hash(input)
                        };
                        (i, digest.expect("hash"))
                    })
                })
                .collect();

            for handle in handles {
                let (i, digest) = handle.join().expect("hashing thread panicked");
                assert_eq!(digest, expected[i], "{t} input {i}");
            }
        });
    }
}

#[test]
fn large_input_is_processed_in_full() {
    let big = vec![0xa5u8; 3 * 1024 * 1024 + 17];
    let hasher = Hasher::new(HasherType::Sha512);
    let whole = hasher.hash(&big).expect("hash");
    let truncated = hasher.hash(&big[..big.len() - 1]).expect("hash");
    assert_ne!(whole, truncated);
}
