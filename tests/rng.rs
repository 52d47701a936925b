use xorshare::rng::{OsRandom, RandomSource};

#[test]
fn os_random_not_all_zero() {
    let mut rng = OsRandom::new();

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out).unwrap();

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn os_random_changes_between_calls() {
    let mut rng = OsRandom;

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a).unwrap();
    rng.fill_bytes(&mut b).unwrap();

    assert_ne!(a, b);
}

#[test]
fn os_random_accepts_empty_buffer() {
    let mut rng = OsRandom;

    rng.fill_bytes(&mut []).unwrap();
}

#[test]
fn source_usable_through_mutable_reference() {
    fn draw<R: RandomSource>(mut rng: R) -> [u8; 32] {
        let mut out = [0u8; 32];
        rng.fill_bytes(&mut out).unwrap();
        out
    }

    let mut rng = OsRandom;
    let out = draw(&mut rng);

    assert!(out.iter().any(|&b| b != 0));
}
