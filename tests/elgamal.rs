//! ElGamal scheme-independent testing: plain and `(t, n)`-threshold.
use blstrs::G1Projective;
use btd::elgamal;
use btd::elgamal::threshold::{combine, key_gen, p_dec};
use btd::threshold_config::ThresholdConfig;
use btd::BtdError;
use group::Group;
use rand::thread_rng;

#[test]
fn plain_elgamal_roundtrip_and_homomorphism() {
    let mut rng = thread_rng();
    let (sk, pk) = elgamal::key_gen(&mut rng);

    let m1 = G1Projective::generator() * btd::utils::random::random_scalar(&mut rng);
    let m2 = G1Projective::generator() * btd::utils::random::random_scalar(&mut rng);

    let (ct1, _u1) = elgamal::enc(&pk, &m1, &mut rng);
    let (ct2, _u2) = elgamal::enc(&pk, &m2, &mut rng);

    assert_eq!(elgamal::dec(&sk, &ct1), m1);
    assert_eq!(elgamal::dec(&sk, &ct2), m2);

    let sum = elgamal::add_ct(&ct1, &ct2);
    assert_eq!(elgamal::dec(&sk, &sum), m1 + m2);
}

#[test]
fn threshold_elgamal_roundtrip_for_a_range_of_configs() {
    for (t, n) in get_threshold_configs_for_testing() {
        threshold_roundtrip(t, n);
    }
}

#[test]
fn threshold_elgamal_rejects_short_share_sets() {
    let mut rng = thread_rng();
    let tc = ThresholdConfig::new(4, 9);
    let (sk_shares, pk) = key_gen(&tc, &mut rng);

    let m = G1Projective::generator() * btd::utils::random::random_scalar(&mut rng);
    let (ct, _u) = elgamal::enc(&pk, &m, &mut rng);

    let shares: Vec<_> = sk_shares[..3].iter().map(|s| p_dec(s, &ct)).collect();
    assert_eq!(
        combine(&tc, &ct, &shares).unwrap_err(),
        BtdError::ShareShortage { have: 3, need: 4 }
    );
}

fn threshold_roundtrip(t: usize, n: usize) {
    let mut rng = thread_rng();
    let tc = ThresholdConfig::new(t, n);
    let (sk_shares, pk) = key_gen(&tc, &mut rng);

    let m = G1Projective::generator() * btd::utils::random::random_scalar(&mut rng);
    let (ct, _u) = elgamal::enc(&pk, &m, &mut rng);

    let capable = tc.get_random_capable_subset(&mut rng);
    let shares: Vec<_> = capable
        .iter()
        .map(|p| p_dec(&sk_shares[p.get_id()], &ct))
        .collect();

    assert_eq!(combine(&tc, &ct, &shares).unwrap(), m);
}

fn get_threshold_configs_for_testing() -> Vec<(usize, usize)> {
    let mut scs = vec![];
    for t in [1, 2, 3, 4, 5, 6, 7, 8] {
        for n in t..3 * (t - 1) + 1 {
            scs.push((t, n));
        }
    }
    scs
}
