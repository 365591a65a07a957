//! PPRF-level scheme-independent testing.
use blstrs::G1Projective;
use btd::pprf::{small_batch_sizes, Crs};
use btd::suite;
use group::Group;
use rand::thread_rng;

#[test]
fn pprf_consistency_across_batch_sizes() {
    for &b in small_batch_sizes() {
        pprf_consistency(b);
    }
}

#[test]
fn sum_keys_additive_in_eval_across_batch_sizes() {
    for &b in small_batch_sizes() {
        sum_keys_additive_in_eval(b);
    }
}

/// For every key `k` and every pair of distinct slots `(pi, i)`, the punctured evaluation
/// `PEval(Puncture(k, pi), pi, i)` must equal the direct evaluation `Eval(k, i)`.
fn pprf_consistency(b: usize) {
    let mut rng = thread_rng();
    let crs = Crs::setup(b, &mut rng);
    let k = crs.key_gen(&mut rng);

    for pi in 0..b {
        let kp = crs.puncture(&k, pi).unwrap();
        for i in 0..b {
            if i == pi {
                continue;
            }
            assert_eq!(crs.eval(&k, i).unwrap(), crs.p_eval(&kp, pi, i).unwrap());
        }
    }
}

/// `ExpEval` reconstructs `Eval(k, i)` from a public commitment to `k` alone, and `SumKeys` is
/// additive through `Eval`.
fn sum_keys_additive_in_eval(b: usize) {
    let mut rng = thread_rng();
    let crs = Crs::setup(b, &mut rng);

    let keys: Vec<_> = (0..4).map(|_| crs.key_gen(&mut rng)).collect();
    let commitments: Vec<_> = keys.iter().map(|k| suite::g1_base() * k).collect();
    let k_sum = Crs::sum_keys(&keys);
    let commitment_sum = commitments
        .iter()
        .fold(G1Projective::identity(), |acc, c| acc + c);

    for i in 0..b {
        let via_sum = crs.eval(&k_sum, i).unwrap();
        let via_exp_eval = crs.exp_eval(&commitment_sum, i).unwrap();
        assert_eq!(via_sum, via_exp_eval);
    }
}
