//! Scenario tests for exact enumeration on the classic sprinkler network.
//!
//! Fixture values are recomputed by hand from the CPTs below; each test
//! states the closed-form arithmetic it checks against.

use bayenum::{
    ask, enumerate_all, enumeration_ask, joint_probability, probability_of, Assignment, Cpt,
    InferenceError, Network,
};

fn assert_close(actual: f64, expected: f64, tol: f64, label: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{} mismatch: expected {:.15}, got {:.15}, diff={:.3e}",
        label,
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Cloudy -> {Sprinkler, Rain} -> WetGrass, with the standard CPT values.
fn sprinkler_network() -> Network {
    Network::builder()
        .variable("Cloudy", &[], Cpt::prior(0.5))
        .variable("Sprinkler", &["Cloudy"], Cpt::from_rows([0.5, 0.1]))
        .variable("Rain", &["Cloudy"], Cpt::from_rows([0.2, 0.8]))
        .variable(
            "WetGrass",
            &["Sprinkler", "Rain"],
            Cpt::from_rows([0.0, 0.9, 0.9, 0.99]),
        )
        .build()
        .expect("valid network")
}

fn full_assignment(network: &Network, c: bool, s: bool, r: bool, w: bool) -> Assignment {
    Assignment::from_pairs(
        network,
        [("Cloudy", c), ("Sprinkler", s), ("Rain", r), ("WetGrass", w)],
    )
    .expect("known variables")
}

#[test]
fn joint_probability_matches_hand_computation() {
    let network = sprinkler_network();
    let assignment = full_assignment(&network, true, false, true, true);

    // P(C) * P(¬S|C) * P(R|C) * P(W|¬S,R) = 0.5 * 0.9 * 0.8 * 0.9
    let joint = joint_probability(&network, &assignment).expect("complete assignment");
    assert_close(joint, 0.5 * 0.9 * 0.8 * 0.9, 1e-12, "joint probability");
}

#[test]
fn joint_probabilities_sum_to_one_over_all_sixteen_assignments() {
    let network = sprinkler_network();

    let mut total = 0.0;
    for mask in 0..16u32 {
        let assignment = full_assignment(
            &network,
            mask & 1 != 0,
            mask & 2 != 0,
            mask & 4 != 0,
            mask & 8 != 0,
        );
        total += joint_probability(&network, &assignment).expect("complete assignment");
    }
    assert_close(total, 1.0, 1e-9, "sum of all joints");
}

#[test]
fn probability_of_true_and_false_complement_for_every_variable() {
    let network = sprinkler_network();

    for mask in 0..16u32 {
        let assignment = full_assignment(
            &network,
            mask & 1 != 0,
            mask & 2 != 0,
            mask & 4 != 0,
            mask & 8 != 0,
        );
        for &id in network.topological_order() {
            let p_true = probability_of(&network, id, true, &assignment).expect("complete");
            let p_false = probability_of(&network, id, false, &assignment).expect("complete");
            assert_close(p_true + p_false, 1.0, 1e-9, "true/false complement");
        }
    }
}

#[test]
fn rain_posterior_given_wet_grass() {
    let network = sprinkler_network();
    let dist = ask(&network, "Rain", &[("WetGrass", true)]).expect("query");

    // Unnormalized terms, enumerating (Cloudy, Sprinkler) for each Rain value:
    let p_rain_and_wet = 0.5 * 0.1 * 0.8 * 0.99 // C,  S
        + 0.5 * 0.9 * 0.8 * 0.9                 // C,  ¬S
        + 0.5 * 0.5 * 0.2 * 0.99                // ¬C, S
        + 0.5 * 0.5 * 0.2 * 0.9; //                ¬C, ¬S
    let p_no_rain_and_wet = 0.5 * 0.1 * 0.2 * 0.9 // C,  S
        + 0.5 * 0.5 * 0.8 * 0.9; //                  ¬C, S (the ¬S rows are 0.0)
    let expected = p_rain_and_wet / (p_rain_and_wet + p_no_rain_and_wet);

    assert_close(dist.p_true, expected, 1e-12, "P(Rain | WetGrass)");
    assert_close(dist.total(), 1.0, 1e-12, "posterior normalization");
    // Sanity anchor for the classic network: roughly 0.708.
    assert!(dist.p_true > 0.70 && dist.p_true < 0.72);
}

#[test]
fn rain_posterior_given_sprinkler_is_point_three() {
    let network = sprinkler_network();
    let dist = ask(&network, "Rain", &[("Sprinkler", true)]).expect("query");

    // P(R, S) = 0.5*0.1*0.8 + 0.5*0.5*0.2 = 0.09
    // P(¬R, S) = 0.5*0.1*0.2 + 0.5*0.5*0.8 = 0.21
    assert_close(dist.p_true, 0.09 / 0.30, 1e-12, "P(Rain | Sprinkler)");
}

#[test]
fn cloudy_prior_without_evidence_is_exactly_half() {
    let network = sprinkler_network();
    let dist = ask(&network, "Cloudy", &[]).expect("query");

    assert_eq!(dist.p_true, 0.5);
    assert_eq!(dist.p_false, 0.5);
}

#[test]
fn impossible_evidence_yields_the_zero_distribution() {
    let network = sprinkler_network();
    // WetGrass cannot be true when neither Sprinkler nor Rain is: that CPT
    // row is exactly 0.0.
    let dist = ask(
        &network,
        "Cloudy",
        &[("Sprinkler", false), ("Rain", false), ("WetGrass", true)],
    )
    .expect("query");

    assert!(dist.is_zero());
    assert_eq!(dist.p_true, 0.0);
    assert_eq!(dist.p_false, 0.0);
}

#[test]
fn marginal_consistency_between_joint_and_enumerate_all() {
    let network = sprinkler_network();
    // Hold Cloudy, Sprinkler, WetGrass fixed; summing the joint over Rain
    // must reproduce enumerate_all on the reduced evidence.
    let evidence = Assignment::from_pairs(
        &network,
        [("Cloudy", true), ("Sprinkler", false), ("WetGrass", true)],
    )
    .expect("known variables");

    let summed = joint_probability(&network, &full_assignment(&network, true, false, true, true))
        .expect("complete")
        + joint_probability(&network, &full_assignment(&network, true, false, false, true))
            .expect("complete");
    let marginal = enumerate_all(&network, network.topological_order(), &evidence)
        .expect("marginalization");

    assert_close(summed, marginal, 1e-12, "marginal consistency");
}

#[test]
fn posterior_normalizes_for_every_single_variable_evidence() {
    let network = sprinkler_network();
    let names = ["Cloudy", "Sprinkler", "Rain", "WetGrass"];

    for observed in names {
        for observed_value in [true, false] {
            for query in names {
                if query == observed {
                    continue;
                }
                let dist =
                    ask(&network, query, &[(observed, observed_value)]).expect("query");
                if !dist.is_zero() {
                    assert_close(dist.total(), 1.0, 1e-9, "posterior normalization");
                }
            }
        }
    }
}

#[test]
fn unknown_query_variable_is_rejected() {
    let network = sprinkler_network();
    let err = enumeration_ask(&network, "Fog", &Assignment::new()).unwrap_err();

    assert!(matches!(err, InferenceError::UnknownVariable { ref name } if name == "Fog"));
}

#[test]
fn unknown_evidence_variable_is_rejected() {
    let network = sprinkler_network();
    let err = ask(&network, "Rain", &[("Fog", true)]).unwrap_err();

    assert!(matches!(err, InferenceError::UnknownVariable { ref name } if name == "Fog"));
}

#[test]
fn query_already_in_evidence_is_rejected() {
    let network = sprinkler_network();
    let err = ask(&network, "Rain", &[("Rain", true)]).unwrap_err();

    assert!(matches!(err, InferenceError::QueryInEvidence { ref name } if name == "Rain"));
}

#[test]
fn repeated_queries_are_independent() {
    let network = sprinkler_network();

    let first = ask(&network, "Rain", &[("WetGrass", true)]).expect("first query");
    let second = ask(&network, "Rain", &[("WetGrass", true)]).expect("second query");
    let unrelated = ask(&network, "Cloudy", &[]).expect("interleaved query");

    assert_eq!(first, second);
    assert_eq!(unrelated.p_true, 0.5);
}
