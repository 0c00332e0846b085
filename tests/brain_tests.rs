#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use rand::SeedableRng;
use rand::rngs::StdRng;
use swarm_evo::simulation::brain::{Brain, HIDDEN_WIDTH, OUTPUT_WIDTH, Steering};
use swarm_evo::simulation::dna::{Dna, GENE_COUNT};
use swarm_evo::simulation::error::SimulationError;
use swarm_evo::simulation::senses::INPUT_WIDTH;

/// DNA where every input-to-hidden weight is 1 and each hidden unit feeds the
/// given pair of output weights.
fn dna_with_output_rows(first: f32, second: f32) -> Dna {
    let mut genes = vec![1.0; INPUT_WIDTH * HIDDEN_WIDTH];
    for _ in 0..HIDDEN_WIDTH {
        genes.push(first);
        genes.push(second);
    }
    Dna::from_genes(genes).expect("gene count matches topology")
}

#[test]
fn test_gene_count_matches_topology() {
    assert_eq!(GENE_COUNT, INPUT_WIDTH * HIDDEN_WIDTH + HIDDEN_WIDTH * OUTPUT_WIDTH);
    assert_eq!(GENE_COUNT, 40);
}

#[test]
fn test_zero_dna_steers_straight() {
    // All-zero weights make both sigmoid outputs exactly 0.5: no turn.
    let dna = Dna::from_genes(vec![0.0; GENE_COUNT]).expect("gene count matches topology");
    let brain = Brain::from_dna(&dna);
    let inputs = Array1::from_vec(vec![0.7; INPUT_WIDTH]);
    let outputs = brain.forward(&inputs);
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(brain.decide(&inputs), Steering::Straight);
}

#[test]
fn test_quiet_senses_with_symmetric_outputs_steer_straight() {
    let brain = Brain::from_dna(&dna_with_output_rows(1.0, 1.0));
    let inputs = Array1::zeros(INPUT_WIDTH);
    assert_eq!(brain.decide(&inputs), Steering::Straight);
}

#[test]
fn test_dominant_first_output_turns_left() {
    let brain = Brain::from_dna(&dna_with_output_rows(1.0, 0.0));
    let mut inputs = Array1::zeros(INPUT_WIDTH);
    inputs[0] = 1.0;
    let outputs = brain.forward(&inputs);
    assert!(outputs[0] > outputs[1]);
    assert_eq!(brain.decide(&inputs), Steering::TurnLeft);
}

#[test]
fn test_dominant_second_output_turns_right() {
    let brain = Brain::from_dna(&dna_with_output_rows(0.0, 1.0));
    let mut inputs = Array1::zeros(INPUT_WIDTH);
    inputs[3] = 0.5;
    assert_eq!(brain.decide(&inputs), Steering::TurnRight);
}

#[test]
fn test_outputs_are_sigmoid_bounded() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let brain = Brain::from_dna(&Dna::random(&mut rng));
        let inputs = Array1::from_vec(vec![1.0; INPUT_WIDTH]);
        let outputs = brain.forward(&inputs);
        assert_eq!(outputs.len(), OUTPUT_WIDTH);
        for &v in &outputs {
            assert!(v > 0.0 && v < 1.0);
        }
    }
}

#[test]
fn test_steering_delta_signs() {
    let increment = 0.25;
    assert_eq!(Steering::TurnLeft.heading_delta(increment), -0.25);
    assert_eq!(Steering::TurnRight.heading_delta(increment), 0.25);
    assert_eq!(Steering::Straight.heading_delta(increment), 0.0);
}

#[test]
fn test_random_dna_has_unit_interval_genes() {
    let mut rng = StdRng::seed_from_u64(3);
    let dna = Dna::random(&mut rng);
    assert_eq!(dna.len(), GENE_COUNT);
    assert!(dna.genes().iter().all(|&g| (0.0..1.0).contains(&g)));
}

#[test]
fn test_wrong_gene_count_is_rejected() {
    let err = Dna::from_genes(vec![0.5; GENE_COUNT - 1]).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::DnaLengthMismatch {
            expected: GENE_COUNT,
            found
        } if found == GENE_COUNT - 1
    ));
}

#[test]
fn test_breeding_without_mutation_takes_genes_from_parents() {
    let mother = Dna::from_genes(vec![0.25; GENE_COUNT]).expect("gene count");
    let father = Dna::from_genes(vec![0.75; GENE_COUNT]).expect("gene count");
    let mut rng = StdRng::seed_from_u64(42);

    let child = Dna::breed(&mother, &father, 0.0, &mut rng);
    assert_eq!(child.len(), GENE_COUNT);
    let mut from_mother = 0;
    for &gene in child.genes() {
        assert!(gene == 0.25 || gene == 0.75);
        if gene == 0.25 {
            from_mother += 1;
        }
    }
    // 50/50 inheritance; with 40 genes both parents contribute.
    assert!(from_mother > 0 && from_mother < GENE_COUNT);
}

#[test]
fn test_full_mutation_redraws_every_gene() {
    let mother = Dna::from_genes(vec![0.25; GENE_COUNT]).expect("gene count");
    let father = Dna::from_genes(vec![0.75; GENE_COUNT]).expect("gene count");
    let mut rng = StdRng::seed_from_u64(42);

    let child = Dna::breed(&mother, &father, 1.0, &mut rng);
    for &gene in child.genes() {
        assert!(gene != 0.25 && gene != 0.75);
        assert!((0.0..1.0).contains(&gene));
    }
}

#[test]
fn test_breeding_is_deterministic_per_seed() {
    let mut rng_a = StdRng::seed_from_u64(9);
    let mut rng_b = StdRng::seed_from_u64(9);
    let mother = Dna::random(&mut rng_a);
    let father = Dna::random(&mut rng_a);
    let mother_b = Dna::random(&mut rng_b);
    let father_b = Dna::random(&mut rng_b);
    assert_eq!(mother, mother_b);

    let child_a = Dna::breed(&mother, &father, 0.05, &mut rng_a);
    let child_b = Dna::breed(&mother_b, &father_b, 0.05, &mut rng_b);
    assert_eq!(child_a, child_b);
}
