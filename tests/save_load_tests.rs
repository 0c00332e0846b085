#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use swarm_evo::simulation::config::SimulationConfig;
use swarm_evo::simulation::dna::{Dna, GENE_COUNT};
use swarm_evo::simulation::error::SimulationError;
use swarm_evo::simulation::evolution;
use swarm_evo::simulation::organism::Kind;
use swarm_evo::simulation::snapshot::DnaSnapshot;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("swarm_evo_{name}"));
    fs::create_dir_all(&dir).expect("temp dir");
    dir
}

#[test]
fn test_snapshot_round_trip_preserves_genes_exactly() {
    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(21);
    let cohort = evolution::founding_generation(Kind::Prey, &config, None, &mut rng);

    let dir = temp_dir("round_trip");
    let path = DnaSnapshot::capture(Kind::Prey, 24, &cohort)
        .save(&dir)
        .expect("save succeeds");

    let loaded = DnaSnapshot::load(&path).expect("load succeeds");
    assert_eq!(loaded.generation, 24);
    let dna = loaded.into_dna(Kind::Prey, &path).expect("valid vectors");

    assert_eq!(dna.len(), cohort.len());
    for (original, restored) in cohort.iter().zip(&dna) {
        assert_eq!(original.dna.genes(), restored.genes());
    }

    fs::remove_file(path).ok();
}

#[test]
fn test_snapshot_filename_carries_role_generation_and_hash() {
    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(22);
    let cohort = evolution::founding_generation(Kind::Predator, &config, None, &mut rng);

    let snapshot = DnaSnapshot::capture(Kind::Predator, 49, &cohort);
    let hash = snapshot.content_hash();
    let dir = temp_dir("filename");
    let path = snapshot.save(&dir).expect("save succeeds");

    let name = path.file_name().and_then(|n| n.to_str()).expect("file name");
    assert_eq!(name, format!("pred_dna_gen_49_{hash}.json"));

    fs::remove_file(path).ok();
}

#[test]
fn test_content_hash_ignores_timestamp_but_tracks_genes() {
    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(23);
    let cohort = evolution::founding_generation(Kind::Prey, &config, None, &mut rng);

    let mut first = DnaSnapshot::capture(Kind::Prey, 0, &cohort);
    let second = DnaSnapshot::capture(Kind::Prey, 0, &cohort);
    first.saved_at = "1970-01-01T00:00:00+00:00".to_owned();
    assert_eq!(first.content_hash(), second.content_hash());

    let mut mutated = first.clone();
    mutated.dna[0][0] += 0.5;
    assert_ne!(first.content_hash(), mutated.content_hash());
}

#[test]
fn test_loading_wrong_role_is_rejected() {
    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(24);
    let cohort = evolution::founding_generation(Kind::Prey, &config, None, &mut rng);

    let dir = temp_dir("wrong_role");
    let path = DnaSnapshot::capture(Kind::Prey, 0, &cohort)
        .save(&dir)
        .expect("save succeeds");

    let loaded = DnaSnapshot::load(&path).expect("load succeeds");
    let err = loaded.into_dna(Kind::Predator, &path).unwrap_err();
    assert!(matches!(
        err,
        SimulationError::SnapshotRoleMismatch {
            expected: Kind::Predator,
            found: Kind::Prey,
            ..
        }
    ));

    fs::remove_file(path).ok();
}

#[test]
fn test_malformed_vector_length_fails_before_any_organism() {
    let snapshot = DnaSnapshot {
        role: Kind::Prey,
        generation: 0,
        saved_at: "1970-01-01T00:00:00+00:00".to_owned(),
        dna: vec![vec![0.5; GENE_COUNT], vec![0.5; GENE_COUNT - 3]],
    };
    let err = snapshot
        .into_dna(Kind::Prey, &PathBuf::from("in_memory.json"))
        .unwrap_err();
    assert!(matches!(
        err,
        SimulationError::DnaLengthMismatch {
            expected: GENE_COUNT,
            found
        } if found == GENE_COUNT - 3
    ));
}

#[test]
fn test_loading_nonexistent_snapshot_fails() {
    let missing = PathBuf::from("no_such_snapshot.json");
    assert!(DnaSnapshot::load(&missing).is_err());
}

#[test]
fn test_loading_invalid_json_fails() {
    let dir = temp_dir("invalid_json");
    let path = dir.join("broken.json");
    fs::write(&path, "{ this is not valid json }").expect("write test file");

    assert!(DnaSnapshot::load(&path).is_err());

    fs::remove_file(path).ok();
}

#[test]
fn test_config_round_trips_through_json() {
    let config = SimulationConfig {
        seed: Some(99),
        ..SimulationConfig::default()
    };
    let dir = temp_dir("config");
    let path = dir.join("sim_config.json");
    fs::write(&path, serde_json::to_string_pretty(&config).expect("serialize")).expect("write");

    let loaded = SimulationConfig::from_file(&path).expect("load succeeds");
    assert_eq!(loaded.seed, Some(99));
    assert_eq!(loaded.prey.population, config.prey.population);
    assert_eq!(loaded.predators.radius, config.predators.radius);
    assert_eq!(
        loaded.evolution.ticks_per_generation,
        config.evolution.ticks_per_generation
    );
    loaded.validate().expect("defaults validate");

    fs::remove_file(path).ok();
}

#[test]
fn test_dna_from_loaded_snapshot_seeds_a_cohort() {
    let config = SimulationConfig::default();
    let mut rng = StdRng::seed_from_u64(25);
    let original = evolution::founding_generation(Kind::Predator, &config, None, &mut rng);

    let dir = temp_dir("reseed");
    let path = DnaSnapshot::capture(Kind::Predator, 7, &original)
        .save(&dir)
        .expect("save succeeds");

    let dna = DnaSnapshot::load(&path)
        .expect("load succeeds")
        .into_dna(Kind::Predator, &path)
        .expect("valid vectors");
    let reseeded = evolution::founding_generation(Kind::Predator, &config, Some(dna), &mut rng);

    assert_eq!(reseeded.len(), original.len());
    for (old, new) in original.iter().zip(&reseeded) {
        assert_eq!(old.dna.genes(), new.dna.genes());
        assert_eq!(new.score, 0);
        assert!(new.alive);
    }

    fs::remove_file(path).ok();
}
