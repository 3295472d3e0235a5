use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Deterministic seeding for everything random in a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    // Get a new RNG for a named stream by hashing its name with master seed
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }

    /// Offset a spawn point by up to `radius` in X and Z; attempt `n` gives its own stream.
    pub fn jitter_spawn(&self, spawn: Vector3<f64>, radius: f64, attempt: u64) -> Vector3<f64> {
        if radius <= 0.0 {
            return spawn;
        }
        let mut rng = self.get_rng(&format!("spawn-{attempt}"));
        let dx = rng.gen_range(-radius..=radius);
        let dz = rng.gen_range(-radius..=radius);
        Vector3::new(spawn.x + dx, spawn.y, spawn.z + dz)
    }
}
