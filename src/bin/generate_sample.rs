use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Grade model: an ellipsoidal ore body centered below the surface, grade
/// falling off with distance from its core.
fn grade_at(x: f64, y: f64, z: f64, rng: &mut SimpleRng) -> f64 {
    let core = (100.0, 100.0, -60.0);
    let radii = (70.0, 55.0, 45.0);
    let d = ((x - core.0) / radii.0).powi(2)
        + ((y - core.1) / radii.1).powi(2)
        + ((z - core.2) / radii.2).powi(2);
    let base = 2.5 * (-d).exp();
    (base + rng.gauss(0.0, 0.05)).max(0.0)
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // 20 × 20 × 10 grid of 10 m blocks, surface at z = 0.
    let spacing = 10.0;
    let (nx, ny, nz) = (20usize, 20usize, 10usize);

    let metal_price = 60.0; // $ per tonne-% of metal
    let tonnage = 2700.0; // tonnes per block
    let base_mining_cost = 25_000.0; // $ per block at surface

    let mut features = Vec::with_capacity(nx * ny * nz);

    for ix in 0..nx {
        for iy in 0..ny {
            for iz in 0..nz {
                let x = ix as f64 * spacing + spacing / 2.0;
                let y = iy as f64 * spacing + spacing / 2.0;
                let z = -(iz as f64 * spacing + spacing / 2.0);

                let grade = grade_at(x, y, z, &mut rng);
                let value = grade * tonnage * metal_price / 100.0;
                // Deeper blocks cost more to haul out.
                let cost = base_mining_cost * (1.0 + (-z) / 200.0) + rng.gauss(0.0, 500.0);
                let rock = if grade > 0.5 { "ore" } else { "waste" };

                let mut props = JsonObject::new();
                props.insert("grade".to_string(), JsonValue::from(grade));
                props.insert("tonnage".to_string(), JsonValue::from(tonnage));
                props.insert("value".to_string(), JsonValue::from(value));
                props.insert("cost".to_string(), JsonValue::from(cost));
                props.insert("rock".to_string(), JsonValue::from(rock));

                features.push(Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(vec![x, y, z]))),
                    id: None,
                    properties: Some(props),
                    foreign_members: None,
                });
            }
        }
    }

    let n_blocks = features.len();
    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    let output_path = "sample_block_model.geojson";
    std::fs::write(output_path, GeoJson::from(collection).to_string())
        .expect("Failed to write output file");

    println!("Wrote {n_blocks} blocks ({nx}×{ny}×{nz} grid) to {output_path}");
}
