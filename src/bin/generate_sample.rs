use kennel_registry::{Breed, Dog};

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

    fn next_range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let names = [
        "Rex", "Riki", "Bruno", "Heidi", "Yuki", "Hana", "Asta", "Luna", "Max", "Buddy",
        "Storm", "Kiko", "Cid", "Nala", "Odin", "Bella",
    ];

    // (breed, typical adult weight in kg, spread)
    let breed_weights: [(Breed, f64, f64); 9] = [
        (Breed::RhodesianRidgeback, 38.0, 3.0),
        (Breed::BerneseMountainDog, 45.0, 5.0),
        (Breed::ShibaInu, 11.0, 1.5),
        (Breed::GermanShepherd, 30.0, 4.0),
        (Breed::LabradorRetriever, 31.0, 3.5),
        (Breed::Greyhound, 29.0, 3.0),
        (Breed::SiberianHusky, 23.0, 2.5),
        (Breed::JapaneseSpitz, 7.5, 1.0),
        (Breed::BohemianWirehairedPointingGriffon, 28.0, 2.5),
    ];

    let mut dogs: Vec<Dog> = Vec::new();
    let mut name_idx = 0;
    for &(breed, mean, spread) in &breed_weights {
        let litter = rng.next_range(2, 5);
        for _ in 0..litter {
            let weight = (rng.gauss(mean, spread).max(1.0) * 10.0).round() / 10.0;
            let day = rng.next_range(1, 29);
            let month = rng.next_range(1, 13);
            let year = rng.next_range(2004, 2020);
            dogs.push(Dog {
                name: names[name_idx % names.len()].to_string(),
                breed,
                weight,
                date_of_birth: format!("{day:02}-{month:02}-{year}"),
            });
            name_idx += 1;
        }
    }

    // Write CSV
    let csv_path = "dogs.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    for dog in &dogs {
        writer.serialize(dog).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");

    // Write JSON
    let json_path = "dogs.json";
    let json = serde_json::to_string_pretty(&dogs).expect("Failed to serialize JSON");
    std::fs::write(json_path, json).expect("Failed to write JSON file");

    println!(
        "Wrote {} dogs across {} breeds to {csv_path} and {json_path}",
        dogs.len(),
        breed_weights.len()
    );
}
