use noise_core::{Fractal, FractalConfig, NoiseGenerator, OctaveLaw, Perlin, PerlinConfig, Point};

// Prints value statistics of fractal noise for a few weight laws
fn main() {
    let laws = [
        ("hyperbolic", OctaveLaw::Hyperbolic { rate: 1.0 }),
        ("exponential", OctaveLaw::Exponential { base: 0.5 }),
        ("gaussian decay", OctaveLaw::GaussianDecay { width: 3.0 }),
        ("constant", OctaveLaw::Constant { value: 0.25 }),
    ];

    for (name, weight) in laws {
        for contrast in [0, 1, 3] {
            let config = FractalConfig {
                octaves: 12,
                contrast,
                weight,
                frequency: OctaveLaw::Exponential { base: 2.0 },
            };
            let fractal =
                match Fractal::<Perlin<f64, 2>, f64>::perlin(7, &PerlinConfig::default(), &config) {
                    Ok(f) => f,
                    Err(e) => {
                        eprintln!("{name}: {e}");
                        continue;
                    }
                };

            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            let mut sum = 0.0;
            let n = 64 * 64;
            for i in 0..n {
                let p = Point::new([(i % 64) as f64 / 16.0, (i / 64) as f64 / 16.0]);
                let v = fractal.at(&p);
                min = min.min(v);
                max = max.max(v);
                sum += v.abs();
            }
            println!(
                "{name:>15} contrast {contrast}: min {min:>6.3} max {max:>6.3} mean |v| {:.3}",
                sum / n as f64
            );
        }
    }
}
