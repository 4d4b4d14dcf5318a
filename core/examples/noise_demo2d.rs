use noise_core::{NoiseGenerator, Perlin, Point};

fn main() {
    // 2D Perlin noise with seed 10, quintic blending, 256 gradients
    let perlin = Perlin::<f32, 2>::new(10);

    // Print a 16×16 patch spanning 4×4 grid cells
    for y in 0..16 {
        for x in 0..16 {
            let p = Point::new([x as f32 / 4.0, y as f32 / 4.0]);
            print!("{:>6.3} ", perlin.at(&p));
        }
        println!();
    }
}
