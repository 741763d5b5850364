use snoise::utils::{to_gray_image, to_terrain_image, to_unit};
use snoise::{SliceSpec, Simplex3D, sample_slice};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let noise = Simplex3D::new(42.0)?;

    // Three slices stacked along z show how the field evolves in depth
    for (n, z) in [0.0, 0.5, 1.0].into_iter().enumerate() {
        let spec = SliceSpec {
            size: 256,
            frequency: 4.0,
            origin: [0.0, 0.0, z],
        };
        let mut map = sample_slice(&noise, &spec)?;
        to_unit(&mut map);

        let gray = format!("simplex3d_slice_{}.png", n);
        to_gray_image(&map).save(Path::new(&gray))?;
        println!("Saved {}", gray);

        let terrain = format!("simplex3d_terrain_{}.png", n);
        to_terrain_image(&map).save(Path::new(&terrain))?;
        println!("Saved {}", terrain);
    }
    Ok(())
}
