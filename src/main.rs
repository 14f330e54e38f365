use std::error::Error;

use cornell_scene::config::{HEMISPHERE_SAMPLES, LIGHT_SAMPLES};
use cornell_scene::scene::CornellBox;
use cornell_scene::utils::format::{array_entry, vector_entry};
use cornell_scene::utils::sampling::{hemisphere_points, light_points, texture_side};

fn main() -> Result<(), Box<dyn Error>> {
    let mut scene = CornellBox::reference();

    // Сцена нормируется один раз, по габаритам комнаты.
    let (bounds, scale) = scene.normalize_to_unit_cube()?;

    println!("{}", vector_entry("room_max", &bounds.max));
    println!("{}", vector_entry("room_min", &bounds.min));
    println!("{}", vector_entry("room_scale", &scale));

    println!("{}", array_entry("lights", scene.lights.corners()));
    println!("{}", array_entry("room", scene.room.points()));
    println!("{}", array_entry("short_block", scene.short_block.points()));
    println!("{}", array_entry("tall_block", scene.tall_block.points()));
    println!("{}", array_entry("camera", &scene.camera.rows()));

    let mut rng = rand::thread_rng();

    let hemisphere = hemisphere_points(HEMISPHERE_SAMPLES, &mut rng);
    let side = texture_side(hemisphere.len());
    println!("hsphere {} samples ({} x {})", hemisphere.len(), side, side);

    let (llf, urb) = scene.lights.diagonal();
    let samples = light_points(llf, urb, LIGHT_SAMPLES, &mut rng);
    let side = texture_side(samples.len());
    println!("lights {} samples ({} x {})", samples.len(), side, side);

    Ok(())
}
