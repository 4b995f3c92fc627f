//! Headless demo: spins a lit cube and writes the frames out as PNGs.

use std::cell::RefCell;
use std::rc::Rc;

use polyscene::prelude::*;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const FRAMES: u32 = 24;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let trig = Rc::new(TrigTable::new());

    let mut scene = Scene::new(WIDTH, HEIGHT, 0)?;
    scene.set_zoom(24.0);
    scene.add_light(Light::new(0.0, -3.0, -40.0, 0.9, 0.9, 1.0));

    let cube = Rc::new(RefCell::new(shapes::cube(
        Rc::clone(&trig),
        Color::new(0.5, 0.5, 0.5),
        0.8,
    )?));
    cube.borrow_mut().translate(0.0, 0.0, 100.0);
    cube.borrow_mut().set_zoom(20.0);
    scene.add_object(Rc::clone(&cube));

    std::fs::create_dir_all("frames")?;
    for frame in 0..FRAMES {
        let angle = frame as f32 * (360.0 / FRAMES as f32);
        cube.borrow_mut().rotate(angle, angle / 2.0, 0.0);
        scene.render();
        scene.frame().save_png(format!("frames/frame_{frame:02}.png"))?;
    }
    println!("wrote {FRAMES} frames to frames/");

    Ok(())
}
