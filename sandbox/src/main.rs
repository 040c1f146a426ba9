// STD Dependencies -----------------------------------------------------------
use std::process;


// External Dependencies ------------------------------------------------------
use clap::{value_parser, Arg, Command};
use log::error;


// Internal Dependencies ------------------------------------------------------
use lighting::{Point2, Scene, SceneError};


// Sandbox Runnable -----------------------------------------------------------
fn main() {

    env_logger::init();

    let matches = Command::new("Lighting Sandbox")
        .version("0.1")
        .author("Ivo Wetzel <ivo.wetzel@googlemail.com>")
        .about("Soft shadowed 2D lighting, headless")
        .arg(Arg::new("scene")
            .short('s')
            .long("scene")
            .value_name("SCENE_FILE")
            .help("Loads the scene from a TOML description instead of the demo scene.")
        )
        .arg(Arg::new("frames")
            .short('f')
            .long("frames")
            .value_name("FRAMES")
            .help("Number of frames to relight.")
            .value_parser(value_parser!(u32))
            .default_value("1")
        )
        .arg(Arg::new("seed")
            .long("seed")
            .value_name("SEED")
            .help("Seeds the shadow jitter for reproducible output.")
            .value_parser(value_parser!(u64))
        )
        .arg(Arg::new("light")
            .short('l')
            .long("light")
            .value_name("X,Y")
            .help("Moves the light before relighting.")
            .value_parser(sandbox::parse_point)
        )
        .get_matches();

    let scene = match matches.get_one::<String>("scene") {
        Some(path) => Scene::from_file(path),
        None => Scene::demo()
    };

    let result = scene.and_then(|mut scene| {

        if let Some(light) = matches.get_one::<Point2>("light") {
            scene.move_light(*light)?;
        }

        let frames = matches.get_one::<u32>("frames").copied().unwrap_or(1);
        sandbox::run(&mut scene, frames, matches.get_one::<u64>("seed").copied());
        Ok::<Scene, SceneError>(scene)

    });

    match result {
        Ok(scene) => print!("{}", sandbox::report(&scene)),
        Err(err) => {
            error!("[Sandbox] {}", err);
            process::exit(1);
        }
    }

}
