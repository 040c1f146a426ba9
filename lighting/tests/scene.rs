use rand::SeedableRng;
use rand::rngs::StdRng;

use lighting::{
    CircleOccluder, Color, ColorName, Light, Point2, Scene, SceneError, ShadingConfig, Wall,
    AMBIENT_FLOOR
};
use lighting::shading::{attenuation, diffuse};


// Helpers --------------------------------------------------------------------
fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn open_scene() -> Scene {
    Scene::from_toml(r#"
        [light]
        x = 0
        y = 0
        penumbra = 8

        [[occluders]]
        x = 0
        y = 100
        radius = 10
        color = "red"

        [[occluders]]
        x = 30
        y = 200
        radius = 20
        color = [10, 20, 30]

        [[occluders]]
        x = -60
        y = 140
        radius = 15
        color = "blue"

        [[walls]]
        line = [-300, -50, 300, -50]
    "#).unwrap()
}


// Construction ---------------------------------------------------------------
#[test]
fn test_light_validation() {

    assert!(Light::new(p(0.0, 0.0), 10.0, 360, 4, 1.5).is_ok());

    match Light::new(p(0.0, 0.0), 0.0, 360, 4, 1.5) {
        Err(SceneError::InvalidRadius { what: "light", .. }) => {},
        other => panic!("unexpected {:?}", other)
    }

    match Light::new(p(0.0, 0.0), 10.0, 360, 0, 1.5) {
        Err(SceneError::InvalidSampleCount(0)) => {},
        other => panic!("unexpected {:?}", other)
    }

    match Light::new(p(0.0, 0.0), 10.0, 360, 4, -1.0) {
        Err(SceneError::InvalidStrength(_)) => {},
        other => panic!("unexpected {:?}", other)
    }

    match Light::new(p(f64::NAN, 0.0), 10.0, 360, 4, 1.5) {
        Err(SceneError::InvalidPosition { what: "light" }) => {},
        other => panic!("unexpected {:?}", other)
    }

}

#[test]
fn test_light_defaults() {
    let light = Light::at(p(1.0, 2.0)).unwrap();
    assert_eq!(light.position(), p(1.0, 2.0));
    assert_eq!(light.radius(), 10.0);
    assert_eq!(light.rays(), 360);
    assert_eq!(light.penumbra_samples(), 4);
    assert_eq!(light.strength(), 1.5);
}

#[test]
fn test_occluder_validation() {

    assert!(CircleOccluder::new(p(0.0, 0.0), 1.0, Color::default()).is_ok());
    assert!(CircleOccluder::new(p(0.0, 0.0), 0.0, Color::default()).is_err());
    assert!(CircleOccluder::new(p(0.0, 0.0), -5.0, Color::default()).is_err());
    assert!(CircleOccluder::new(p(0.0, 0.0), f64::INFINITY, Color::default()).is_err());
    assert!(CircleOccluder::new(p(0.0, f64::INFINITY), 1.0, Color::default()).is_err());

    let occluder = CircleOccluder::new(p(0.0, 0.0), 1.0, Color::new(1, 2, 3)).unwrap();
    assert_eq!(occluder.current_color(), occluder.base_color());
    assert_eq!(occluder.intensity(), None);

}

#[test]
fn test_wall_accessors() {

    let wall = Wall::from_line([0.0, 0.0, 10.0, 0.0]).unwrap();
    assert_eq!(wall.start(), p(0.0, 0.0));
    assert_eq!(wall.end(), p(10.0, 0.0));
    assert_eq!(wall.length(), 10.0);
    assert_eq!(wall.normal(), p(0.0, -1.0));
    assert!(wall.contains(p(4.0, 0.0)));
    assert!(!wall.contains(p(4.0, 1.0)));

    assert!(Wall::from_line([0.0, f64::NAN, 10.0, 0.0]).is_err());

}

#[test]
fn test_color_names() {
    assert_eq!("Red".parse::<ColorName>().unwrap(), ColorName::Red);
    assert_eq!(Color::from_name(ColorName::Red), Color::new(255, 100, 100));
    assert_eq!(Color::from_name(ColorName::Gray), Color::new(80, 80, 80));
    for name in ColorName::all() {
        assert_eq!(name.as_str().parse::<ColorName>().unwrap(), name);
    }
    assert!("mauve".parse::<ColorName>().is_err());
}


// Loading --------------------------------------------------------------------
#[test]
fn test_demo_scene() {

    let scene = Scene::demo().unwrap();
    assert_eq!(scene.light().position(), p(400.0, 300.0));
    assert_eq!(scene.light().strength(), 1.5);
    assert_eq!(scene.light().penumbra_samples(), 4);
    assert_eq!(scene.occluders().len(), 4);
    assert_eq!(scene.walls().len(), 5);
    assert_eq!(scene.occluders()[0].base_color(), Color::new(255, 100, 100));
    assert_eq!(scene.occluders()[3].base_color(), Color::new(200, 200, 0));
    assert_eq!(scene.walls()[4].start(), p(250.0, 150.0));
    assert_eq!(*scene.config(), ShadingConfig::default());

}

#[test]
fn test_from_toml_defaults_and_shading() {

    let scene = Scene::from_toml(r#"
        [light]
        x = 1.5
        y = 2

        [shading]
        ambient = 0.5
    "#).unwrap();

    assert_eq!(scene.light().position(), p(1.5, 2.0));
    assert_eq!(scene.light().penumbra_samples(), 4);
    assert_eq!(scene.config().ambient, 0.5);
    assert_eq!(scene.config().jitter_spread, 0.1);
    assert_eq!(scene.config().attenuation_scale, 100.0);
    assert!(scene.occluders().is_empty());
    assert!(scene.walls().is_empty());

}

#[test]
fn test_from_toml_errors() {

    match Scene::from_toml("[light]\nx = 0\n") {
        Err(SceneError::Parse(_)) => {},
        other => panic!("unexpected {:?}", other)
    }

    match Scene::from_toml("[light]\nx = 0\ny = 0\npenumbra = 0\n") {
        Err(SceneError::InvalidSampleCount(0)) => {},
        other => panic!("unexpected {:?}", other)
    }

    match Scene::from_toml("[light]\nx = 0\ny = 0\n[[occluders]]\nx = 1\ny = 1\nradius = 1\ncolor = \"mauve\"\n") {
        Err(SceneError::UnknownColor(ref name)) if name == "mauve" => {},
        other => panic!("unexpected {:?}", other)
    }

    match Scene::from_toml("[light]\nx = 0\ny = 0\n[[occluders]]\nx = 1\ny = 1\nradius = 0\ncolor = \"red\"\n") {
        Err(SceneError::InvalidRadius { what: "occluder", .. }) => {},
        other => panic!("unexpected {:?}", other)
    }

    match Scene::from_toml("[light]\nx = 0\ny = 0\n[shading]\njitter = -1.0\n") {
        Err(SceneError::InvalidShading { name: "jitter", .. }) => {},
        other => panic!("unexpected {:?}", other)
    }

}

#[test]
fn test_from_missing_file() {
    match Scene::from_file("/this/scene/does/not/exist.toml") {
        Err(SceneError::Io(_)) => {},
        other => panic!("unexpected {:?}", other)
    }
}


// Editing --------------------------------------------------------------------
#[test]
fn test_pick_occluder() {
    let scene = Scene::demo().unwrap();
    assert_eq!(scene.pick_occluder(p(300.0, 200.0)), Some(0));
    assert_eq!(scene.pick_occluder(p(510.0, 390.0)), Some(1));
    assert_eq!(scene.pick_occluder(p(10.0, 10.0)), None);

    // On the rim
    assert_eq!(scene.pick_occluder(p(350.0, 200.0)), None);
}

#[test]
fn test_move_and_remove() {

    let mut scene = Scene::demo().unwrap();
    assert!(scene.move_occluder(0, p(1.0, 2.0)).unwrap());
    assert_eq!(scene.occluders()[0].position(), p(1.0, 2.0));
    assert!(!scene.move_occluder(42, p(1.0, 2.0)).unwrap());
    assert!(scene.move_occluder(0, p(f64::NAN, 2.0)).is_err());

    scene.move_light(p(10.0, 20.0)).unwrap();
    assert_eq!(scene.light().position(), p(10.0, 20.0));

    let removed = scene.remove_occluder(1).unwrap();
    assert_eq!(removed.radius(), 70.0);
    assert_eq!(scene.occluders().len(), 3);
    assert!(scene.remove_occluder(3).is_none());

    let index = scene.add_occluder(CircleOccluder::new(p(0.0, 0.0), 5.0, Color::default()).unwrap());
    assert_eq!(index, 3);

    scene.add_wall(Wall::from_line([0.0, 0.0, 1.0, 1.0]).unwrap());
    assert_eq!(scene.walls().len(), 6);

}


// Relighting -----------------------------------------------------------------
#[test]
fn test_relight_demo_scene() {

    let mut scene = Scene::demo().unwrap();
    scene.relight();

    // Every shadow ray ends up hitting the enclosing walls
    for o in &scene.occluders()[..3] {
        assert_eq!(o.intensity(), Some(AMBIENT_FLOOR));
        assert_eq!(o.current_color(), o.base_color().scale(AMBIENT_FLOOR));
    }

    // The last circle sits right on the light
    let center = &scene.occluders()[3];
    assert_eq!(center.intensity(), None);
    assert_eq!(center.current_color(), center.base_color());

}

#[test]
fn test_relight_restores_base_color_when_on_light() {

    let mut scene = open_scene();
    scene.relight();

    let target = &scene.occluders()[0];
    assert_ne!(target.current_color(), target.base_color());

    scene.move_light(p(0.0, 100.0)).unwrap();
    scene.relight();

    let target = &scene.occluders()[0];
    assert_eq!(target.intensity(), None);
    assert_eq!(target.current_color(), target.base_color());

}

#[test]
fn test_relight_demo_light_dragged_onto_occluder() {

    let mut scene = Scene::demo().unwrap();
    scene.move_light(p(400.0, 120.0)).unwrap();
    scene.relight();
    assert_eq!(scene.occluders()[0].current_color(), Color::new(51, 20, 20));

    scene.move_light(p(300.0, 200.0)).unwrap();
    scene.relight();
    assert_eq!(scene.occluders()[0].intensity(), None);
    assert_eq!(scene.occluders()[0].current_color(), Color::new(255, 100, 100));

}

#[test]
fn test_relight_never_darkens_cumulatively() {

    let mut scene = open_scene();
    let mut rng = StdRng::seed_from_u64(11);
    scene.relight_with(&mut rng);
    let first: Vec<_> = scene.occluders().iter().map(|o| o.current_color()).collect();

    for _ in 0..10 {
        let mut rng = StdRng::seed_from_u64(11);
        scene.relight_with(&mut rng);
    }

    let last: Vec<_> = scene.occluders().iter().map(|o| o.current_color()).collect();
    assert_eq!(first, last);

    assert_eq!(scene.occluders()[0].base_color(), Color::new(255, 100, 100));
    assert_eq!(scene.occluders()[1].base_color(), Color::new(10, 20, 30));

}

#[test]
fn test_relight_seeded_is_idempotent() {

    let mut a = open_scene();
    let mut b = open_scene();
    a.relight_with(&mut StdRng::seed_from_u64(5));
    b.relight_with(&mut StdRng::seed_from_u64(5));
    assert_eq!(a, b);

}

#[test]
fn test_relight_stays_within_bounds() {

    let mut scene = open_scene();
    for _ in 0..50 {

        scene.relight();

        let light = scene.light().clone();
        for o in scene.occluders() {

            let to_target = o.position() - light.position();
            let upper = AMBIENT_FLOOR
                + diffuse(to_target.normalize().unwrap(), p(0.0, 1.0))
                * attenuation(to_target.length(), 100.0)
                * light.strength();

            let intensity = o.intensity().unwrap();
            assert!(intensity >= AMBIENT_FLOOR);
            assert!(intensity <= upper + 1e-12);

        }

    }

}

#[test]
fn test_relight_shadows_occluder_behind_another() {

    // The second circle hides straight behind the first one
    let mut scene = Scene::from_toml(r#"
        [light]
        x = 0
        y = 0

        [[occluders]]
        x = 0
        y = 100
        radius = 40
        color = "white"

        [[occluders]]
        x = 0
        y = 300
        radius = 40
        color = "white"
    "#).unwrap();

    scene.relight();

    // Shadow rays are not bounded by the target, so the front one is hidden too
    assert_eq!(scene.occluders()[0].intensity(), Some(AMBIENT_FLOOR));
    assert_eq!(scene.occluders()[1].intensity(), Some(AMBIENT_FLOOR));

}
