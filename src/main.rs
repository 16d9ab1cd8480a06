use atom_box::config::{Config, SceneConfig};
use atom_box::render::{find_hovered_atom, Camera, CameraController, Direction, Viewport};
use atom_box::{Point2, SimulationStatistics};

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "atom_box")]
struct Opt {
    /// JSON settings file
    #[structopt(short, long)]
    config: Option<std::path::PathBuf>,
    /// Overrides the scene from the settings file: empty, bootstrap, lattice or gas
    #[structopt(short, long, parse(try_from_str = parse_scene))]
    scene: Option<SceneConfig>,
    #[structopt(short, long, default_value = "600")]
    frames: usize,
    #[structopt(long, default_value = "60")]
    fps: f64,
    /// Hold the right arrow key for the whole run
    #[structopt(long)]
    orbit: bool,
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn parse_scene(s: &str) -> eyre::Result<SceneConfig> {
    match s {
        "empty" => Ok(SceneConfig::Empty),
        "bootstrap" => Ok(SceneConfig::Bootstrap),
        "lattice" => Ok(SceneConfig::Lattice(Default::default())),
        "gas" => Ok(SceneConfig::Gas(Default::default())),
        _ => Err(eyre::eyre!("Unknown scene: {:?}", s)),
    }
}

fn main() -> eyre::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut config = match &opt.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(scene) = opt.scene {
        config.scene = scene;
    }

    eyre::ensure!(opt.fps > 0., "Frame rate must be positive, got {}", opt.fps);

    let mut simulation = config.build_simulation();
    let viewport = Viewport::new(1280., 720.);
    let mut camera = Camera::new(&simulation.box_half_extents(), &config.camera, &viewport);
    let mut controller = CameraController::new(&config.camera);

    if opt.orbit {
        controller.on_key_down(Direction::Right);
    }

    let frames_per_report = opt.fps.ceil() as usize;

    for frame in 0..opt.frames {
        let now = frame as f64 / opt.fps;

        simulation.update(now);
        controller.update_camera(&mut camera, now, &viewport);

        if frame % frames_per_report == 0 {
            tracing::info!(
                frame,
                time = simulation.total_time(),
                energy = simulation.total_kinetic_energy(),
                momentum = ?simulation.total_linear_momentum(),
                "simulating"
            );
            if controller.is_moving() {
                tracing::debug!(eye = ?camera.eye(), up = ?camera.up(), "camera moved");
            }
        }
    }

    simulation.pause();

    let center = Point2::new(viewport.width / 2., viewport.height / 2.);
    match find_hovered_atom(
        center,
        &camera.view_matrix(),
        &camera.projection_matrix(),
        &viewport,
        simulation.atoms(),
    ) {
        Some((index, atom)) => tracing::info!(
            index,
            element = %atom.element(),
            position = ?atom.position(),
            "atom under the center of the view"
        ),
        None => tracing::info!("no atom under the center of the view"),
    }

    Ok(())
}
