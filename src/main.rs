use std::process;

use log::{error, info};

use quatern::config::Config;
use quatern::{QuatResult, Quaternion};

fn main() {
    env_logger::init();

    if let Err(err) = run(std::env::args().collect()) {
        error!("{err}");
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: Vec<String>) -> QuatResult<()> {
    let cfg = Config::new(args)?;
    info!("running with {cfg:?}");
    print!("{cfg}");

    let axis = cfg.axis.normalized();
    let rotation = Quaternion::from_axis_angle(&axis, cfg.angle);
    let rotated = rotation.rotate(&cfg.vec);

    println!("Rotation: {rotation}");
    println!("Rotated:  {rotated}");
    println!("Euler:    {}", rotation.rpy());

    if let (Some(from), Some(to)) = (cfg.from, cfg.to) {
        let arc = Quaternion::rotation_of(&from, &to).try_normalized()?;
        println!("Arc:      {arc}");
        println!("Arc rpy:  {}", arc.euler());
    }
    Ok(())
}
