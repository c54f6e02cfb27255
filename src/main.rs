use std::env;
use std::process::ExitCode;

use log::{error, info};

use numerics::configuration::Configuration;
use numerics::function::function::Function;
use numerics::manager::manager::IManager;

const DEFAULT_CONFIG_PATH: &str = "config.json";
const SAMPLE_COUNT: usize = 10;

fn main() -> ExitCode {
    env_logger::init();

    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());
    let point_set_name = env::args().nth(2).unwrap_or_else(|| "knots".to_owned());

    let config = Configuration::new();
    if let Err(error) = config.from_reader(&config_path) {
        error!("cannot load {}: {}", config_path, error);
        return ExitCode::FAILURE;
    }

    let points = match config.point_set_manager().get(&point_set_name) {
        Ok(points) => points,
        Err(error) => {
            error!("{}", error);
            return ExitCode::FAILURE;
        }
    };
    let Some((min_x, max_x)) = points.x_bounds() else {
        error!("point set '{}' is empty", point_set_name);
        return ExitCode::FAILURE;
    };

    let regression = points.least_squares_function();
    info!("least squares over {}: slope = {}, intercept = {}",
          point_set_name,
          regression.slope(),
          regression.intercept(regression.slope()));

    let spline = match points.cubic_spline_function() {
        Ok(spline) => spline,
        Err(error) => {
            error!("cannot build spline from '{}': {}", point_set_name, error);
            return ExitCode::FAILURE;
        }
    };
    match spline.eval_points(min_x, max_x, SAMPLE_COUNT) {
        Ok(samples) => {
            for sample in &samples {
                println!("{}, {}, {}", sample.x(), sample.y(), regression.value(sample.x()));
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
