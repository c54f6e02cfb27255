use std::fs::File;
use std::io::BufReader;

use log::debug;
use serde::Deserialize;

use crate::function::polynomialfunction::PolynomialFunction;
use crate::geometry::point::Point;
use crate::geometry::pointset::PointSet;
use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    point_set: Vec<serde_json::Value>,
    #[serde(default)]
    polynomial: Vec<serde_json::Value>
}

#[derive(Deserialize)]
struct PointSetJsonProp {
    points: Vec<(f64, f64)>
}

#[derive(Deserialize)]
struct PolynomialJsonProp {
    coefficients: Vec<f64>
}

fn point_set_from_json(json_value: serde_json::Value) -> Result<PointSet, ManagerError> {
    let json_prop: PointSetJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(json_prop.points
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect())
}

fn polynomial_from_json(json_value: serde_json::Value) -> Result<PolynomialFunction, ManagerError> {
    let json_prop: PolynomialJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(PolynomialFunction::new(json_prop.coefficients)?)
}


/// Named point sets and polynomials loaded from a JSON document of the form
/// `{"point_set": [{"name": .., "points": [[x, y], ..]}], "polynomial": [{"name": .., "coefficients": [..]}]}`.
pub struct Configuration {
    point_set_manager: Manager<PointSet>,
    polynomial_manager: Manager<PolynomialFunction>
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            point_set_manager: Manager::new(point_set_from_json),
            polynomial_manager: Manager::new(polynomial_from_json)
        }
    }

    pub fn point_set_manager(&self) -> &Manager<PointSet> {
        &self.point_set_manager
    }

    pub fn polynomial_manager(&self) -> &Manager<PolynomialFunction> {
        &self.polynomial_manager
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ManagerError> {
        let file = File::open(file_path).map_err(ManagerError::IOError)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader).map_err(ManagerError::JsonParseError)?;
        debug!("loading configuration from {}", file_path);
        self.insert_json_prop(json_prop)
    }

    pub fn from_json_str(&self, json_str: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json_str).map_err(ManagerError::JsonParseError)?;
        self.insert_json_prop(json_prop)
    }

    fn insert_json_prop(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.point_set_manager.insert_obj_from_json_vec(&json_prop.point_set)?;
        self.polynomial_manager.insert_obj_from_json_vec(&json_prop.polynomial)?;
        debug!("configuration loaded: {} point sets, {} polynomials",
               json_prop.point_set.len(),
               json_prop.polynomial.len());
        Ok(())
    }
}
