//! Browser bindings.
//!
//! Records cross the boundary as plain JS objects with the field names of
//! the serde representations in [`crate::models`].

use wasm_bindgen::prelude::*;

use crate::generation::Bounds;
use crate::models::{DeliveryPoint, Point, Route, Zone};
use crate::random::create_rng;

/// Generates `count` random delivery points inside the padded area.
#[wasm_bindgen(js_name = generatePoints)]
pub fn generate_points(
    count: usize,
    width: f64,
    height: f64,
    margin: f64,
    seed: u64,
) -> Result<JsValue, JsValue> {
    let bounds = Bounds::new(width, height, margin);
    let points = crate::generation::generate_points(count, &bounds, &mut create_rng(seed));
    Ok(serde_wasm_bindgen::to_value(&points)?)
}

/// Clusters points into `k` zones; returns `{ zones, points, iterations, converged }`.
#[wasm_bindgen]
pub fn cluster(points: JsValue, k: usize, seed: u64) -> Result<JsValue, JsValue> {
    let points: Vec<DeliveryPoint> = serde_wasm_bindgen::from_value(points)?;
    let result = crate::clustering::cluster(&points, k, &mut create_rng(seed));
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Routes every zone from the depot `{ x, y }`; returns `{ routes, totalDistance }`.
#[wasm_bindgen(js_name = buildAllRoutes)]
pub fn build_all_routes(zones: JsValue, depot: JsValue) -> Result<JsValue, JsValue> {
    let zones: Vec<Zone> = serde_wasm_bindgen::from_value(zones)?;
    let depot: Point = serde_wasm_bindgen::from_value(depot)?;
    let plan = crate::constructive::build_all_routes(&zones, depot);
    Ok(serde_wasm_bindgen::to_value(&plan)?)
}

/// Vehicle positions after `elapsed` seconds at `speed`.
#[wasm_bindgen]
pub fn sample(routes: JsValue, elapsed: f64, speed: f64) -> Result<JsValue, JsValue> {
    let routes: Vec<Route> = serde_wasm_bindgen::from_value(routes)?;
    let positions = crate::simulation::sample(&routes, elapsed, speed);
    Ok(serde_wasm_bindgen::to_value(&positions)?)
}

/// Seconds until the longest route is complete; `undefined` with no routes.
#[wasm_bindgen(js_name = totalDuration)]
pub fn total_duration(routes: JsValue, speed: f64) -> Result<Option<f64>, JsValue> {
    let routes: Vec<Route> = serde_wasm_bindgen::from_value(routes)?;
    Ok(crate::simulation::total_duration(&routes, speed))
}
