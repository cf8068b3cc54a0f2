//! Ortho Grid Layout - orthogonal force-directed graph layout
//!
//! Computes a position for every node of a directed graph of labeled
//! rectangles: connected nodes pull together, all nodes push apart, and every
//! round ends with the nodes snapped onto a uniform grid so that rendered
//! edges look orthogonal. The crate builds as a regular Rust library and as a
//! WebAssembly module exposing `computeLayout` to JavaScript.
//!
//! # Architecture
//!
//! - `graph`: Node/edge records and the per-call working graph (petgraph)
//! - `spatial`: R-tree index for grid-cell occupancy and neighbourhood queries
//! - `layout`: Initial placement, force passes, grid snapping, normalization
//! - `error`: Configuration and input errors
//! - `logging`: Browser console backend for the `log` facade

use js_sys::{Array, Reflect};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod error;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod spatial;

pub use error::{LayoutError, Result};
pub use graph::{Bounds, Edge, Node, Point};
pub use layout::{
    InitialPlacement, LayoutOptions, LayoutResult, LayoutStats, OrthogonalLayout, compute_layout,
    compute_layout_in_place,
};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init_console_logger(LevelFilter::Info);
}

/// Node as seen from JavaScript. The payload is passed through untouched.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsNode {
    id: String,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    width: f64,
    #[serde(default)]
    height: f64,
    #[serde(default, with = "serde_wasm_bindgen::preserve")]
    payload: JsValue,
}

impl From<JsNode> for Node<JsValue> {
    fn from(node: JsNode) -> Self {
        Node {
            id: node.id,
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
            payload: node.payload,
        }
    }
}

impl From<Node<JsValue>> for JsNode {
    fn from(node: Node<JsValue>) -> Self {
        JsNode {
            id: node.id,
            x: node.x,
            y: node.y,
            width: node.width,
            height: node.height,
            payload: node.payload,
        }
    }
}

fn options_from_js(options: JsValue) -> std::result::Result<LayoutOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(LayoutOptions::default());
    }
    Ok(serde_wasm_bindgen::from_value(options)?)
}

fn nodes_from_js(nodes: JsValue) -> std::result::Result<Vec<Node<JsValue>>, JsError> {
    let nodes: Vec<JsNode> = serde_wasm_bindgen::from_value(nodes)?;
    Ok(nodes.into_iter().map(Node::from).collect())
}

/// Compute an orthogonal grid layout.
///
/// Takes `nodes` as `[{id, x?, y?, width?, height?, payload?}, ...]`, `edges`
/// as `[{source, target}, ...]` and optional `options` with camelCase keys
/// (`gridSize`, `padding`, `maxIterations`, `temperature`, `coolingFactor`,
/// `initialPlacement`, `repulsionCutoff`). Returns a new array of positioned
/// nodes in input order; the input objects are not modified.
///
/// Throws on malformed input, duplicate node ids or unusable options.
#[wasm_bindgen(js_name = computeLayout)]
pub fn compute_layout_js(
    nodes: JsValue,
    edges: JsValue,
    options: JsValue,
) -> std::result::Result<JsValue, JsError> {
    let nodes = nodes_from_js(nodes)?;
    let edges: Vec<Edge> = serde_wasm_bindgen::from_value(edges)?;
    let options = options_from_js(options)?;

    let laid_out: Vec<JsNode> = compute_layout(&nodes, &edges, &options)?
        .into_iter()
        .map(JsNode::from)
        .collect();
    Ok(serde_wasm_bindgen::to_value(&laid_out)?)
}

/// Compute an orthogonal grid layout, writing `x` and `y` back onto the
/// given node objects.
///
/// Returns the same array for chaining. Nothing is written when an error
/// is thrown.
#[wasm_bindgen(js_name = computeLayoutInPlace)]
pub fn compute_layout_in_place_js(
    nodes: Array,
    edges: JsValue,
    options: JsValue,
) -> std::result::Result<Array, JsError> {
    let parsed = nodes_from_js(nodes.clone().into())?;
    let edges: Vec<Edge> = serde_wasm_bindgen::from_value(edges)?;
    let options = options_from_js(options)?;

    let result = OrthogonalLayout::new(options)?.compute(&parsed, &edges)?;
    for (i, p) in result.positions.iter().enumerate() {
        let target = nodes.get(i as u32);
        Reflect::set(&target, &JsValue::from_str("x"), &JsValue::from_f64(p.x))
            .map_err(|_| JsError::new("node is not an object"))?;
        Reflect::set(&target, &JsValue::from_str("y"), &JsValue::from_f64(p.y))
            .map_err(|_| JsError::new("node is not an object"))?;
    }
    Ok(nodes)
}
