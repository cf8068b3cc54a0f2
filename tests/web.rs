//! JavaScript-facing API tests, run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use ortho_grid_layout::{compute_layout_in_place_js, compute_layout_js};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

fn js_node(id: &str, payload: &JsValue) -> JsValue {
    let node = Object::new();
    Reflect::set(&node, &"id".into(), &id.into()).unwrap();
    Reflect::set(&node, &"payload".into(), payload).unwrap();
    node.into()
}

fn js_edge(source: &str, target: &str) -> JsValue {
    let edge = Object::new();
    Reflect::set(&edge, &"source".into(), &source.into()).unwrap();
    Reflect::set(&edge, &"target".into(), &target.into()).unwrap();
    edge.into()
}

fn number(value: &JsValue, key: &str) -> f64 {
    Reflect::get(value, &key.into()).unwrap().as_f64().unwrap()
}

#[wasm_bindgen_test]
fn compute_layout_returns_positioned_copies() {
    let payload: JsValue = Object::new().into();
    let nodes = Array::of2(&js_node("A", &payload), &js_node("B", &JsValue::NULL));
    let edges = Array::of1(&js_edge("A", "B"));

    let result = compute_layout_js(nodes.clone().into(), edges.into(), JsValue::UNDEFINED)
        .map_err(JsValue::from)
        .unwrap();
    let result = Array::from(&result);

    assert_eq!(result.length(), 2);
    let first = result.get(0);
    let second = result.get(1);
    assert_eq!(number(&first, "x").min(number(&second, "x")), 50.0);
    assert_eq!(number(&first, "y").min(number(&second, "y")), 50.0);

    // The payload object is passed through by reference.
    assert!(Reflect::get(&first, &"payload".into()).unwrap() == payload);
    // The input objects are left alone.
    assert!(Reflect::get(&nodes.get(0), &"x".into()).unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn compute_layout_in_place_writes_back() {
    let nodes = Array::of1(&js_node("A", &JsValue::UNDEFINED));
    let options = Object::new();
    Reflect::set(&options, &"padding".into(), &JsValue::from_f64(10.0)).unwrap();

    let same = compute_layout_in_place_js(nodes.clone(), Array::new().into(), options.into())
        .map_err(JsValue::from)
        .unwrap();

    assert_eq!(same.length(), 1);
    assert_eq!(number(&nodes.get(0), "x"), 10.0);
    assert_eq!(number(&nodes.get(0), "y"), 10.0);
}

#[wasm_bindgen_test]
fn invalid_options_throw() {
    let nodes = Array::of1(&js_node("A", &JsValue::UNDEFINED));
    let options = Object::new();
    Reflect::set(&options, &"gridSize".into(), &JsValue::from_f64(0.0)).unwrap();

    assert!(compute_layout_js(nodes.into(), Array::new().into(), options.into()).is_err());
}
