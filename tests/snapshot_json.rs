mod common;

use balloon_ascension::{app::settings::SceneConfig, write_snapshot};
use common::seeded_config;
use serde_json::Value;

fn snapshot(config: &SceneConfig, ticks: u32) -> Value {
    let mut out = Vec::new();
    write_snapshot(config, ticks, &mut out).unwrap();
    serde_json::from_slice(&out).unwrap()
}

fn anchors(value: &Value) -> Vec<f64> {
    value["fleets"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|fleet| fleet["balloons"].as_array().unwrap().iter())
        .map(|b| b["y"].as_f64().unwrap() + b["unit"].as_f64().unwrap())
        .collect()
}

#[test]
fn untouched_scene_rests_on_the_ground() {
    let value = snapshot(&seeded_config(31), 0);
    assert_eq!(value["panel_width"], 400);
    assert_eq!(value["panel_height"], 600);
    assert_eq!(value["fleets"].as_array().unwrap().len(), 3);
    assert!(anchors(&value).iter().all(|a| (a - 600.0).abs() < f64::EPSILON));
}

#[test]
fn preset_ascent_lifts_every_fleet() {
    let config = SceneConfig {
        initial_ascent: 3,
        ..seeded_config(32)
    };
    let value = snapshot(&config, 10);
    for fleet in value["fleets"].as_array().unwrap() {
        assert_eq!(fleet["ascent_speed"], 3);
        assert_eq!(fleet["jitter_intensity"], 0);
    }
    assert!(anchors(&value).iter().all(|a| (a - 570.0).abs() < f64::EPSILON));
}

#[test]
fn same_seed_gives_same_snapshot() {
    let config = SceneConfig {
        initial_jitter: 6,
        initial_ascent: 1,
        ..seeded_config(33)
    };
    assert_eq!(snapshot(&config, 25), snapshot(&config, 25));
}

#[test]
fn balloon_colors_use_palette_names() {
    let value = snapshot(&seeded_config(34), 0);
    let palette = ["prussian", "crimson", "tangerine", "saffron", "vanilla"];
    for fleet in value["fleets"].as_array().unwrap() {
        for balloon in fleet["balloons"].as_array().unwrap() {
            let color = balloon["color"].as_str().unwrap();
            assert!(palette.contains(&color), "{color}");
        }
    }
}

#[test]
fn zero_fleets_is_rejected() {
    let config = SceneConfig {
        fleets: 0,
        ..seeded_config(35)
    };
    let mut out = Vec::new();
    assert!(write_snapshot(&config, 0, &mut out).is_err());
    assert!(out.is_empty());
}
