//! End-to-end checks on generated DXF output.

mod common;

use pretty_assertions::assert_eq;

use common::{count_pairs, parse_pairs, values_for_code};
use sondagens_dxf::{generate_boreholes_dxf, Borehole, BoreholeGroup, DxfError};

fn two_groups() -> Vec<BoreholeGroup> {
    let mut spt = BoreholeGroup::new("SPT");
    spt.add_borehole(Borehole::new("S-01", 100.0, 200.0));
    let mut cpt = BoreholeGroup::new("CPT");
    cpt.add_borehole(Borehole::new("C-01", 300.0, 400.0));
    vec![spt, cpt]
}

#[test]
fn layer_table_holds_layer_0_and_one_layer_per_group() {
    let dxf = generate_boreholes_dxf(&two_groups()).unwrap();
    let pairs = parse_pairs(&dxf);
    assert_eq!(count_pairs(&pairs, 0, "LAYER"), 3);
    assert!(dxf.contains("SPT"));
    assert!(dxf.contains("CPT"));
}

#[test]
fn group_layers_get_distinct_palette_colors() {
    let dxf = generate_boreholes_dxf(&two_groups()).unwrap();
    let pairs = parse_pairs(&dxf);
    let colors: Vec<i32> = values_for_code(&pairs, 62)
        .iter()
        .filter_map(|v| v.parse().ok())
        .filter(|c| (2..=6).contains(c))
        .collect();
    assert_eq!(colors, vec![2, 3]);
}

#[test]
fn marker_block_defined_once() {
    let dxf = generate_boreholes_dxf(&two_groups()).unwrap();
    let pairs = parse_pairs(&dxf);
    // model space, paper space and SONDAGEM
    assert_eq!(count_pairs(&pairs, 0, "BLOCK"), 3);
    assert_eq!(count_pairs(&pairs, 0, "HATCH"), 1);
}

#[test]
fn one_insert_leader_text_per_borehole() {
    let dxf = generate_boreholes_dxf(&two_groups()).unwrap();
    let pairs = parse_pairs(&dxf);
    assert_eq!(count_pairs(&pairs, 0, "INSERT"), 2);
    assert_eq!(count_pairs(&pairs, 0, "LEADER"), 2);
    assert_eq!(count_pairs(&pairs, 0, "TEXT"), 2);
    assert!(dxf.contains("S-01"));
    assert!(dxf.contains("C-01"));
}

#[test]
fn many_boreholes_still_share_one_block() {
    let mut group = BoreholeGroup::new("SPT");
    for i in 0..50 {
        group.add_borehole(Borehole::new(format!("S-{i:02}"), i as f64 * 10.0, 0.0));
    }
    let dxf = generate_boreholes_dxf(&[group]).unwrap();
    let pairs = parse_pairs(&dxf);
    assert_eq!(count_pairs(&pairs, 0, "BLOCK"), 3);
    assert_eq!(count_pairs(&pairs, 0, "HATCH"), 1);
    assert_eq!(count_pairs(&pairs, 0, "INSERT"), 50);
}

#[test]
fn label_styles_are_registered() {
    let dxf = generate_boreholes_dxf(&two_groups()).unwrap();
    let pairs = parse_pairs(&dxf);
    assert!(values_for_code(&pairs, 2).contains(&"SONDAGEM".to_string()));
    assert_eq!(count_pairs(&pairs, 2, "Arial"), 1);
    assert_eq!(count_pairs(&pairs, 2, "Sondagens"), 1);
    assert!(dxf.contains("arial.ttf"));
}

#[test]
fn duplicate_layer_fails_without_output() {
    let groups = vec![BoreholeGroup::new("SPT"), BoreholeGroup::new("spt")];
    let err = generate_boreholes_dxf(&groups).unwrap_err();
    assert!(matches!(err, DxfError::DuplicateLayer(_)));
}

#[test]
fn out_of_palette_color_fails() {
    let groups = vec![BoreholeGroup::with_color("SPT", 7)];
    let err = generate_boreholes_dxf(&groups).unwrap_err();
    assert!(matches!(
        err,
        DxfError::ColorOutsidePalette { color: 7, .. }
    ));
}

#[test]
fn explicit_color_appears_in_layer_table() {
    let mut group = BoreholeGroup::with_color("SPT", 5);
    group.add_borehole(Borehole::new("S-01", 0.0, 0.0));
    let dxf = generate_boreholes_dxf(&[group]).unwrap();
    let pairs = parse_pairs(&dxf);
    let colors: Vec<String> = values_for_code(&pairs, 62)
        .into_iter()
        .filter(|v| v == "5")
        .collect();
    assert!(!colors.is_empty());
}

#[test]
fn output_is_byte_identical_between_runs() {
    let groups = two_groups();
    let first = generate_boreholes_dxf(&groups).unwrap();
    let second = generate_boreholes_dxf(&groups).unwrap();
    assert_eq!(first, second);
}

#[test]
fn output_parses_as_code_value_pairs() {
    let dxf = generate_boreholes_dxf(&two_groups()).unwrap();
    let pairs = parse_pairs(&dxf);
    assert_eq!(pairs.last().map(|(c, v)| (*c, v.as_str())), Some((0, "EOF")));
}
