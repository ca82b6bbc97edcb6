use super::*;

#[test]
fn background_style_resolves_against_asset_base() {
    let style = background_style("images/bg.jpg");
    assert!(style.starts_with("background-image: url('https://arthurfrost.qflo.co.za/images/bg.jpg');"));
    assert!(style.contains("background-size: cover;"));
}

#[test]
fn overlay_alpha_is_opacity_over_one_hundred() {
    assert_eq!(overlay_alpha(0.0), 0.0);
    assert_eq!(overlay_alpha(40.0), 0.4);
    assert_eq!(overlay_alpha(100.0), 1.0);
}

#[test]
fn overlay_alpha_clamps_out_of_range_values() {
    assert_eq!(overlay_alpha(-10.0), 0.0);
    assert_eq!(overlay_alpha(250.0), 1.0);
    assert_eq!(overlay_alpha(f64::NAN), 0.0);
}

#[test]
fn overlay_style_uses_black_with_alpha() {
    assert_eq!(overlay_style(50.0), "background-color: rgba(0, 0, 0, 0.5);");
}
