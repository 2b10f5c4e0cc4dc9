use crate::core::geometry::{ArcPoint, CENTER_X, CENTER_Y, degrees_to_radians};

/// SVG large-arc flag for a sweep given in degrees.
#[must_use]
pub fn large_arc_flag(sweep_angle: f64) -> u8 {
    if sweep_angle > 180.0 { 1 } else { 0 }
}

/// Builds the SVG path data for one pie or donut sector.
///
/// Pie sectors (`inner_radius <= 0`) start at the canvas center:
/// `M cx cy L x1 y1 A R R 0 f 1 x2 y2 Z`.
///
/// Donut sectors trace the outer arc clockwise and the inner arc back
/// counter-clockwise:
/// `M x1 y1 A R R 0 f 1 x2 y2 L x3 y3 A r r 0 f 0 x4 y4 Z`.
///
/// A 360 degree sweep is emitted with the same grammar; start and end points
/// coincide.
#[must_use]
pub fn build_path(
    start_angle: f64,
    sweep_angle: f64,
    outer_radius: f64,
    inner_radius: f64,
) -> String {
    let start = degrees_to_radians(start_angle);
    let end = degrees_to_radians(start_angle + sweep_angle);

    let outer_start = ArcPoint::on_circle(outer_radius, start);
    let outer_end = ArcPoint::on_circle(outer_radius, end);
    let large_arc = large_arc_flag(sweep_angle);

    let mut path = String::with_capacity(160);

    if inner_radius <= 0.0 {
        push_command(&mut path, 'M', ArcPoint::new(CENTER_X, CENTER_Y));
        push_command(&mut path, 'L', outer_start);
        push_arc(&mut path, outer_radius, large_arc, 1, outer_end);
        path.push('Z');
        return path;
    }

    let inner_end = ArcPoint::on_circle(inner_radius, end);
    let inner_start = ArcPoint::on_circle(inner_radius, start);

    push_command(&mut path, 'M', outer_start);
    push_arc(&mut path, outer_radius, large_arc, 1, outer_end);
    push_command(&mut path, 'L', inner_end);
    push_arc(&mut path, inner_radius, large_arc, 0, inner_start);
    path.push('Z');
    path
}

fn push_command(path: &mut String, command: char, to: ArcPoint) {
    path.push_str(&format!("{command} {} {} ", to.x, to.y));
}

fn push_arc(path: &mut String, radius: f64, large_arc: u8, sweep_flag: u8, to: ArcPoint) {
    path.push_str(&format!(
        "A {radius} {radius} 0 {large_arc} {sweep_flag} {} {} ",
        to.x, to.y
    ));
}

#[cfg(test)]
mod tests {
    use super::{build_path, large_arc_flag};

    #[test]
    fn large_arc_flag_switches_strictly_above_half_turn() {
        assert_eq!(large_arc_flag(180.0), 0);
        assert_eq!(large_arc_flag(180.000_001), 1);
        assert_eq!(large_arc_flag(0.0), 0);
    }

    #[test]
    fn quarter_pie_path_matches_expected_text() {
        // cos(90deg) is not exactly zero, so only the exact prefix is asserted.
        let path = build_path(0.0, 90.0, 90.0, 0.0);
        assert!(path.starts_with("M 100 100 L 190 100 A 90 90 0 0 1 "));
        assert!(path.ends_with(" Z"));
    }

    #[test]
    fn half_donut_path_matches_expected_text() {
        // sin(180deg) is not exactly zero either; pin the exact output.
        let end_y = 100.0 + 90.0 * std::f64::consts::PI.sin();
        let inner_end_y = 100.0 + 70.0 * std::f64::consts::PI.sin();
        let expected = format!(
            "M 190 100 A 90 90 0 0 1 10 {end_y} L 30 {inner_end_y} A 70 70 0 0 0 170 100 Z"
        );
        assert_eq!(build_path(0.0, 180.0, 90.0, 70.0), expected);
    }
}
