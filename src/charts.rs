//! Chart Geometry
//!
//! Pure layout math for the SVG pie and bar charts on the statistics page.

use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Radians, clockwise from 12 o'clock
    pub start: f64,
    pub end: f64,
    pub percent: f64,
}

/// Slices for `values`; empty when the total is zero
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = 0.0;
    values
        .iter()
        .map(|v| {
            let share = v.max(0.0) / total;
            let slice = PieSlice {
                start: angle,
                end: angle + share * 2.0 * PI,
                percent: share * 100.0,
            };
            angle = slice.end;
            slice
        })
        .collect()
}

fn point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for one slice. A full turn is drawn as two half arcs.
pub fn slice_path(cx: f64, cy: f64, r: f64, slice: &PieSlice) -> String {
    let sweep = slice.end - slice.start;
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= 2.0 * PI - 1e-9 {
        return format!(
            "M {:.3} {:.3} A {r} {r} 0 1 1 {:.3} {:.3} A {r} {r} 0 1 1 {:.3} {:.3} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r,
            r = r
        );
    }
    let (x0, y0) = point(cx, cy, r, slice.start);
    let (x1, y1) = point(cx, cy, r, slice.end);
    let large = if sweep > PI { 1 } else { 0 };
    format!(
        "M {:.3} {:.3} L {:.3} {:.3} A {r} {r} 0 {large} 1 {:.3} {:.3} Z",
        cx,
        cy,
        x0,
        y0,
        x1,
        y1,
        r = r,
        large = large
    )
}

/// Bar heights scaled so the largest value fills `max_height`
pub fn bar_heights(values: &[u32], max_height: f64) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| f64::from(*v) / f64::from(max) * max_height)
        .collect()
}

/// Brand histogram as `(brand, count)` pairs, ascending by count
pub fn sorted_histogram<'a>(counts: impl IntoIterator<Item = (&'a String, &'a u32)>) -> Vec<(String, u32)> {
    let mut pairs: Vec<(String, u32)> = counts.into_iter().map(|(k, v)| (k.clone(), *v)).collect();
    pairs.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = pie_slices(&[30.0, 10.0]);
        assert_eq!(slices.len(), 2);
        assert!((slices[0].percent - 75.0).abs() < 1e-9);
        assert!((slices[1].percent - 25.0).abs() < 1e-9);
        assert!((slices[1].end - 2.0 * PI).abs() < 1e-9);
        assert_eq!(slices[0].end, slices[1].start);
    }

    #[test]
    fn test_zero_total_yields_no_slices() {
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
        assert!(pie_slices(&[]).is_empty());
    }

    #[test]
    fn test_full_slice_path_is_closed_circle() {
        let slices = pie_slices(&[5.0, 0.0]);
        let path = slice_path(50.0, 50.0, 40.0, &slices[0]);
        assert!(path.starts_with("M 50.000 10.000"));
        assert_eq!(path.matches(" A ").count(), 2);
        assert!(slice_path(50.0, 50.0, 40.0, &slices[1]).is_empty());
    }

    #[test]
    fn test_bar_heights_scale_to_max() {
        assert_eq!(bar_heights(&[1, 2, 4], 100.0), vec![25.0, 50.0, 100.0]);
        assert_eq!(bar_heights(&[0, 0], 100.0), vec![0.0, 0.0]);
    }

    #[test]
    fn test_histogram_sorted_ascending() {
        let mut brands = BTreeMap::new();
        brands.insert("Renault".to_string(), 5);
        brands.insert("Audi".to_string(), 1);
        brands.insert("Peugeot".to_string(), 3);
        let sorted = sorted_histogram(&brands);
        let names: Vec<_> = sorted.iter().map(|(b, _)| b.as_str()).collect();
        assert_eq!(names, ["Audi", "Peugeot", "Renault"]);
    }
}
