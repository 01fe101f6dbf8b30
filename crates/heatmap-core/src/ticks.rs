// File: crates/heatmap-core/src/ticks.rs
// Summary: "Nice" tick generation for continuous domains (1, 2 or 5 times a power of ten).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Default number of ticks requested from a continuous scale.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Integer bounds and increment for ticks over `[start, stop]` (start <= stop).
/// A negative increment means "divide by -inc" and keeps sub-unit steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced, human-friendly values covering `[start, stop]`.
/// Output follows the direction of the input interval.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || start.is_nan() || stop.is_nan() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) { return Vec::new(); }
    let n = (i2 - i1) as usize + 1;
    let at = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    if reverse {
        (0..n).map(|i| at(i2 - i as f64)).collect()
    } else {
        (0..n).map(|i| at(i1 + i as f64)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval() {
        let t = ticks(0.0, 1.0, 10);
        assert_eq!(t, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]);
    }

    #[test]
    fn picks_2_and_5_steps() {
        assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        let years = ticks(1753.0, 2015.0, 10);
        assert_eq!(years.first(), Some(&1760.0));
        assert_eq!(years.last(), Some(&2000.0));
        assert_eq!(years.len(), 13);
    }

    #[test]
    fn reversed_and_degenerate() {
        assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
        assert!(ticks(f64::NAN, 1.0, 10).is_empty());
    }
}
