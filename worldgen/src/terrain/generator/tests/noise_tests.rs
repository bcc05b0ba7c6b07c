use crate::terrain::generator::NoiseField;
use approx::assert_relative_eq;
use test_case::test_case;

fn grid() -> impl Iterator<Item = (f64, f64)> {
    (0..40).flat_map(|z| (0..40).map(move |x| (x as f64 * 0.37 - 7.0, z as f64 * 0.53 + 3.1)))
}

#[test]
fn test_sample_range() {
    let noise = NoiseField::new();
    for (x, z) in grid() {
        let v = noise.sample(x, z);
        assert!((-1.0..=1.0).contains(&v), "sample({x}, {z}) = {v}");
        let u = noise.sample01(x, z);
        assert!((0.0..=1.0).contains(&u), "sample01({x}, {z}) = {u}");
    }
}

#[test]
fn test_sample_is_deterministic() {
    let a = NoiseField::new();
    let b = NoiseField::new();
    for (x, z) in grid() {
        assert_eq!(a.sample(x, z).to_bits(), b.sample(x, z).to_bits());
    }
}

#[test]
fn test_sample_varies() {
    let noise = NoiseField::new();
    let first = noise.sample(0.3, 0.7);
    assert!(grid().any(|(x, z)| noise.sample(x, z) != first));
}

#[test]
fn test_single_octave_is_plain_sample() {
    let noise = NoiseField::new();
    for (x, z) in grid().take(50) {
        assert_relative_eq!(noise.fractal_sample(x, z, 1, 0.6, 2.0), noise.sample(x, z));
    }
}

#[test_case(1)]
#[test_case(3)]
#[test_case(6)]
#[test_case(12)]
fn test_fractal_stays_bounded(octaves: usize) {
    let noise = NoiseField::new();
    for (x, z) in grid() {
        let v = noise.fractal_sample(x, z, octaves, 0.6, 2.0);
        assert!((-1.0..=1.0).contains(&v), "{octaves} octaves at ({x}, {z}) = {v}");
    }
}

#[test]
fn test_zero_octaves_is_flat() {
    let noise = NoiseField::new();
    assert_eq!(noise.fractal_sample(1.3, 2.7, 0, 0.5, 2.0), 0.0);
}
