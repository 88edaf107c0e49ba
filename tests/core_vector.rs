//! Tests for vector arithmetic, norms and distances.
//!
//! Fixed scenarios check exact results on integer and real data; the random
//! cases check the metric properties on real and complex vectors.

use approx::assert_abs_diff_eq;
use qla::{Complex64, LaError, Vector, distance, max_distance};
use rand::Rng;

fn random_vec(n: usize) -> Vector<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect()
}

/// `[1,2,3] - [1,1,1] = [0,1,2]` and `norm([3,4]) = 5`.
#[test]
fn subtraction_and_norm() {
    let v = Vector::new(vec![1i64, 2, 3]);
    let w = Vector::new(vec![1i64, 1, 1]);
    assert_eq!(v.sub(&w).unwrap(), Vector::new(vec![0, 1, 2]));
    assert_eq!(&v + &w, Vector::new(vec![2, 3, 4]));
    assert_abs_diff_eq!(Vector::new(vec![3.0, 4.0]).norm(), 5.0, epsilon = 1e-12);
}

/// Chebyshev distance picks the largest component difference.
#[test]
fn max_distance_scenario() {
    let v = Vector::new(vec![0.0, 0.0]);
    let w = Vector::new(vec![3.0, 4.0]);
    assert_eq!(max_distance(&v, &w).unwrap(), 4.0);
    assert_abs_diff_eq!(distance(&v, &w).unwrap(), 5.0, epsilon = 1e-12);
}

/// Two empty vectors are at distance zero under both metrics.
#[test]
fn empty_vectors() {
    let e = Vector::<f64>::new(vec![]);
    assert!(e.is_empty());
    assert_eq!(e.max_distance(&e).unwrap(), 0.0);
    assert_eq!(e.distance(&e).unwrap(), 0.0);
    assert!(e.outer(&e).unwrap().is_empty());
}

/// Length mismatches are reported, never truncated.
#[test]
fn length_mismatch_is_an_error() {
    let v = Vector::new(vec![1.0, 2.0]);
    let w = Vector::new(vec![1.0]);
    for result in [v.add(&w), v.sub(&w)] {
        assert!(matches!(result, Err(LaError::DimensionMismatch { .. })));
    }
    assert!(distance(&v, &w).is_err());
    assert!(v.dot(&w).is_err());
}

/// Distance is zero exactly for equal vectors, and both metrics are symmetric.
#[test]
fn metric_properties_random() {
    let n = 8;
    let a = random_vec(n);
    let b = random_vec(n);
    assert_eq!(distance(&a, &a).unwrap(), 0.0);
    assert_eq!(max_distance(&a, &a).unwrap(), 0.0);
    assert!(distance(&a, &b).unwrap() > 0.0);
    assert_abs_diff_eq!(
        distance(&a, &b).unwrap(),
        distance(&b, &a).unwrap(),
        epsilon = 1e-12
    );
    assert_eq!(max_distance(&a, &b).unwrap(), max_distance(&b, &a).unwrap());
    assert!(max_distance(&a, &b).unwrap() <= distance(&a, &b).unwrap() + 1e-12);
}

/// Scaling by a scalar multiplies the norm by its modulus.
#[test]
fn scaling_complex_vector() {
    let v = Vector::new(vec![Complex64::new(1.0, 2.0), Complex64::new(-2.0, 0.5)]);
    let i = Complex64::new(0.0, 1.0);
    let scaled = i * &v;
    assert_eq!(scaled, &v * i);
    assert_abs_diff_eq!(scaled.norm(), v.norm(), epsilon = 1e-12);
    assert_abs_diff_eq!((&v * Complex64::new(2.0, 0.0)).norm(), 2.0 * v.norm(), epsilon = 1e-12);
    assert_eq!(v.conj().conj(), v);
}

/// Outer product layout: `result[i * N + j] = v[j] * w[i]`.
#[test]
fn outer_product_layout() {
    let v = Vector::new(vec![1.0, 2.0, 3.0]);
    let w = Vector::new(vec![1.0, 0.0, -1.0]);
    let o = v.outer(&w).unwrap();
    assert_eq!(o.len(), 9);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(o[i * 3 + j], v[j] * w[i]);
        }
    }
}

/// Norms and shapes through the shared traits, generic over vectors and matrices.
#[test]
fn shared_traits() {
    use qla::{MatShape, Matrix, Norm};

    fn unit_norm<N: Norm>(x: &N) -> bool {
        (x.norm() - 1.0).abs() < 1e-12
    }
    let e = Vector::new(vec![0.0, 1.0, 0.0]);
    assert!(unit_norm(&e));
    assert!(unit_norm(&Matrix::<f64>::identity(1).unwrap()));
    assert!(!unit_norm(&Matrix::<f64>::identity(2).unwrap()));
    assert_eq!(MatShape::shape(&e), (3, 1));
    assert_eq!(Norm::norm_sqr(&Vector::new(vec![1i64, 2])), 5.0);
}
