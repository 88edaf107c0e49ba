//! Tests for runtime multiple dispatch: routing on the exact pair of dynamic
//! operand types, overwriting, and extending a registry with new pairs.

use qla::{
    Complex64, DISTANCE, Dispatcher, LaError, MAX_DISTANCE, Matrix, Vector, dyn_distance,
    dyn_max_distance, standard_dispatcher,
};
use std::any::{Any, TypeId};

struct TypeA;
struct TypeB;

/// `(TypeA, TypeB)` routes to its implementation; `(TypeB, TypeA)` does not.
#[test]
fn dispatch_is_order_sensitive() {
    let mut d = Dispatcher::<String>::new();
    d.register("foo", |_: &TypeA, _: &TypeB| Ok("a-b".to_string()));
    assert_eq!(d.invoke("foo", &TypeA, &TypeB).unwrap(), "a-b");
    assert!(matches!(
        d.invoke("foo", &TypeB, &TypeA),
        Err(LaError::NoMatchingImplementation { .. })
    ));
    d.register("foo", |_: &TypeB, _: &TypeA| Ok("b-a".to_string()));
    assert_eq!(d.invoke("foo", &TypeB, &TypeA).unwrap(), "b-a");
    assert!(d.contains("foo", TypeId::of::<TypeA>(), TypeId::of::<TypeB>()));
    assert_eq!(d.len(), 2);
}

/// Operands held as trait objects dispatch on their concrete types.
#[test]
fn dispatch_through_trait_objects() {
    let operands: Vec<Box<dyn Any>> = vec![
        Box::new(Vector::new(vec![0.0, 0.0])),
        Box::new(Vector::new(vec![3.0, 4.0])),
        Box::new(Matrix::<f64>::identity(2).unwrap()),
    ];
    assert_eq!(dyn_distance(operands[0].as_ref(), operands[1].as_ref()), Ok(5.0));
    assert_eq!(dyn_max_distance(operands[0].as_ref(), operands[1].as_ref()), Ok(4.0));
    assert_eq!(dyn_distance(operands[2].as_ref(), operands[2].as_ref()), Ok(0.0));
    assert!(dyn_distance(operands[0].as_ref(), operands[2].as_ref()).is_err());
}

/// Complex vectors and matrices are covered by the standard registry.
#[test]
fn standard_registry_complex() {
    let v = Vector::new(vec![Complex64::new(0.0, 3.0)]);
    let w = Vector::new(vec![Complex64::new(4.0, 0.0)]);
    assert_eq!(standard_dispatcher().invoke(DISTANCE, &v, &w), Ok(5.0));
    let m = Matrix::from_rows(vec![vec![Complex64::new(0.0, 1.0)]]).unwrap();
    assert_eq!(standard_dispatcher().invoke(MAX_DISTANCE, &m, &m), Ok(0.0));
}

/// A caller-owned registry can add pairs without touching existing entries.
#[test]
fn extend_with_new_operand_pair() {
    let mut d = Dispatcher::<f64>::standard();
    let before = d.len();
    d.register(DISTANCE, |m: &Matrix<f64>, v: &Vector<f64>| {
        let col = Matrix::from_row_major(v.len(), 1, v.as_slice().to_vec())?;
        m.distance(&col)
    });
    assert_eq!(d.len(), before + 1);
    let m = Matrix::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
    let v = Vector::new(vec![1.0, 0.0]);
    assert_eq!(d.invoke(DISTANCE, &m, &v), Ok(2.0));
    assert!(d.invoke(DISTANCE, &v, &m).is_err());
    // the shared registry is unchanged
    assert!(dyn_distance(&m, &v).is_err());
}

/// Errors raised by an implementation are passed through.
#[test]
fn implementation_errors_propagate() {
    let a = Vector::new(vec![1.0]);
    let b = Vector::new(vec![1.0, 2.0]);
    assert!(matches!(
        dyn_distance(&a, &b),
        Err(LaError::DimensionMismatch { .. })
    ));
}
