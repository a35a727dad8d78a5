use proptest::prelude::*;
use solar_linalg::Vector;

fn same_dim_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..16).prop_flat_map(|n| {
        (
            prop::collection::vec(-1e6f64..1e6, n),
            prop::collection::vec(-1e6f64..1e6, n),
        )
    })
}

proptest! {
    #[test]
    fn addition_is_elementwise_and_commutative((a, b) in same_dim_pair()) {
        let u = Vector::new(a.clone());
        let w = Vector::new(b.clone());
        let sum = u.try_add(&w).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(sum[i], a[i] + b[i]);
        }
        prop_assert_eq!(sum, w.try_add(&u).unwrap());
    }

    #[test]
    fn zero_vector_is_additive_identity(a in prop::collection::vec(-1e6f64..1e6, 0..16)) {
        let u = Vector::new(a.clone());
        prop_assert_eq!(u.try_add(&Vector::zeros(a.len())).unwrap(), u);
    }

    #[test]
    fn unequal_dimensions_fail(a in prop::collection::vec(-1e3f64..1e3, 1..8), extra in 1usize..4) {
        let u = Vector::new(a.clone());
        let mut longer = a.clone();
        longer.extend(std::iter::repeat(1.0).take(extra));
        let w = Vector::new(longer);
        prop_assert!(u.try_add(&w).is_err());
        prop_assert!(u.try_sub(&w).is_err());
        prop_assert!(u.dot(&w).is_err());
    }

    #[test]
    fn dot_with_empty_is_zero(a in prop::collection::vec(-1e6f64..1e6, 0..16)) {
        prop_assert_eq!(Vector::new(a).dot(&Vector::empty()).unwrap(), 0.0);
    }
}
