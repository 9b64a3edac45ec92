use ratmat::{
    error::MathError,
    get_result,
    interpreter::{
        elimination::{
            core::{Mode, eliminate},
            determinant, inverse, is_basis, is_independent, nullity, rank, rref, span, spans,
        },
        value::{matrix::Matrix, scalar::Scalar},
    },
};

fn m<R: AsRef<[i64]>>(rows: &[R]) -> Matrix {
    Matrix::from_integers(rows).unwrap()
}

fn invertible() -> Vec<Matrix> {
    vec![m(&[[1, 2], [3, 4]]),
         m(&[[0, 1], [1, 0]]),
         m(&[[2, -1, 0], [-1, 2, -1], [0, -1, 2]]),
         m(&[[0, 0, 3], [0, 5, 1], [7, 2, 2]]),
         m(&[[4]])]
}

fn assorted() -> Vec<Matrix> {
    let mut all = invertible();
    all.extend([m(&[[1, 2, 3], [2, 4, 6]]),
                m(&[[0, 2, 4], [1, 1, 1]]),
                m(&[[0, 0], [0, 0], [0, 0]]),
                m(&[[1, 0, 2, -1], [3, 1, 0, 0], [4, 1, 2, -1]]),
                m(&[[5], [0], [-3]])]);
    all
}

#[test]
fn inverse_is_a_two_sided_inverse() {
    for a in invertible() {
        let n = a.rows();
        let inv = inverse(&a).unwrap();
        assert_eq!(a.mat_mul(&inv).unwrap(), Matrix::identity(n).unwrap(), "A * A^-1 for\n{a}");
        assert_eq!(inv.mat_mul(&a).unwrap(), Matrix::identity(n).unwrap(), "A^-1 * A for\n{a}");
    }
}

#[test]
fn reducing_against_the_identity_yields_the_inverse() {
    for a in invertible() {
        let n = a.rows();
        let reduced = rref(&a.augment(&Matrix::identity(n).unwrap()).unwrap()).unwrap();
        assert_eq!(reduced.columns(0..n), Matrix::identity(n).unwrap());
        assert_eq!(reduced.columns(n..2 * n), inverse(&a).unwrap());
    }
}

#[test]
fn rref_is_idempotent() {
    for a in assorted() {
        let once = rref(&a).unwrap();
        assert_eq!(rref(&once).unwrap(), once, "rref twice for\n{a}");
    }
}

#[test]
fn matrix_product_is_associative() {
    let a = m(&[[1, 2], [3, 4], [5, 6]]);
    let b = m(&[[1, -1, 0], [2, 0, 7]]);
    let c = m(&[[3], [0], [-2]]);
    let half = Matrix::identity(2).unwrap()
                                  .scalar_div(&Scalar::from(2))
                                  .unwrap();

    let left = a.mat_mul(&b).unwrap().mat_mul(&c).unwrap();
    let right = a.mat_mul(&b.mat_mul(&c).unwrap()).unwrap();
    assert_eq!(left, right);

    let left = half.mat_mul(&b).unwrap().mat_mul(&c).unwrap();
    let right = half.mat_mul(&b.mat_mul(&c).unwrap()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn determinant_of_identity_and_zero_rows() {
    for n in 1..=5 {
        assert_eq!(determinant(&Matrix::identity(n).unwrap()).unwrap(), Scalar::one());
    }
    assert_eq!(determinant(&m(&[[1, 2, 3], [0, 0, 0], [4, 5, 6]])).unwrap(),
               Scalar::zero());
    assert_eq!(determinant(&m(&[[0, 0], [1, 2]])).unwrap(), Scalar::zero());
}

#[test]
fn determinant_is_zero_exactly_when_singular() {
    for a in invertible() {
        assert!(!determinant(&a).unwrap().is_zero());
    }
    let singular = m(&[[1, 2], [2, 4]]);
    assert!(determinant(&singular).unwrap().is_zero());
    assert_eq!(inverse(&singular), Err(MathError::SingularMatrix));
}

#[test]
fn rank_plus_nullity_is_column_count() {
    for a in assorted() {
        assert_eq!(rank(&a).unwrap() + nullity(&a).unwrap(), a.cols(), "for\n{a}");
    }
}

#[test]
fn span_basis_is_independent_and_within_the_columns() {
    for a in assorted() {
        let basis = span(std::slice::from_ref(&a)).unwrap();
        let r = rank(&a).unwrap();
        if r == 0 {
            assert!(basis.values().iter().all(|x| x.is_zero()));
            continue;
        }
        assert_eq!(basis.cols(), r);
        assert_eq!(rank(&basis).unwrap(), r);
        assert_eq!(rank(&a.augment(&basis).unwrap()).unwrap(), r);
    }
}

fn two_digit_matrices() -> Vec<(Matrix, Scalar)> {
    vec![(m(&[[51, 29, 60, 93, 16, 19],
              [78, 22, 56, 84, 17, 74],
              [37, 14, 21, 65, 63, 18],
              [40, 21, 80, 64, 17, 82],
              [25, 38, 90, 90, 84, 17],
              [83, 84, 60, 16, 38, 15]]),
          Scalar::from(14_347_361_866)),
         (m(&[[81, 27, 47, 63, 28, 79, 25, 83],
              [49, 81, 97, 33, 23, 84, 83, 91],
              [34, 57, 22, 80, 18, 82, 17, 89],
              [36, 73, 97, 78, 64, 50, 69, 84],
              [68, 56, 48, 41, 33, 99, 41, 20],
              [83, 48, 77, 73, 53, 67, 46, 87],
              [19, 25, 75, 63, 31, 53, 29, 72],
              [63, 15, 95, 19, 81, 83, 50, 53]]),
          Scalar::from(-30_413_975_040_826)),
         (m(&[[98, 54, 86, 73, 84, 68, 18, 21, 44, 70],
              [99, 95, 18, 17, 99, 49, 92, 83, 97, 67],
              [46, 59, 95, 54, 12, 69, 55, 31, 88, 24],
              [73, 17, 37, 46, 26, 41, 60, 60, 73, 20],
              [31, 67, 61, 80, 45, 27, 65, 80, 45, 63],
              [55, 97, 58, 39, 29, 20, 32, 29, 39, 94],
              [39, 11, 72, 85, 33, 43, 46, 10, 28, 63],
              [78, 57, 88, 82, 50, 26, 98, 75, 89, 93],
              [96, 16, 68, 97, 81, 60, 60, 61, 60, 23],
              [71, 91, 61, 17, 34, 18, 36, 66, 30, 24]]),
          Scalar::from(503_397_139_087_229_571))]
}

#[test]
fn dense_two_digit_matrices_invert_exactly() {
    for (a, det) in two_digit_matrices() {
        let n = a.rows();
        let identity = Matrix::identity(n).unwrap();
        assert_eq!(determinant(&a).unwrap(), det, "det for\n{a}");
        assert_eq!(rref(&a).unwrap(), identity, "rref for\n{a}");

        let inv = inverse(&a).unwrap();
        assert_eq!(a.mat_mul(&inv).unwrap(), identity, "A * A^-1 for\n{a}");
        assert_eq!(inv.mat_mul(&a).unwrap(), identity, "A^-1 * A for\n{a}");
        assert!(is_basis(std::slice::from_ref(&a)).unwrap());
    }
}

#[test]
fn recorded_operations_replay_to_the_reduced_form() {
    for a in assorted().into_iter().chain(two_digit_matrices().into_iter().map(|(a, _)| a)) {
        let result = eliminate(&a, Mode::Reduced).unwrap();
        let replayed = result.operations()
                             .iter()
                             .fold(a.clone(), |acc, op| op.apply(&acc));
        assert_eq!(replayed, rref(&a).unwrap(), "for\n{a}");
    }
}

#[test]
fn independence_matches_rank() {
    for a in assorted() {
        let full = rank(&a).unwrap() == a.cols();
        assert_eq!(is_independent(std::slice::from_ref(&a)).unwrap(), full, "for\n{a}");
        assert!(spans(&a, &span(std::slice::from_ref(&a)).unwrap()).unwrap());
        assert!(spans(&span(std::slice::from_ref(&a)).unwrap(), &a).unwrap());
    }
}

#[test]
fn known_values() {
    let a = m(&[[1, 2], [3, 4]]);
    assert_eq!(determinant(&a).unwrap(), Scalar::from(-2));
    let expected = Matrix::from_rows(vec![vec![Scalar::from(-2), Scalar::from(1)],
                                          vec![Scalar::new(3, 2).unwrap(),
                                               Scalar::new(-1, 2).unwrap()]]).unwrap();
    assert_eq!(inverse(&a).unwrap(), expected);
    assert_eq!(rref(&m(&[[0, 2, 4], [1, 1, 1]])).unwrap(),
               m(&[[1, 0, -1], [0, 1, 2]]));
    assert_eq!(span(&[m(&[[1, 2], [2, 4]])]).unwrap(), m(&[[1], [2]]));
}

#[test]
fn printed_inverse_reads_back_as_the_same_matrix() {
    let printed = get_result("A = [[1, 2], [3, 4]]\ninverse(A)", false).unwrap()
                                                                       .unwrap()
                                                                       .to_string();
    assert_eq!(printed, "[  -2    1 ]\n[ 3/2 -1/2 ]");

    // Turn the printed rows back into a literal and check it matches.
    let rows = printed.lines()
                      .map(|line| {
                          let entries = line.trim_matches(|c| c == '[' || c == ']')
                                            .split_whitespace()
                                            .collect::<Vec<_>>()
                                            .join(", ");
                          format!("[{entries}]")
                      })
                      .collect::<Vec<_>>()
                      .join(", ");
    let source = format!("B = [{rows}]\nB * [[1, 2], [3, 4]]");
    let product = get_result(&source, false).unwrap().unwrap();
    assert_eq!(product.to_string(), "[ 1 0 ]\n[ 0 1 ]");
}
