use log::info;

use crate::{
    errors::CustomError,
    models::summation::{SumMethod, Summation},
};

/// Sums the integers 1..=n with the chosen strategy. `n <= 0` sums to zero.
pub fn sum_to_n(method: SumMethod, n: i64) -> Result<Summation, CustomError> {
    let sum = match method {
        SumMethod::Loop => sum_by_loop(n)?,
        SumMethod::Formula => sum_by_formula(n)?,
        SumMethod::Fold => sum_by_fold(n)?,
    };
    let expression = expression(n);

    info!("sum_to_n({}) === {} === {} [{}]", n, expression, sum, method);

    Ok(Summation {
        n,
        method,
        expression,
        sum,
    })
}

fn sum_by_loop(n: i64) -> Result<i64, CustomError> {
    let mut sum: i64 = 0;
    let mut i = 1;
    while i <= n {
        sum = sum.checked_add(i).ok_or_else(|| overflow(n))?;
        i += 1;
    }
    Ok(sum)
}

fn sum_by_formula(n: i64) -> Result<i64, CustomError> {
    if n <= 0 {
        return Ok(0);
    }
    // halve whichever of n, n + 1 is even before multiplying
    let (a, b) = if n % 2 == 0 { (n / 2, n + 1) } else { (n, n / 2 + 1) };
    a.checked_mul(b).ok_or_else(|| overflow(n))
}

fn sum_by_fold(n: i64) -> Result<i64, CustomError> {
    (1..=n).try_fold(0i64, |acc, i| acc.checked_add(i).ok_or_else(|| overflow(n)))
}

fn expression(n: i64) -> String {
    (1..=n)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}

fn overflow(n: i64) -> CustomError {
    CustomError::Overflow(format!("sum_to_n({}) does not fit in 64 bits", n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_agree() {
        for n in 0..=50 {
            let expected = sum_to_n(SumMethod::Loop, n).unwrap().sum;
            for method in SumMethod::ALL {
                assert_eq!(sum_to_n(method, n).unwrap().sum, expected, "n = {}", n);
            }
        }
    }

    #[test]
    fn known_sums() {
        assert_eq!(sum_to_n(SumMethod::Loop, 5).unwrap().sum, 15);
        assert_eq!(sum_to_n(SumMethod::Formula, 6).unwrap().sum, 21);
        assert_eq!(sum_to_n(SumMethod::Fold, 7).unwrap().sum, 28);
    }

    #[test]
    fn expression_lists_every_term() {
        let summation = sum_to_n(SumMethod::Formula, 5).unwrap();
        assert_eq!(summation.expression, "1 + 2 + 3 + 4 + 5");
        assert_eq!(summation.method, SumMethod::Formula);
        assert_eq!(summation.n, 5);
    }

    #[test]
    fn non_positive_n_sums_to_zero() {
        for method in SumMethod::ALL {
            for n in [0, -1, -2, -100] {
                let summation = sum_to_n(method, n).unwrap();
                assert_eq!(summation.sum, 0);
                assert_eq!(summation.expression, "");
            }
        }
    }

    #[test]
    fn formula_detects_overflow() {
        assert!(matches!(
            sum_by_formula(i64::MAX),
            Err(CustomError::Overflow(_))
        ));
        // largest n whose sum still fits
        assert_eq!(sum_by_formula(4_294_967_295).unwrap(), 9_223_372_034_707_292_160);
    }
}
