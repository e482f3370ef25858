// Printable summaries of large integers

use num_bigint::BigUint;

/// Number of decimal digits in `n`.
pub fn digit_count(n: &BigUint) -> usize {
    n.to_str_radix(10).len()
}

/// The leading `num_digits` decimal digits of `n`. Anything with at least
/// `num_digits` digits gets a trailing `...`.
pub fn first_n_digits(n: &BigUint, num_digits: usize) -> String {
    let digits = n.to_str_radix(10);
    if digits.len() < num_digits {
        return digits;
    }
    format!("{}...", &digits[..num_digits])
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::Num;
    use rstest::rstest;

    #[rstest]
    #[case(0u64, 1)]
    #[case(9u64, 1)]
    #[case(10u64, 2)]
    #[case(3233u64, 4)]
    #[case(u64::MAX, 20)]
    fn digit_count_counts_decimal_digits(#[case] n: u64, #[case] expected: usize) {
        assert_eq!(digit_count(&BigUint::from(n)), expected);
    }

    #[rstest]
    #[case("3233", 10, "3233")]
    #[case("124443645", 10, "124443645")]
    #[case("1244436454", 10, "1244436454...")]
    #[case("12444364541", 10, "1244436454...")]
    #[case("149086819112345", 4, "1490...")]
    #[case("5", 0, "...")]
    fn first_n_digits_truncates_long_numbers(
        #[case] n: &str,
        #[case] num_digits: usize,
        #[case] expected: &str,
    ) {
        let n = BigUint::from_str_radix(n, 10).unwrap();

        assert_eq!(first_n_digits(&n, num_digits), expected);
    }
}
