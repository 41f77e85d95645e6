/// Shorthand for creating a rational number in tests.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        $crate::data::number_types::rational::ExactRational::from($value as i64)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::ExactRational::new($numer, $denom).unwrap()
    };
}
