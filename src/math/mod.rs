pub mod base;
pub mod fraction;
pub mod lagrange;
pub mod numeral;
pub mod parsefmt;

pub type Num = num_rational::BigRational;
pub type NumComponent = num_bigint::BigInt;

#[allow(unused_macros)]
macro_rules! num {
    ($numer:expr, $denom:expr) => {
        $crate::math::Num::new(
            $crate::math::NumComponent::from($numer),
            $crate::math::NumComponent::from($denom),
        )
    };
}
#[cfg(test)]
pub(crate) use num;
