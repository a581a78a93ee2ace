use num_traits::{Signed, Zero};

use super::{base::NumberBase, Num, NumComponent};

/// `p/q`, or just `p` when the denominator is 1.
pub fn fmt_fraction(n: &Num) -> String {
    if n.is_integer() {
        format!("{}", n.numer())
    } else {
        format!("{}/{}", n.numer(), n.denom())
    }
}

/// Positional expansion of `n` in `base`, at most `max_places` fractional
/// digits, no trailing zeros. Stops early when the expansion terminates.
pub fn fmt(n: &Num, base: NumberBase, max_places: u32) -> String {
    if n.is_negative() {
        return "-".to_owned() + fmt(&n.abs(), base, max_places).as_str();
    }
    let int = fmt_int(&n.trunc().to_integer(), base);
    let fract = fmt_fract(n.fract(), base, max_places);
    if fract.is_empty() {
        int
    } else {
        int + "." + fract.as_str()
    }
}

pub fn fmt_int(n: &NumComponent, base: NumberBase) -> String {
    n.to_str_radix(base.place_value())
}

fn fmt_fract(n: Num, base: NumberBase, max_places: u32) -> String {
    let mut out = "".to_owned();

    let mut n = n;
    let placevalue = Num::from(NumComponent::from(base.place_value()));
    if n.numer().is_zero() {
        return out;
    }

    for _ in 0..max_places {
        n = n * &placevalue; // shift one digit into the integer part
        let digit = n.trunc().to_integer();
        out += fmt_int(&digit, base).as_str();
        n = n.fract();
        if n.numer().is_zero() {
            break;
        }
    }

    out
}
