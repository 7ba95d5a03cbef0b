// src/core/form.rs

use num::BigInt;

/// The algebraic identity a recognized N satisfies.
///
/// `Brent` covers both the base/exponent scan (4.D.1) and the tail scan
/// (4.D.2) for pure powers; the two share a representation because
/// downstream synthesis treats them identically (`b2` is simply `1`, `e2`
/// unused).
#[derive(Debug, Clone, PartialEq)]
pub enum FormDescriptor {
    None,
    Brent {
        c1: BigInt,
        b1: BigInt,
        e1: u32,
        c2: BigInt,
    },
    HomogeneousCunningham {
        sign: i32,
        b1: BigInt,
        e1: u32,
        b2: BigInt,
        e2: u32,
    },
}

impl FormDescriptor {
    pub fn is_found(&self) -> bool {
        !matches!(self, FormDescriptor::None)
    }

    pub fn is_homogeneous(&self) -> bool {
        matches!(self, FormDescriptor::HomogeneousCunningham { .. })
    }

    /// Human-readable description used in the polynomial file header (6.2).
    pub fn describe(&self) -> String {
        match self {
            FormDescriptor::None => "no form".to_string(),
            FormDescriptor::HomogeneousCunningham { sign, b1, e1, b2, .. } => {
                let op = if *sign >= 0 { "+" } else { "-" };
                format!("{}^{}{}{}^{}", b1, e1, op, b2, e1)
            }
            FormDescriptor::Brent { c1, b1, e1, c2 } => {
                let op = if *c2 >= BigInt::from(0) { "+" } else { "-" };
                let c2_abs = c2.abs_value();
                if *c1 == BigInt::from(1) {
                    format!("{}^{}{}{}", b1, e1, op, c2_abs)
                } else {
                    format!("{}*{}^{}{}{}", c1, b1, e1, op, c2_abs)
                }
            }
        }
    }
}

trait AbsValue {
    fn abs_value(&self) -> BigInt;
}

impl AbsValue for BigInt {
    fn abs_value(&self) -> BigInt {
        if *self < BigInt::from(0) {
            -self.clone()
        } else {
            self.clone()
        }
    }
}
