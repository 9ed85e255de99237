//! Measurement units used throughout the crate.
//!
//! Layout happens in millimetres ([`Mm`]), the unit the declaration form is drawn
//! in, with `f64` precision so that justified lines land exactly on the column
//! edge. The PDF object model works in points ([`Pt`]), 1/72 of an inch, which is
//! what `pdf-writer` and font metrics speak.

use derive_more::{Add, AddAssign, Deref, From, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

const MM_PER_PT: f64 = 25.4 / 72.0;

/// A length in PDF points
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Sum, Deref, From)]
pub struct Pt(pub f32);

/// A length in millimetres, the unit every layout routine works in
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Sum, Deref, From)]
pub struct Mm(pub f64);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Mul<f64> for Mm {
    type Output = Mm;

    fn mul(self, rhs: f64) -> Mm {
        Mm(self.0 * rhs)
    }
}

impl Div<f64> for Mm {
    type Output = Mm;

    fn div(self, rhs: f64) -> Mm {
        Mm(self.0 / rhs)
    }
}

impl Neg for Mm {
    type Output = Mm;

    fn neg(self) -> Mm {
        Mm(-self.0)
    }
}

impl From<Pt> for Mm {
    fn from(pt: Pt) -> Mm {
        Mm(pt.0 as f64 * MM_PER_PT)
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt((mm.0 / MM_PER_PT) as f32)
    }
}

impl From<Pt> for f32 {
    fn from(pt: Pt) -> f32 {
        pt.0
    }
}
