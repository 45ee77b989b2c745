//! Quantities tagged with their unit (font units, em, points, device pixels).
//!
//! Layout mixes three kinds of lengths: font sizes in points per em, padding in points and
//! positions in device pixels. Keeping the unit in the type turns a forgotten `dpi / 72`
//! into a compile error. A function expecting device pixels asks for a [`Unit<Px>`].


use std::ops::{Add, Sub, Mul, AddAssign, SubAssign, Div, Neg};
use std::cmp::{PartialEq, PartialOrd};
use std::fmt::{Display, Debug};

use self::units::{Ratio, Inch, Px, Pt, Dpi};
pub mod units;

/// A f64 value with its unit represented in the type
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit<U> {
    value : f64,
    #[serde(skip)]
    _phantom : std::marker::PhantomData<U>,
}


impl<U> PartialEq for Unit<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value.eq(&other.value)
    }
}

impl<U> PartialOrd for Unit<U> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U> Clone for Unit<U> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<U> Copy for Unit<U> {}

impl<U> Debug for Unit<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let type_name = std::any::type_name::<U>();
        let short_name = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "Unit::<{}>::new({})", short_name, self.value)
    }
}

impl<U> Display for Unit<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

impl<U> Default for Unit<U> {
    fn default() -> Self {
        Self::ZERO
    }
}



impl Unit<Ratio<Inch, Pt>> {
    /// 1 pt = 1 / 72 in (desktop publishing point). Cf [`Pt`] for more explanation
    pub const DTP : Self = Self::new(1. / 72.);
}

impl Unit<Dpi> {
    /// The resolution at which one point is exactly one device pixel.
    pub const POINT_RESOLUTION : Self = Self::new(72.);

    /// Number of device pixels in a point at this resolution, i.e. `dpi / 72`.
    pub fn pt_to_px(self) -> Unit<Ratio<Px, Pt>> {
        Unit::<Ratio<Inch, Pt>>::DTP * self.lift::<Pt>()
    }
}

impl<U> Unit<U> {
    /// The zero value
    pub const ZERO : Self = Self::new(0.);

    /// Creates a value with unit from a unit-less value.
    /// To be used with care: you need to manually check that the value you pass is indeed in the right dimension.
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            _phantom: std::marker::PhantomData
        }
    }

    /// Is quantity equal to zero?
    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }

    /// Converts a value to a unit-less value ("unsafe" since it removes information about dimensions)
    #[inline]
    pub const fn to_unitless(self) -> f64
    { self.value }

    /// Like [`Unit::to_unitless`] but explicitly asks for the dimension to avoid errors
    #[inline]
    pub fn unitless(self, _unit : U) -> f64
    { self.to_unitless() }

    /// Multiply value by a unitless value
    pub fn scale(self, scale : f64) -> Self {
        Self::new(self.value * scale)
    }

    /// Equivalent to [`f64::min`] for values with units
    pub fn min(self, other : Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    /// Equivalent to [`f64::max`] for values with units
    pub fn max(self, other : Self) -> Self {
        Self::new(self.value.max(other.value))
    }

    /// Equivalent to [`f64::abs`] for values with units
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Equivalent to [`f64::is_finite`]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    /// Bit pattern of the value with `-0.0` folded into `0.0`, usable as a hash key.
    pub fn key_bits(self) -> u64 {
        if self.value == 0.0 { 0f64.to_bits() } else { self.value.to_bits() }
    }
}

impl<U, V> Unit<Ratio<U, V>> {
    /// Inverts a ratio going from `x` (unit: U/V) to `1/x` (unit: V/U)
    #[inline]
    pub fn recip(self) -> Unit<Ratio<V, U>> {
        Unit::<Ratio<V, U>>::new(self.value.recip())
    }

    /// Converts from U / V to (U / W) / (V / W).
    ///
    /// This is how two ratios are chained together:
    ///
    /// ```
    /// # use mathtext::dimensions::units::{Ratio, Pt, Em, FUnit};
    /// # use mathtext::dimensions::Unit;
    /// let em_per_funit : Unit<Ratio<Em, FUnit>> = Unit::new(1. / 1000.);
    /// let font_size    : Unit<Ratio<Pt, Em>>    = Unit::new(12.);
    ///
    /// // let pt_per_funit : Unit<Ratio<Pt, FUnit>> = em_per_funit * font_size; // <- mismatched type error
    /// let pt_per_funit : Unit<Ratio<Pt, FUnit>> = em_per_funit * font_size.lift::<FUnit>(); // ok
    /// assert!((pt_per_funit.to_unitless() - 0.012).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn lift<W>(self) -> Unit<Ratio<Ratio<U, W>, Ratio<V, W>>> {
        Unit::new(self.value)
    }
}

impl<U> Add for Unit<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value)
    }
}

impl<U> Sub for Unit<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value)
    }
}

impl<U> Neg for Unit<U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(- self.value)
    }
}

impl<U> AddAssign for Unit<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U> SubAssign for Unit<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}


impl<U, V> Mul<Unit<Ratio<U, V>>> for Unit<V> {
    type Output = Unit<U>;

    fn mul(self, rhs: Unit<Ratio<U, V>>) -> Self::Output {
        Unit::<U>::new(self.value * rhs.value)
    }
}


impl<U, V> Div<Unit<V>> for Unit<U> {
    type Output = Unit<Ratio<U, V>>;

    fn div(self, rhs: Unit<V>) -> Self::Output {
        Unit::<Ratio<U, V>>::new(self.value / rhs.value)
    }
}



impl<U> From<f64> for Unit<U> {
    fn from(x: f64) -> Self
    { Self::new(x) }
}

impl<U> From<i16> for Unit<U> {
    fn from(x: i16) -> Self
    { Self::new(x.into()) }
}

impl<U> From<u16> for Unit<U> {
    fn from(x: u16) -> Self
    { Self::new(x.into()) }
}
