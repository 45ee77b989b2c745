//! Defines all the units relevant to layout: font units, em, points, inches, device pixels
//!
//! The conversions not given here depend on the font or the request:
//!    - the factor between [`Em`] and [`Pt`] is what a font size is (cf [`FontSize`]).
//!    - the factor between [`FUnit`] and [`Em`] is specified in the font file.
//!    - the factor between [`Px`] and [`Inch`] is the requested resolution (cf [`Dpi`]).

// ------------------------- BASIC UNITS --------------------------------

/// Smallest virtual units that the font file can address (so every dimension in the font file is given as an integer number in FUnit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FUnit;

/// A virtual unit, bigger than [`FUnit`], nominally the size of the font.
///
/// Fractional font-size quantities, such as the width of `\hspace{0.5}` or of `\ `, are expressed in em.
/// The correspondance between em and FUnit is specified in the font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Em;


/// Specifying a font size is by definition specifying how many points there is in an em.
/// 12 pt size means "1 em = 12 pt"
///
/// 1pt is set to 1 / 72 inch (DeskTop Publishing Point). Padding between stacked elements is given in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pt;

/// Physical length. Only used to relate points to device pixels through the resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inch;


/// Device unit of the output: a pixel for raster output, a point-sized unit for vector output rendered at 72 dpi.
/// Every origin and ink box of the layout tree is expressed in this unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Px;


/// Font size is expressed in pt / em
pub type FontSize = Ratio<Pt, Em>;

/// Resolution of the output device, in device pixels per inch
pub type Dpi = Ratio<Px, Inch>;

// ------------------- UNIT COMBINATORS -------------------------

/// If U is a unit and V is a unit, Ratio<U, V> is the unit U . V⁻¹
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio<U, V> {
	_numerator    : std::marker::PhantomData<U>,
	_denominator  : std::marker::PhantomData<V>,
}
