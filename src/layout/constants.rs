//! Length constants for layout

use crate::dimensions::{units::{FontSize, Pt, Px}, Unit};

/// Default horizontal and vertical padding of every element, used between stacked elements and by superscripts.
pub const DEFAULT_PAD : Unit<Pt> = Unit::<Pt>::new(2.);

/// Padding of a symbol that carries an accent
pub const ACCENT_PAD : Unit<Pt> = Unit::<Pt>::new(1.);

/// Scripts are typeset at this fraction of their base's size
pub const SCRIPT_SCALE : f64 = 0.7;

/// Width of `\ `, as a fraction of the font size
pub const SMALL_SPACE : f64 = 0.30;

/// Width of `\/`, as a fraction of the font size
pub const THIN_SPACE : f64 = 0.10;

/// Blank border added around the ink of a rendered formula, in device pixels
pub const CANVAS_MARGIN : Unit<Px> = Unit::<Px>::new(2.);

/// Font size of a freshly built element, before [`LayoutTree::set_size_info`](super::LayoutTree::set_size_info) runs
pub const DEFAULT_FONT_SIZE : Unit<FontSize> = Unit::<FontSize>::new(12.);
