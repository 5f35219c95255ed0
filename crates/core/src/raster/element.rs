//! Raster element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// Elevation grids use `f32`; label grids use `u32`.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Whether this value takes part in statistics (false for NaN)
    fn is_valid(&self) -> bool;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_raster_element {
    (integer: $($t:ty),*) => {
        $(impl RasterElement for $t {
            fn is_valid(&self) -> bool {
                true
            }
        })*
    };
    (float: $($t:ty),*) => {
        $(impl RasterElement for $t {
            fn is_valid(&self) -> bool {
                !self.is_nan()
            }
        })*
    };
}

impl_raster_element!(integer: u8, i32, u32);
impl_raster_element!(float: f32, f64);
