//! A module containing the [`InstantType`] marker trait and the [`Duration`]
//! alias for the difference between two instants.

use core::ops::Sub;

/// The marker trait for valid instant types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouldn't need to implement this yourself.
///
/// Instants are opaque to this crate, all it asks is that they are totally
/// ordered and that subtracting one from another yields a duration. This
/// covers the primitive integers as well as date-time types such as
/// `chrono::NaiveDateTime`.
pub trait InstantType: Ord + Copy + Sub<Self> {}
impl<I> InstantType for I where I: Ord + Copy + Sub<I> {}

/// The type produced by subtracting one instant from another, for example
/// `chrono::TimeDelta` for `chrono::NaiveDateTime`.
pub type Duration<I> = <I as Sub>::Output;
