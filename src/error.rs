//! A module containing [`IllegalUnionError`].

use thiserror::Error;

use crate::Timeslot;

/// The error returned when trying to union two timeslots that are separated
/// by a gap, since the result would not be one contiguous timeslot.
///
/// Contains the gap that prevented the union, this is the same value that
/// [`Timeslot::gap()`] returns for the two timeslots.
///
/// # Examples
/// ```
/// use timeslot::{IllegalUnionError, Timeslot};
///
/// let morning = Timeslot::new(8, 12);
/// let evening = Timeslot::new(17, 21);
///
/// assert_eq!(
/// 	morning.union(&evening),
/// 	Err(IllegalUnionError {
/// 		gap: Timeslot::new(12, 17)
/// 	})
/// );
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("timeslots must not have a gap if they are to be unioned, found gap {gap}")]
pub struct IllegalUnionError<I> {
	/// The empty space between the two timeslots.
	pub gap: Timeslot<I>,
}
