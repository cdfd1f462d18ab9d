//! A module containing [`Timeslot`] and its ordering wrapper [`StartOrd`].

use core::cmp::{max, min, Ordering};
use core::fmt::{self, Display, Formatter};
use core::ops::{Bound, RangeBounds};

use smallvec::{smallvec, SmallVec};

use crate::{Duration, IllegalUnionError, InstantType, Member};

/// What is left of a timeslot after [`Timeslot::sub()`], zero, one or two
/// timeslots in chronological order.
pub type Remainder<I> = SmallVec<[Timeslot<I>; 2]>;

/// An interval of time between two instants.
///
/// `I` is the generic type parameter for the instant type, see
/// [`InstantType`].
///
/// No ordering is enforced between `start` and `end`, a timeslot whose
/// `start` comes after its `end` is "inverted" and has a negative
/// [`duration()`](Timeslot::duration). See [`Inverted
/// Timeslots`](crate#inverted-timeslots) for how the operations treat
/// them.
///
/// # Examples
/// ```
/// use timeslot::Timeslot;
///
/// let meeting = Timeslot::new(9, 11);
/// let lunch = Timeslot::new(12, 13);
///
/// assert_eq!(meeting.duration(), 2);
/// assert_eq!(meeting.overlaps(&lunch), false);
/// assert_eq!(meeting.gap(&lunch), Some(Timeslot::new(11, 12)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeslot<I> {
	/// The start of the timeslot.
	pub start: I,
	/// The end of the timeslot.
	pub end: I,
}

impl<I> Timeslot<I> {
	/// Makes a new [`Timeslot`] from `start` to `end`.
	///
	/// `start` is allowed to come after `end`.
	///
	/// # Examples
	/// ```
	/// use timeslot::Timeslot;
	///
	/// let inverted = Timeslot::new(10, 4);
	///
	/// assert_eq!(inverted.duration(), -6);
	/// ```
	pub const fn new(start: I, end: I) -> Self {
		Timeslot { start, end }
	}
}

impl<I> Timeslot<I>
where
	I: InstantType,
{
	/// Returns the length of the timeslot, `end - start`.
	///
	/// This is negative for inverted timeslots.
	pub fn duration(&self) -> Duration<I> {
		self.end - self.start
	}

	/// Returns `true` if the two timeslots share more than a single boundary
	/// instant.
	///
	/// Timeslots which only touch, where one ends exactly when the other
	/// starts, do not overlap.
	///
	/// # Examples
	/// ```
	/// use timeslot::Timeslot;
	///
	/// let slot = Timeslot::new(4, 8);
	///
	/// assert_eq!(slot.overlaps(&Timeslot::new(6, 10)), true);
	/// assert_eq!(slot.overlaps(&Timeslot::new(2, 12)), true);
	/// assert_eq!(slot.overlaps(&Timeslot::new(8, 10)), false);
	/// assert_eq!(slot.overlaps(&Timeslot::new(0, 4)), false);
	/// ```
	pub fn overlaps(&self, other: &Self) -> bool {
		(self.start <= other.start && other.start < self.end)
			|| (self.start < other.end && other.end <= self.end)
			|| other.encloses(self)
	}

	/// An alias for [`Timeslot::overlaps()`].
	pub fn intersects(&self, other: &Self) -> bool {
		self.overlaps(other)
	}

	/// Returns `true` if the given instant or timeslot lies entirely within
	/// this timeslot.
	///
	/// Unlike [`Timeslot::overlaps()`] both ends are inclusive, so a timeslot
	/// contains its own `start` and `end` as well as itself.
	///
	/// # Examples
	/// ```
	/// use timeslot::Timeslot;
	///
	/// let slot = Timeslot::new(4, 8);
	///
	/// assert_eq!(slot.contains(4), true);
	/// assert_eq!(slot.contains(8), true);
	/// assert_eq!(slot.contains(9), false);
	///
	/// assert_eq!(slot.contains(Timeslot::new(4, 6)), true);
	/// assert_eq!(slot.contains(slot), true);
	/// assert_eq!(slot.contains(Timeslot::new(6, 10)), false);
	/// ```
	pub fn contains<Q>(&self, other: Q) -> bool
	where
		Q: Into<Member<I>>,
	{
		match other.into() {
			Member::Instant(instant) => {
				self.start <= instant && instant <= self.end
			}
			Member::Timeslot(timeslot) => self.encloses(&timeslot),
		}
	}

	/// Returns the largest timeslot that is within both timeslots, or `None`
	/// if they do not overlap.
	///
	/// # Examples
	/// ```
	/// use timeslot::Timeslot;
	///
	/// let slot = Timeslot::new(4, 8);
	///
	/// assert_eq!(
	/// 	slot.intersection(&Timeslot::new(6, 12)),
	/// 	Some(Timeslot::new(6, 8))
	/// );
	/// assert_eq!(
	/// 	Timeslot::new(6, 12).intersection(&slot),
	/// 	Some(Timeslot::new(6, 8))
	/// );
	/// assert_eq!(slot.intersection(&Timeslot::new(8, 12)), None);
	/// ```
	pub fn intersection(&self, other: &Self) -> Option<Self> {
		if self.encloses(other) {
			Some(*other)
		} else if self.start <= other.start && other.start < self.end {
			//the end of self
			Some(Timeslot::new(other.start, self.end))
		} else if self.start < other.end && other.end <= self.end {
			//the start of self
			Some(Timeslot::new(self.start, other.end))
		} else if other.encloses(self) {
			Some(*self)
		} else {
			None
		}
	}

	/// Returns `true` if one timeslot ends exactly where the other starts.
	///
	/// # Examples
	/// ```
	/// use timeslot::Timeslot;
	///
	/// let slot = Timeslot::new(4, 8);
	///
	/// assert_eq!(slot.adjacent(&Timeslot::new(8, 10)), true);
	/// assert_eq!(slot.adjacent(&Timeslot::new(0, 4)), true);
	/// assert_eq!(slot.adjacent(&Timeslot::new(9, 10)), false);
	/// ```
	pub fn adjacent(&self, other: &Self) -> bool {
		self.start == other.end || self.end == other.start
	}

	/// Returns the empty timeslot between the two timeslots if they are
	/// separated, otherwise `None` if they overlap or touch.
	///
	/// The gap always runs from the end of the earlier timeslot to the start
	/// of the later one, regardless of which one `self` is.
	///
	/// # Examples
	/// ```
	/// use timeslot::Timeslot;
	///
	/// let slot = Timeslot::new(4, 8);
	///
	/// assert_eq!(slot.gap(&Timeslot::new(10, 12)), Some(Timeslot::new(8, 10)));
	/// assert_eq!(slot.gap(&Timeslot::new(0, 2)), Some(Timeslot::new(2, 4)));
	/// assert_eq!(slot.gap(&Timeslot::new(8, 12)), None);
	/// ```
	pub fn gap(&self, other: &Self) -> Option<Self> {
		if self.end < other.start {
			Some(Timeslot::new(self.end, other.start))
		} else if other.end < self.start {
			Some(Timeslot::new(other.end, self.start))
		} else {
			None
		}
	}

	/// Returns the smallest timeslot covering both timeslots.
	///
	/// # Errors
	///
	/// Returns an [`IllegalUnionError`] holding the gap if the timeslots are
	/// separated by one, see [`Timeslot::gap()`]. Overlapping and touching
	/// timeslots always union.
	///
	/// # Examples
	/// ```
	/// use timeslot::{IllegalUnionError, Timeslot};
	///
	/// let slot = Timeslot::new(4, 8);
	///
	/// assert_eq!(slot.union(&Timeslot::new(6, 12)), Ok(Timeslot::new(4, 12)));
	/// assert_eq!(slot.union(&Timeslot::new(8, 12)), Ok(Timeslot::new(4, 12)));
	/// assert_eq!(
	/// 	slot.union(&Timeslot::new(10, 12)),
	/// 	Err(IllegalUnionError {
	/// 		gap: Timeslot::new(8, 10)
	/// 	})
	/// );
	/// ```
	pub fn union(&self, other: &Self) -> Result<Self, IllegalUnionError<I>> {
		match self.gap(other) {
			Some(gap) => Err(IllegalUnionError { gap }),
			None => Ok(Timeslot::new(
				min(self.start, other.start),
				max(self.end, other.end),
			)),
		}
	}

	/// Returns the parts of this timeslot that are not covered by `other`,
	/// in chronological order.
	///
	/// - Zero timeslots if `other` contains this timeslot.
	/// - One timeslot if `other` covers the start or the end of this
	///   timeslot.
	/// - Two timeslots if `other` lies strictly inside this timeslot, touching
	///   neither end.
	/// - This timeslot unchanged if `other` does not overlap it at all,
	///   including when they only touch.
	///
	/// An inverted `other` covers no instants, so it removes nothing from a
	/// timeslot that is not inverted itself.
	///
	/// # Examples
	/// ```
	/// use timeslot::Timeslot;
	///
	/// let day = Timeslot::new(9, 17);
	///
	/// assert_eq!(
	/// 	*day.sub(&Timeslot::new(12, 13)),
	/// 	[Timeslot::new(9, 12), Timeslot::new(13, 17)]
	/// );
	/// assert_eq!(*day.sub(&Timeslot::new(7, 10)), [Timeslot::new(10, 17)]);
	/// assert_eq!(*day.sub(&Timeslot::new(17, 20)), [day]);
	/// assert!(day.sub(&Timeslot::new(0, 24)).is_empty());
	/// ```
	#[allow(clippy::should_implement_trait)]
	pub fn sub(&self, other: &Self) -> Remainder<I> {
		if other.encloses(self) {
			SmallVec::new()
		} else if other.start <= self.start && self.start < other.end {
			smallvec![Timeslot::new(other.end, self.end)]
		} else if other.start < self.end && self.end <= other.end {
			smallvec![Timeslot::new(self.start, other.start)]
		} else if self.start < other.start
			&& other.end < self.end
			&& other.start <= other.end
		{
			smallvec![
				Timeslot::new(self.start, other.start),
				Timeslot::new(other.end, self.end)
			]
		} else {
			smallvec![*self]
		}
	}

	/// Compares two timeslots by their `start` alone, the `end` is not used
	/// as a tie-breaker.
	///
	/// Use this to sort timeslots chronologically, or wrap them in
	/// [`StartOrd`] for ordered collections.
	///
	/// # Examples
	/// ```
	/// use timeslot::Timeslot;
	///
	/// let mut slots = [
	/// 	Timeslot::new(6, 8),
	/// 	Timeslot::new(2, 9),
	/// 	Timeslot::new(2, 4),
	/// ];
	///
	/// slots.sort_by(Timeslot::cmp_start);
	///
	/// assert_eq!(
	/// 	slots,
	/// 	[Timeslot::new(2, 9), Timeslot::new(2, 4), Timeslot::new(6, 8)]
	/// );
	/// ```
	pub fn cmp_start(&self, other: &Self) -> Ordering {
		self.start.cmp(&other.start)
	}

	fn encloses(&self, other: &Self) -> bool {
		self.start <= other.start && other.end <= self.end
	}
}

/// Both ends are [`Bound::Included`], matching [`Timeslot::contains()`].
///
/// # Panics
///
/// Std collections panic when given an inverted timeslot as a range, for
/// example [`BTreeMap::range()`] panics if `start > end`. See [`Inverted
/// Timeslots`](crate#inverted-timeslots) for more details.
///
/// [`BTreeMap::range()`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html#method.range
impl<I> RangeBounds<I> for Timeslot<I> {
	fn start_bound(&self) -> Bound<&I> {
		Bound::Included(&self.start)
	}

	fn end_bound(&self) -> Bound<&I> {
		Bound::Included(&self.end)
	}
}

impl<I> Display for Timeslot<I>
where
	I: Display,
{
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}]", self.start, self.end)
	}
}

/// A wrapper around [`Timeslot`] which is ordered and compared by `start`
/// only, see [`Timeslot::cmp_start()`].
///
/// Two wrapped timeslots with the same `start` are equal even if their `end`s
/// differ.
///
/// # Examples
/// ```
/// use std::collections::BinaryHeap;
/// use std::cmp::Reverse;
///
/// use timeslot::{StartOrd, Timeslot};
///
/// let mut upcoming = BinaryHeap::new();
/// upcoming.push(Reverse(StartOrd(Timeslot::new(14, 15))));
/// upcoming.push(Reverse(StartOrd(Timeslot::new(9, 17))));
///
/// assert_eq!(
/// 	upcoming.pop().map(|Reverse(StartOrd(slot))| slot),
/// 	Some(Timeslot::new(9, 17))
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StartOrd<I>(pub Timeslot<I>);

impl<I> Ord for StartOrd<I>
where
	I: InstantType,
{
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.cmp_start(&other.0)
	}
}
impl<I> PartialOrd for StartOrd<I>
where
	I: InstantType,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
impl<I> PartialEq for StartOrd<I>
where
	I: InstantType,
{
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other).is_eq()
	}
}
impl<I> Eq for StartOrd<I> where I: InstantType {}
