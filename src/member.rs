//! A module containing [`Member`], the operand type of
//! [`Timeslot::contains()`].

use crate::{InstantType, Timeslot};

/// Something that can be tested for membership in a [`Timeslot`], either a
/// single instant or a whole other timeslot.
///
/// You rarely need to name this type, [`Timeslot::contains()`] accepts
/// anything that converts into it, which is exactly instants and timeslots
/// of the same instant type. Any other operand is rejected at compile time:
///
/// ```compile_fail
/// use timeslot::Timeslot;
///
/// let slot = Timeslot::new(2_i32, 6_i32);
///
/// slot.contains("not an instant");
/// ```
///
/// With the `serde` feature enabled, a [`Member`] deserializes from either a
/// timeslot or a bare instant, and anything else fails with an "unsupported
/// operand type" error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(
		untagged,
		expecting = "unsupported operand type, expected an instant or a timeslot"
	)
)]
pub enum Member<I> {
	/// A whole timeslot, contained when both of its ends are.
	Timeslot(Timeslot<I>),
	/// A single instant.
	Instant(I),
}

impl<I> From<I> for Member<I>
where
	I: InstantType,
{
	fn from(instant: I) -> Self {
		Member::Instant(instant)
	}
}
impl<I> From<Timeslot<I>> for Member<I> {
	fn from(timeslot: Timeslot<I>) -> Self {
		Member::Timeslot(timeslot)
	}
}
