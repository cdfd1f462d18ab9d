//! This crate provides [`Timeslot`], a small value-type for an interval of
//! time, along with the interval algebra that schedulers, calendars and
//! availability calculations keep having to re-derive: overlap,
//! containment, intersection, gaps, unions and subtraction.
//!
//! ## Example finding free time in a working day
//!
//! ```rust
//! use timeslot::Timeslot;
//!
//! let working_day = Timeslot::new(9, 17);
//! let standup = Timeslot::new(9, 10);
//! let lunch = Timeslot::new(12, 13);
//!
//! let mut free = vec![working_day];
//! for busy in [standup, lunch] {
//! 	free = free.iter().flat_map(|slot| slot.sub(&busy)).collect();
//! }
//!
//! assert_eq!(free, [Timeslot::new(10, 12), Timeslot::new(13, 17)]);
//!
//! assert_eq!(standup.overlaps(&lunch), false);
//! assert_eq!(standup.gap(&lunch), Some(Timeslot::new(10, 12)));
//! assert_eq!(working_day.contains(lunch), true);
//! assert_eq!(working_day.contains(17), true);
//! ```
//!
//! ## Example using date-times
//!
//! Any [`Ord`] + [`Copy`] type which can be subtracted from itself works as
//! an instant, see [`InstantType`].
//!
//! ```rust
//! use chrono::{NaiveDate, TimeDelta};
//! use timeslot::Timeslot;
//!
//! let day = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
//! let at = |hour| day.and_hms_opt(hour, 0, 0).unwrap();
//!
//! let booking = Timeslot::new(at(14), at(16));
//! let maintenance = Timeslot::new(at(15), at(17));
//!
//! assert_eq!(booking.duration(), TimeDelta::hours(2));
//! assert_eq!(
//! 	booking.intersection(&maintenance),
//! 	Some(Timeslot::new(at(15), at(16)))
//! );
//! assert_eq!(*booking.sub(&maintenance), [Timeslot::new(at(14), at(15))]);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Instants
//!
//! The ends of a timeslot are opaque instants supplied by you, this crate
//! knows nothing about time-zones or calendars, only that instants are
//! totally ordered and that subtracting them gives a duration.
//!
//! ### Overlap
//!
//! Two timeslots "overlap" if they share more than a single boundary
//! instant. For example `2..4` and `3..6` overlap, but `2..4` and `4..6` do
//! **not** since they only share the instant `4`.
//!
//! ### Adjacency
//!
//! Two timeslots are "adjacent" if one ends exactly where the other starts,
//! like `2..4` and `4..6`.
//!
//! ### Containment
//!
//! Containment is closed, a timeslot contains both of its ends as well as
//! any timeslot lying within them, including itself. This differs from
//! overlap on purpose: `2..4` contains `4..4` but does not overlap `4..6`.
//!
//! ### Gaps and Unions
//!
//! A "gap" is the non-empty stretch of time strictly between two timeslots
//! which neither overlap nor touch. Only timeslots without a gap can be
//! unioned, otherwise the result would not be one contiguous timeslot and
//! [`Timeslot::union()`] returns an [`IllegalUnionError`].
//!
//! ### Inverted Timeslots
//!
//! A timeslot is never validated on construction, its `start` may come
//! after its `end`, in which case its duration is negative. Every
//! operation still gives a predictable answer by applying its ordinary
//! boundary comparisons, for example:
//!
//! - an inverted timeslot contains no instants, not even its own ends,
//! - it is contained in any timeslot spanning both of its ends,
//! - its own end comes before its own start, so it has a gap with itself
//!   and cannot be unioned with itself,
//! - subtracting it from a timeslot that is not inverted removes nothing,
//! - using it as a range for a std collection, such as
//!   `BTreeMap::range()`, panics.
//!
//! ### Ordering
//!
//! Timeslots compare equal when both ends are equal, but they are ordered
//! by `start` alone, see [`Timeslot::cmp_start()`] and [`StartOrd`].
//! Because these two disagree, [`Timeslot`] does not implement [`Ord`]
//! itself.
//!
//! ## Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`Timeslot`] and
//!   [`Member`].
//!
//! ## Further Reading
//!
//! See Wikipedia's article on mathematical Intervals:
//! <https://en.wikipedia.org/wiki/Interval_(mathematics)>
//!
//! and the .NET Time Period Library which covers similar ground:
//! <http://www.codeproject.com/Articles/168662/Time-Period-Library-for-NET>

#![cfg_attr(not(test), no_std)]
#![allow(clippy::tabs_in_doc_comments)]

pub mod error;
pub mod instant;
pub mod member;
pub mod timeslot;

pub use crate::error::IllegalUnionError;
pub use crate::instant::{Duration, InstantType};
pub use crate::member::Member;
pub use crate::timeslot::{Remainder, StartOrd, Timeslot};
