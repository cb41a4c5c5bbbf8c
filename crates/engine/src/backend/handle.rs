// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Formatter};

macro_rules! opaque_handle {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		///
		/// Handles are moved into the call that releases them, so each one
		/// can be released at most once.
		#[must_use]
		#[derive(Debug, PartialEq, Eq, Hash)]
		pub struct $name(u64);

		impl $name {
			pub const fn from_raw(raw: u64) -> Self {
				Self(raw)
			}

			pub const fn raw(&self) -> u64 {
				self.0
			}
		}
	};
}

opaque_handle!(
	/// A backend client session.
	SessionHandle
);

opaque_handle!(
	/// A statement prepared by the backend.
	StatementHandle
);

opaque_handle!(
	/// A table descriptor loaded by the backend.
	TableDescHandle
);

/// A failure reported by the backend. Owns the backend's message until it is
/// handed back through [`Backend::free_status`](super::Backend::free_status).
#[must_use]
#[derive(PartialEq, Eq)]
pub struct StatusHandle {
	raw: u64,
	message: Box<str>,
}

impl StatusHandle {
	pub fn new(raw: u64, message: impl Into<Box<str>>) -> Self {
		Self {
			raw,
			message: message.into(),
		}
	}

	pub const fn raw(&self) -> u64 {
		self.raw
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl Debug for StatusHandle {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "StatusHandle({}: {:?})", self.raw, self.message)
	}
}
