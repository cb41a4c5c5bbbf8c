// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Byte range of a token or node in the statement text, with the 1-based
/// line and column of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
	pub start: u32,
	pub end: u32,
	pub line: u32,
	pub column: u32,
}

impl Span {
	pub const fn new(start: u32, end: u32, line: u32, column: u32) -> Self {
		Self {
			start,
			end,
			line,
			column,
		}
	}

	pub fn merge(&self, other: &Span) -> Span {
		if other.start < self.start {
			return other.merge(self);
		}
		Span {
			start: self.start,
			end: self.end.max(other.end),
			line: self.line,
			column: self.column,
		}
	}

	pub fn len(&self) -> u32 {
		self.end - self.start
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

#[cfg(test)]
mod tests {
	use super::Span;

	#[test]
	fn test_merge_keeps_leftmost_position() {
		let first = Span::new(0, 4, 1, 1);
		let second = Span::new(5, 10, 1, 6);

		assert_eq!(first.merge(&second), Span::new(0, 10, 1, 1));
		assert_eq!(second.merge(&first), Span::new(0, 10, 1, 1));
	}
}
