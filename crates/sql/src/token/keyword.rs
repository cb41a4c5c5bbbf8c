// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	fmt::{Display, Formatter},
	sync::LazyLock,
};

macro_rules! keyword {
	( $( $variant:ident => $string:literal ),* $(,)? ) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Keyword {
			$( $variant ),*
		}

		impl Keyword {
			pub const fn as_str(&self) -> &'static str {
				match self {
					$( Keyword::$variant => $string ),*
				}
			}
		}

		/// Lowercase spelling to keyword.
		pub static KEYWORD_MAP: LazyLock<HashMap<String, Keyword>> = LazyLock::new(|| {
			let mut map = HashMap::new();
			$( map.insert($string.to_ascii_lowercase(), Keyword::$variant); )*
			map
		});
	};
}

keyword! {
	Drop     => "DROP",
	If       => "IF",
	Exists   => "EXISTS",

	// Object types
	Table    => "TABLE",
	Keyspace => "KEYSPACE",
	Schema   => "SCHEMA",
	Type     => "TYPE",
	Index    => "INDEX",
	Role     => "ROLE",
}

impl Keyword {
	/// Case-insensitive keyword lookup.
	pub fn lookup(word: &str) -> Option<Keyword> {
		if word.bytes().all(|b| !b.is_ascii_uppercase()) {
			return KEYWORD_MAP.get(word).copied();
		}
		KEYWORD_MAP.get(&word.to_ascii_lowercase()).copied()
	}
}

impl Display for Keyword {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
