// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub const UNKNOWN_LEVEL_NAME: &str = "UNKNOWN";

/// Severity levels of the host's message reporting, by their numeric codes.
///
/// NOTICE (18) is not registered and renders as
/// [`UNKNOWN_LEVEL_NAME`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum ErrorLevel {
	Debug5 = 10,
	Debug4 = 11,
	Debug3 = 12,
	Debug2 = 13,
	Debug1 = 14,
	Log = 15,
	LogServerOnly = 16,
	Info = 17,
	Warning = 19,
	Error = 20,
	Fatal = 21,
	Panic = 22,
}

impl ErrorLevel {
	pub const ALL: &'static [ErrorLevel] = &[
		ErrorLevel::Debug5,
		ErrorLevel::Debug4,
		ErrorLevel::Debug3,
		ErrorLevel::Debug2,
		ErrorLevel::Debug1,
		ErrorLevel::Log,
		ErrorLevel::LogServerOnly,
		ErrorLevel::Info,
		ErrorLevel::Warning,
		ErrorLevel::Error,
		ErrorLevel::Fatal,
		ErrorLevel::Panic,
	];

	pub const fn from_code(code: i32) -> Option<ErrorLevel> {
		match code {
			10 => Some(ErrorLevel::Debug5),
			11 => Some(ErrorLevel::Debug4),
			12 => Some(ErrorLevel::Debug3),
			13 => Some(ErrorLevel::Debug2),
			14 => Some(ErrorLevel::Debug1),
			15 => Some(ErrorLevel::Log),
			16 => Some(ErrorLevel::LogServerOnly),
			17 => Some(ErrorLevel::Info),
			19 => Some(ErrorLevel::Warning),
			20 => Some(ErrorLevel::Error),
			21 => Some(ErrorLevel::Fatal),
			22 => Some(ErrorLevel::Panic),
			_ => None,
		}
	}

	pub const fn code(&self) -> i32 {
		*self as i32
	}

	pub const fn name(&self) -> &'static str {
		match self {
			ErrorLevel::Debug5 => "DEBUG5",
			ErrorLevel::Debug4 => "DEBUG4",
			ErrorLevel::Debug3 => "DEBUG3",
			ErrorLevel::Debug2 => "DEBUG2",
			ErrorLevel::Debug1 => "DEBUG1",
			ErrorLevel::Log => "LOG",
			ErrorLevel::LogServerOnly => "LOG_SERVER_ONLY",
			ErrorLevel::Info => "INFO",
			ErrorLevel::Warning => "WARNING",
			ErrorLevel::Error => "ERROR",
			ErrorLevel::Fatal => "FATAL",
			ErrorLevel::Panic => "PANIC",
		}
	}
}

pub fn error_level_name(code: i32) -> &'static str {
	match ErrorLevel::from_code(code) {
		Some(level) => level.name(),
		None => UNKNOWN_LEVEL_NAME,
	}
}
