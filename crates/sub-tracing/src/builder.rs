// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
	#[default]
	Compact,
	Pretty,
	Json,
}

impl LogFormat {
	pub fn parse(value: &str) -> Self {
		match value.to_ascii_lowercase().as_str() {
			"pretty" => LogFormat::Pretty,
			"json" | "jsonl" => LogFormat::Json,
			_ => LogFormat::Compact,
		}
	}
}

/// Configuration function applied to a default [`TracingBuilder`].
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Builds and installs the global `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	filter: String,
	use_env: bool,
	format: LogFormat,
	file_and_line: bool,
	target: bool,
	test_writer: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self {
			filter: "info".to_string(),
			use_env: true,
			format: LogFormat::Compact,
			file_and_line: false,
			target: true,
			test_writer: false,
		}
	}

	pub fn configure(configurator: TracingConfigurator) -> Self {
		configurator(Self::new())
	}

	/// Filter directives, e.g. `info,pggate_engine=debug`. `RUST_LOG` takes
	/// precedence unless [`ignore_env`](Self::ignore_env) is set.
	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	pub fn ignore_env(mut self) -> Self {
		self.use_env = false;
		self
	}

	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_file_and_line(mut self, enabled: bool) -> Self {
		self.file_and_line = enabled;
		self
	}

	pub fn with_target(mut self, enabled: bool) -> Self {
		self.target = enabled;
		self
	}

	/// Routes output through the test harness capture.
	pub fn for_tests(mut self) -> Self {
		self.test_writer = true;
		self
	}

	pub fn format(&self) -> LogFormat {
		self.format
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub(crate) fn env_filter(&self) -> EnvFilter {
		let fallback = || EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new("info"));
		if self.use_env {
			EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
		} else {
			fallback()
		}
	}

	/// Installs the subscriber. Returns `false` when a global subscriber was
	/// already installed; the existing one stays in place.
	pub fn try_init(self) -> bool {
		let builder = tracing_subscriber::fmt()
			.with_env_filter(self.env_filter())
			.with_file(self.file_and_line)
			.with_line_number(self.file_and_line)
			.with_target(self.target);

		let result = match (self.format, self.test_writer) {
			(LogFormat::Compact, false) => builder.compact().try_init(),
			(LogFormat::Compact, true) => builder.compact().with_test_writer().try_init(),
			(LogFormat::Pretty, false) => builder.pretty().try_init(),
			(LogFormat::Pretty, true) => builder.pretty().with_test_writer().try_init(),
			(LogFormat::Json, false) => builder.json().try_init(),
			(LogFormat::Json, true) => builder.json().with_test_writer().try_init(),
		};

		match result {
			Ok(()) => {
				tracing::debug!(filter = %self.filter, format = ?self.format, "tracing initialized");
				true
			}
			Err(_) => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{LogFormat, TracingBuilder};

	#[test]
	fn test_defaults() {
		let builder = TracingBuilder::default();
		assert_eq!(builder.filter(), "info");
		assert_eq!(builder.format(), LogFormat::Compact);
	}

	#[test]
	fn test_configurator() {
		let builder =
			TracingBuilder::configure(Box::new(|b| b.with_filter("pggate_engine=trace").with_format(LogFormat::Json)));
		assert_eq!(builder.filter(), "pggate_engine=trace");
		assert_eq!(builder.format(), LogFormat::Json);
	}

	#[test]
	fn test_parse_format() {
		assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
		assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
		assert_eq!(LogFormat::parse("anything"), LogFormat::Compact);
	}

	#[test]
	fn test_invalid_filter_falls_back() {
		let builder = TracingBuilder::new().ignore_env().with_filter("pggate=loudest");
		assert_eq!(builder.env_filter().to_string(), "info");
	}

	#[test]
	fn test_second_init_is_rejected() {
		TracingBuilder::new().ignore_env().for_tests().try_init();
		assert!(!TracingBuilder::new().ignore_env().for_tests().try_init());
	}
}
