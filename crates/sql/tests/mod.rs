// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{error::Error, fmt::Write, path::Path};

use pggate_catalog::{MaterializedCatalog, ObjectKind};
use pggate_sql::{SemContext, compile};
use pggate_testing::{testscript, testscript::Command};
use test_each_file::test_each_path;

test_each_path! { in "crates/sql/tests/scripts/drop" as drop => run_test }

fn run_test(path: &Path) {
	testscript::run_path(&mut Runner::new(), path).expect("test failed")
}

/// Compiles statements against a fixed catalog:
///
/// - `use KEYSPACE` / `use none` sets the keyspace for unqualified names
/// - `compile SQL` prints the compiled command, or the error with `!compile`
pub struct Runner {
	catalog: MaterializedCatalog,
	objects: usize,
	keyspace: Option<String>,
}

impl Runner {
	fn new() -> Self {
		let catalog = MaterializedCatalog::new();
		catalog.create_keyspace("ks").unwrap();
		catalog.create_keyspace("archive").unwrap();
		catalog.create_table("ks", "users").unwrap();
		catalog.create_table("ks", "orders").unwrap();
		catalog.create_table("archive", "users").unwrap();
		catalog.create_index("ks", "users_by_email").unwrap();
		catalog.create_type("ks", "address").unwrap();
		catalog.create_role("admin").unwrap();
		catalog.reject_drop(ObjectKind::Index, true);

		Self {
			objects: catalog.len(),
			catalog,
			keyspace: None,
		}
	}
}

impl testscript::Runner for Runner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		let mut output = String::new();
		match command.name.as_str() {
			"use" => {
				let mut args = command.consume_args();
				let keyspace = args.next_pos().ok_or("keyspace not given")?.value.as_str();
				args.reject_rest()?;
				self.keyspace = match keyspace {
					"none" => None,
					keyspace => Some(keyspace.to_string()),
				};
			}

			"compile" => {
				let mut args = command.consume_args();
				let sql = args.next_pos().ok_or("statement not given")?.value.as_str();
				args.reject_rest()?;

				let mut ctx = SemContext::new(&self.catalog);
				if let Some(keyspace) = self.keyspace.as_deref() {
					ctx = ctx.with_keyspace(keyspace);
				}

				let ddl = compile(sql, &ctx)
					.map_err(|err| format!("{} {}: {}", err.code(), err.sqlstate(), err.message()))?;
				writeln!(output, "{ddl}")?;
			}

			_ => unimplemented!("unknown command: {}", command.name),
		}
		Ok(output)
	}

	fn end_script(&mut self) -> Result<(), Box<dyn Error>> {
		// compiling never touches the catalog
		if self.catalog.len() != self.objects {
			return Err(format!("catalog changed from {} to {} objects", self.objects, self.catalog.len()).into());
		}
		Ok(())
	}
}
