// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use uuid::Uuid;

fn unique_path() -> PathBuf {
	let mut path = env::temp_dir();
	path.push(format!("pggate-{}", Uuid::new_v4()));
	path
}

/// Runs `f` with the path of a fresh empty file, removed again afterwards.
pub fn temp_file<F, R>(f: F) -> std::io::Result<R>
where
	F: FnOnce(&Path) -> R,
{
	let path = unique_path();
	fs::write(&path, b"")?;
	let result = f(&path);

	let _ = fs::remove_file(&path);
	Ok(result)
}
