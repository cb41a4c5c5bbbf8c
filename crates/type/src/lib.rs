// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Shared vocabulary of the gateway: the diagnostic error model and the
//! read-only registries that turn numeric codes into printable names.

pub mod error;
pub mod value;

pub use error::{Error, ErrorKind, diagnostic::Diagnostic};
pub use value::{
	level::{ErrorLevel, error_level_name},
	oid::{Oid, TypeOid, type_oid_name},
};

pub type Result<T> = std::result::Result<T, Error>;
