// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Numeric identifier of a catalog object, as assigned by the host database.
pub type Oid = u32;

/// Returned by [`type_oid_name`] for identifiers outside the registry.
pub const UNKNOWN_TYPE_NAME: &str = "unknown type";

macro_rules! type_oids {
	( $( $variant:ident = $oid:literal => $name:literal ),* $(,)? ) => {
		/// Built-in data types of the host, identified by their fixed OIDs.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		#[repr(u32)]
		pub enum TypeOid {
			$( $variant = $oid ),*
		}

		impl TypeOid {
			pub const ALL: &'static [TypeOid] = &[ $( TypeOid::$variant ),* ];

			pub const fn from_oid(oid: Oid) -> Option<TypeOid> {
				match oid {
					$( $oid => Some(TypeOid::$variant), )*
					_ => None,
				}
			}

			pub const fn oid(&self) -> Oid {
				*self as Oid
			}

			pub const fn name(&self) -> &'static str {
				match self {
					$( TypeOid::$variant => $name ),*
				}
			}
		}
	};
}

type_oids! {
	Bool = 16 => "BOOL",
	Bytea = 17 => "BYTEA",
	Char = 18 => "CHAR",
	Name = 19 => "NAME",
	Int8 = 20 => "INT8",
	Int2 = 21 => "INT2",
	Int2Vector = 22 => "INT2VECTOR",
	Int4 = 23 => "INT4",
	RegProc = 24 => "REGPROC",
	Text = 25 => "TEXT",
	Oid = 26 => "OID",
	Tid = 27 => "TID",
	Xid = 28 => "XID",
	Cid = 29 => "CID",
	OidVector = 30 => "OIDVECTOR",
	PgDdlCommand = 32 => "PGDDLCOMMAND",
	Json = 114 => "JSON",
	Xml = 142 => "XML",
	PgNodeTree = 194 => "PGNODETREE",
	IndexAmHandler = 325 => "INDEX_AM_HANDLER",
	Point = 600 => "POINT",
	Lseg = 601 => "LSEG",
	Path = 602 => "PATH",
	Box = 603 => "BOX",
	Polygon = 604 => "POLYGON",
	Line = 628 => "LINE",
	Cidr = 650 => "CIDR",
	Float4 = 700 => "FLOAT4",
	Float8 = 701 => "FLOAT8",
	AbsTime = 702 => "ABSTIME",
	RelTime = 703 => "RELTIME",
	TInterval = 704 => "TINTERVAL",
	Unknown = 705 => "UNKNOWN",
	Circle = 718 => "CIRCLE",
	MacAddr8 = 774 => "MACADDR8",
	Cash = 790 => "CASH",
	MacAddr = 829 => "MACADDR",
	Inet = 869 => "INET",
	Int2Array = 1005 => "INT2ARRAY",
	Int4Array = 1007 => "INT4ARRAY",
	TextArray = 1009 => "TEXTARRAY",
	Float4Array = 1021 => "FLOAT4ARRAY",
	OidArray = 1028 => "OIDARRAY",
	AclItem = 1033 => "ACLITEM",
	BpChar = 1042 => "BPCHAR",
	VarChar = 1043 => "VARCHAR",
	Date = 1082 => "DATE",
	Time = 1083 => "TIME",
	Timestamp = 1114 => "TIMESTAMP",
	TimestampTz = 1184 => "TIMESTAMPTZ",
	Interval = 1186 => "INTERVAL",
	CStringArray = 1263 => "CSTRINGARRAY",
	TimeTz = 1266 => "TIMETZ",
	Bit = 1560 => "BIT",
	VarBit = 1562 => "VARBIT",
	Numeric = 1700 => "NUMERIC",
	RefCursor = 1790 => "REFCURSOR",
	RegProcedure = 2202 => "REGPROCEDURE",
	RegOper = 2203 => "REGOPER",
	RegOperator = 2204 => "REGOPERATOR",
	RegClass = 2205 => "REGCLASS",
	RegType = 2206 => "REGTYPE",
	RegTypeArray = 2211 => "REGTYPEARRAY",
	Record = 2249 => "RECORD",
	CString = 2275 => "CSTRING",
	Any = 2276 => "ANY",
	AnyArray = 2277 => "ANYARRAY",
	Void = 2278 => "VOID",
	Trigger = 2279 => "TRIGGER",
	LanguageHandler = 2280 => "LANGUAGE_HANDLER",
	Internal = 2281 => "INTERNAL",
	Opaque = 2282 => "OPAQUE",
	AnyElement = 2283 => "ANYELEMENT",
	RecordArray = 2287 => "RECORDARRAY",
	AnyNonArray = 2776 => "ANYNONARRAY",
	Uuid = 2950 => "UUID",
	FdwHandler = 3115 => "FDW_HANDLER",
	Lsn = 3220 => "LSN",
	TsmHandler = 3310 => "TSM_HANDLER",
	PgNDistinct = 3361 => "PGNDISTINCT",
	PgDependencies = 3402 => "PGDEPENDENCIES",
	AnyEnum = 3500 => "ANYENUM",
	TsVector = 3614 => "TSVECTOR",
	TsQuery = 3615 => "TSQUERY",
	GtsVector = 3642 => "GTSVECTOR",
	RegConfig = 3734 => "REGCONFIG",
	RegDictionary = 3769 => "REGDICTIONARY",
	Jsonb = 3802 => "JSONB",
	AnyRange = 3831 => "ANYRANGE",
	EventTrigger = 3838 => "EVTTRIGGER",
	Int4Range = 3904 => "INT4RANGE",
	RegNamespace = 4089 => "REGNAMESPACE",
	RegRole = 4096 => "REGROLE",
}

/// Name of a built-in type, or [`UNKNOWN_TYPE_NAME`] when the identifier
/// is not registered. Never fails.
pub fn type_oid_name(oid: Oid) -> &'static str {
	match TypeOid::from_oid(oid) {
		Some(type_oid) => type_oid.name(),
		None => UNKNOWN_TYPE_NAME,
	}
}
