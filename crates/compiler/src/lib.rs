// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod ast;
pub mod call;
pub mod context;
pub mod error;
pub mod keyword;
pub mod limit;
pub mod request;
pub mod rewrite;
pub mod settings;

pub use ast::{Call, Expr};
pub use call::{compile, compile_call};
pub use context::CompileContext;
pub use error::{CompileError, SettingsError};
pub use keyword::{bind_alias, is_keyword_literal, is_reserved_keyword, keyword_literal};
pub use limit::{DEFAULT_RETURNED_ROWS, MAX_SELECT_RETURNED_ROWS, effective_limit};
pub use request::{CompileOutput, CompileRequest};
pub use rewrite::{RewrittenCall, rewrite};
pub use settings::{QuerySettings, enforce};
