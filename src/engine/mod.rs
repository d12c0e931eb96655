// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Reconciliation and export engines
//!
//! Pure request/response functions over a registry: no retained mutable
//! state, collaborators passed in per call.

pub mod export;
pub mod import;

pub use export::export_group;
pub use import::import_library;
