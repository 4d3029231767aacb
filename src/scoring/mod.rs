// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how filtered items get their order.
//!
//! The key rule is that the matched field dominates everything else. A title
//! match anywhere in the title beats a description match at position 0, which
//! in turn beats a link-only match.

mod core;
pub mod ranking;

pub use self::core::*;
