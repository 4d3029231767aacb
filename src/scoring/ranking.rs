// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering for a filter pass.
//!
//! Sort order:
//! 1. **Rank** - ascending (band first, then in-band offset)
//! 2. **Original index** - items keep their payload order on ties

use crate::types::RankedEntry;
use std::cmp::Ordering;

/// Compare two ranked entries.
///
/// Ranks are finite by construction; should a NaN ever appear it compares equal
/// and the original index decides.
pub fn compare_entries(a: &RankedEntry<'_>, b: &RankedEntry<'_>) -> Ordering {
    match a.rank.partial_cmp(&b.rank) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.original_index.cmp(&b.original_index),
    }
}
