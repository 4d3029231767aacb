// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind filter ranking.
//!
//! Which field matched decides the band; where in that field it matched only
//! orders items inside the band.
//!
//! ```text
//! rank = band + offset / 1000
//!
//! Title       band 0   rank ∈ [0, 1)
//! Description band 1   rank ∈ [1, 2)
//! Link        band 2   rank ∈ [2, 3)
//! ```
//!
//! # Known precision limit
//!
//! Bands only stay disjoint while offsets are below [`OFFSET_SCALE`]. A title
//! match at offset 1000 gets rank 1.0, the same as a description match at
//! offset 0, and a later one sorts after it. Item titles and short
//! descriptions never get close, so this is left as is.

/// Divisor that turns a UTF-16 offset into an in-band fraction.
pub const OFFSET_SCALE: f64 = 1000.0;

/// Which field an item matched in. Declaration order is priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankBand {
    Title = 0,
    Description = 1,
    Link = 2,
}

impl RankBand {
    /// Numeric base of the band.
    pub fn base(self) -> f64 {
        f64::from(self as u8)
    }
}

/// Rank for a match `offset` UTF-16 units into a field of `band`.
pub fn rank_value(band: RankBand, offset: usize) -> f64 {
    band.base() + offset as f64 / OFFSET_SCALE
}

/// First-occurrence offsets of the query in each checked field.
///
/// `description` is `None` both when the field did not match and when it was
/// not checked at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMatches {
    pub title: Option<usize>,
    pub description: Option<usize>,
    pub link: Option<usize>,
}

impl FieldMatches {
    /// Band and offset of the highest-priority field that matched.
    pub fn best(&self) -> Option<(RankBand, usize)> {
        self.title
            .map(|offset| (RankBand::Title, offset))
            .or_else(|| self.description.map(|offset| (RankBand::Description, offset)))
            .or_else(|| self.link.map(|offset| (RankBand::Link, offset)))
    }

    /// Rank of the best match, or `None` when nothing matched.
    pub fn rank(&self) -> Option<f64> {
        self.best().map(|(band, offset)| rank_value(band, offset))
    }
}
