// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tags naming every supported temporal representation.

use std::fmt;

/// The temporal representations chronassert knows how to compare.
///
/// The tag drives the user-facing names in error messages and the
/// description of each representation's default comparison strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    /// `DateTime<chrono_tz::Tz>`: clock time plus an IANA zone
    Zoned,
    /// `DateTime<FixedOffset>`: clock time plus a fixed UTC offset
    Offset,
    /// `DateTime<Utc>`
    Utc,
    /// `NaiveDateTime`: clock time without zone information
    LocalDateTime,
    /// `NaiveDate`
    LocalDate,
}

impl Representation {
    /// Every representation, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Zoned,
        Self::Offset,
        Self::Utc,
        Self::LocalDateTime,
        Self::LocalDate,
    ];

    /// Name used in argument and parse error messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Zoned => "ZonedDateTime",
            Self::Offset => "OffsetDateTime",
            Self::Utc => "UtcDateTime",
            Self::LocalDateTime => "LocalDateTime",
            Self::LocalDate => "LocalDate",
        }
    }

    /// Description carried by the representation's default comparison strategy.
    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::Zoned => "default ZonedDateTime comparison by instant",
            Self::Offset => "default OffsetDateTime comparison by instant",
            Self::Utc => "default UtcDateTime comparison by instant",
            Self::LocalDateTime => "default LocalDateTime comparison by instant",
            Self::LocalDate => "default LocalDate comparison by instant",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
