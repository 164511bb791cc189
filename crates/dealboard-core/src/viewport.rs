//! Display-width breakpoints.
//!
//! | breakpoint | width        | items per group | columns per row |
//! |------------|--------------|-----------------|-----------------|
//! | `Wide`     | >= 992       | 4               | 4               |
//! | `Medium`   | 768..992     | 3               | 3               |
//! | `Narrow`   | 403..768     | 2               | 2               |
//! | `Compact`  | < 403        | 1               | none (full width) |

const WIDE_MIN: u32 = 992;
const MEDIUM_MIN: u32 = 768;
const NARROW_MIN: u32 = 403;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Compact,
    Narrow,
    Medium,
    Wide,
}

impl Breakpoint {
    #[must_use]
    pub fn from_width(width: u32) -> Self {
        if width >= WIDE_MIN {
            Breakpoint::Wide
        } else if width >= MEDIUM_MIN {
            Breakpoint::Medium
        } else if width >= NARROW_MIN {
            Breakpoint::Narrow
        } else {
            Breakpoint::Compact
        }
    }

    /// Number of top deals shown together in one rotation step.
    #[must_use]
    pub fn items_per_group(self) -> usize {
        match self {
            Breakpoint::Wide => 4,
            Breakpoint::Medium => 3,
            Breakpoint::Narrow => 2,
            Breakpoint::Compact => 1,
        }
    }

    /// Grid columns for the main listing. `None` means no explicit column
    /// count: each card takes the full width.
    #[must_use]
    pub fn columns_per_row(self) -> Option<usize> {
        match self {
            Breakpoint::Wide => Some(4),
            Breakpoint::Medium => Some(3),
            Breakpoint::Narrow => Some(2),
            Breakpoint::Compact => None,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Breakpoint::Wide => write!(f, "wide"),
            Breakpoint::Medium => write!(f, "medium"),
            Breakpoint::Narrow => write!(f, "narrow"),
            Breakpoint::Compact => write!(f, "compact"),
        }
    }
}
