use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::{Display, Formatter};

/// BGP ORIGIN attribute value.
///
/// The numeric values match the ORIGIN attribute codes from RFC 4271 section 5.1.1.
#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Origin {
    IGP = 0,
    EGP = 1,
    INCOMPLETE = 2,
}

impl Origin {
    /// Decodes the origin code printed at the end of a table line (`Origin codes: i - IGP,
    /// e - EGP, ? - incomplete`). Letters are accepted in either case.
    pub fn from_table_code(code: char) -> Option<Origin> {
        match code {
            'i' | 'I' => Some(Origin::IGP),
            'e' | 'E' => Some(Origin::EGP),
            '?' => Some(Origin::INCOMPLETE),
            _ => None,
        }
    }

    pub const fn table_code(&self) -> char {
        match self {
            Origin::IGP => 'i',
            Origin::EGP => 'e',
            Origin::INCOMPLETE => '?',
        }
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::IGP => write!(f, "IGP"),
            Origin::EGP => write!(f, "EGP"),
            Origin::INCOMPLETE => write!(f, "INCOMPLETE"),
        }
    }
}
