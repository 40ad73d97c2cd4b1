//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` and 1-based: the first vehicle generated
//! in a run is `VehicleId(1)`, the first booth built is `BoothId(1)`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty), prefix = $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first identifier handed out in a run.
            pub const FIRST: $name = $name(1);

            /// The identifier following `self`.
            #[inline]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a generated vehicle, unique and increasing within a run.
    pub struct VehicleId(u32), prefix = "#";
}

typed_id! {
    /// Identity of a booth.  Automatic booths are numbered first, then manual.
    pub struct BoothId(u32), prefix = "";
}
