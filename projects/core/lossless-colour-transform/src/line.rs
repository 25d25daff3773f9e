//! Line descriptors.
//!
//! A line is one scanline of one component, borrowed from the codec's line buffers.
//! It carries the only metadata the kernels care about: how many samples it holds,
//! at which width they are stored, and whether the component is coded reversibly.

use bitflags::bitflags;
use derive_enum_all_values::AllValues;

bitflags! {
    /// Flags describing how a line buffer is stored and coded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineFlags: u32 {
        /// Samples are stored as `i32`.
        const BITS_32 = 1 << 0;
        /// Samples are stored as `i64`.
        const BITS_64 = 1 << 1;
        /// The component is coded with the reversible (integer) path.
        const REVERSIBLE = 1 << 2;
    }
}

/// Numeric width a line's samples are stored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum WidthClass {
    /// 32-bit samples.
    Native32,
    /// 64-bit samples, used when intermediate sums would overflow 32 bits.
    Widened64,
}

impl WidthClass {
    /// Flag corresponding to this width.
    #[inline]
    pub const fn flag(self) -> LineFlags {
        match self {
            WidthClass::Native32 => LineFlags::BITS_32,
            WidthClass::Widened64 => LineFlags::BITS_64,
        }
    }
}

/// Borrowed samples of a read-only line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSamples<'a> {
    /// 32-bit samples.
    I32(&'a [i32]),
    /// 64-bit samples.
    I64(&'a [i64]),
}

/// Borrowed samples of a writable line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineSamplesMut<'a> {
    /// 32-bit samples.
    I32(&'a mut [i32]),
    /// 64-bit samples.
    I64(&'a mut [i64]),
}

impl LineSamples<'_> {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            LineSamples::I32(samples) => samples.len(),
            LineSamples::I64(samples) => samples.len(),
        }
    }

    /// Returns `true` if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width the samples are stored at.
    #[inline]
    pub fn width_class(&self) -> WidthClass {
        match self {
            LineSamples::I32(_) => WidthClass::Native32,
            LineSamples::I64(_) => WidthClass::Widened64,
        }
    }
}

impl LineSamplesMut<'_> {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            LineSamplesMut::I32(samples) => samples.len(),
            LineSamplesMut::I64(samples) => samples.len(),
        }
    }

    /// Returns `true` if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width the samples are stored at.
    #[inline]
    pub fn width_class(&self) -> WidthClass {
        match self {
            LineSamplesMut::I32(_) => WidthClass::Native32,
            LineSamplesMut::I64(_) => WidthClass::Widened64,
        }
    }
}

/// A read-only line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The samples.
    pub samples: LineSamples<'a>,
    /// Whether the component is coded reversibly.
    pub reversible: bool,
}

impl<'a> Line<'a> {
    /// Creates a line over 32-bit samples.
    #[inline]
    pub fn new_i32(samples: &'a [i32], reversible: bool) -> Self {
        Self {
            samples: LineSamples::I32(samples),
            reversible,
        }
    }

    /// Creates a line over 64-bit samples.
    #[inline]
    pub fn new_i64(samples: &'a [i64], reversible: bool) -> Self {
        Self {
            samples: LineSamples::I64(samples),
            reversible,
        }
    }

    /// Number of samples in the line.
    #[inline]
    pub fn width(&self) -> usize {
        self.samples.len()
    }

    /// Width the samples are stored at.
    #[inline]
    pub fn width_class(&self) -> WidthClass {
        self.samples.width_class()
    }

    /// Whether the component is coded reversibly.
    #[inline]
    pub fn is_reversible(&self) -> bool {
        self.reversible
    }

    /// The line described as [`LineFlags`].
    #[inline]
    pub fn flags(&self) -> LineFlags {
        line_flags(self.width_class(), self.reversible)
    }
}

/// A writable line.
#[derive(Debug, PartialEq, Eq)]
pub struct LineMut<'a> {
    /// The samples.
    pub samples: LineSamplesMut<'a>,
    /// Whether the component is coded reversibly.
    pub reversible: bool,
}

impl<'a> LineMut<'a> {
    /// Creates a line over 32-bit samples.
    #[inline]
    pub fn new_i32(samples: &'a mut [i32], reversible: bool) -> Self {
        Self {
            samples: LineSamplesMut::I32(samples),
            reversible,
        }
    }

    /// Creates a line over 64-bit samples.
    #[inline]
    pub fn new_i64(samples: &'a mut [i64], reversible: bool) -> Self {
        Self {
            samples: LineSamplesMut::I64(samples),
            reversible,
        }
    }

    /// Number of samples in the line.
    #[inline]
    pub fn width(&self) -> usize {
        self.samples.len()
    }

    /// Width the samples are stored at.
    #[inline]
    pub fn width_class(&self) -> WidthClass {
        self.samples.width_class()
    }

    /// Whether the component is coded reversibly.
    #[inline]
    pub fn is_reversible(&self) -> bool {
        self.reversible
    }

    /// The line described as [`LineFlags`].
    #[inline]
    pub fn flags(&self) -> LineFlags {
        line_flags(self.width_class(), self.reversible)
    }
}

#[inline]
fn line_flags(width: WidthClass, reversible: bool) -> LineFlags {
    let mut flags = width.flag();
    flags.set(LineFlags::REVERSIBLE, reversible);
    flags
}
