//! Names for the multiplication variants, so callers (the benchmark
//! runner, the criterion suite) can pick one at runtime.

use std::fmt;
use std::str::FromStr;

use crate::blocked::DEFAULT_BLOCK_SIZE;
use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;

/// One multiplication algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    Ijk,
    Ikj,
    Kij,
    Blocked { block_size: usize },
}

impl Kernel {
    /// The four kernels, blocked at the default tile size. `Ijk` comes first
    /// since it's the usual speedup baseline.
    pub const ALL_DEFAULT: [Kernel; 4] = [
        Kernel::Ijk,
        Kernel::Ikj,
        Kernel::Kij,
        Kernel::Blocked {
            block_size: DEFAULT_BLOCK_SIZE,
        },
    ];

    /// Short label: `ijk`, `ikj`, `kij`, `blocked`, or `blocked_<size>` when
    /// the tile size isn't the default.
    pub fn name(&self) -> String {
        match self {
            Kernel::Ijk => "ijk".to_string(),
            Kernel::Ikj => "ikj".to_string(),
            Kernel::Kij => "kij".to_string(),
            Kernel::Blocked { block_size } if *block_size == DEFAULT_BLOCK_SIZE => {
                "blocked".to_string()
            }
            Kernel::Blocked { block_size } => format!("blocked_{}", block_size),
        }
    }

    /// Computes `a * b` into a fresh matrix.
    pub fn run(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        match *self {
            Kernel::Ijk => crate::matmul_ijk(a, b),
            Kernel::Ikj => crate::matmul_ikj(a, b),
            Kernel::Kij => crate::matmul_kij(a, b),
            Kernel::Blocked { block_size } => crate::matmul_blocked(a, b, block_size),
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Kernel {
    type Err = MatmulError;

    /// Accepts `ijk`, `ikj`, `kij`, `blocked`, and `blocked:<size>` (or
    /// `blocked_<size>`, the form [`Kernel::name`] prints). Case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let unknown = || MatmulError::UnknownKernel(s.to_string());

        match lower.as_str() {
            "ijk" => return Ok(Kernel::Ijk),
            "ikj" => return Ok(Kernel::Ikj),
            "kij" => return Ok(Kernel::Kij),
            "blocked" => {
                return Ok(Kernel::Blocked {
                    block_size: DEFAULT_BLOCK_SIZE,
                });
            }
            _ => {}
        }

        let size = lower
            .strip_prefix("blocked:")
            .or_else(|| lower.strip_prefix("blocked_"))
            .ok_or_else(unknown)?;
        let block_size: usize = size.parse().map_err(|_| unknown())?;
        if block_size == 0 {
            return Err(MatmulError::InvalidBlockSize);
        }
        Ok(Kernel::Blocked { block_size })
    }
}
