use crate::algebra::{CompressedKind, MatrixError, MatrixFormat, Violation};
use std::fmt;
use std::str::FromStr;

impl MatrixFormat {
    /// All known formats
    pub const ALL: [MatrixFormat; 3] = [
        MatrixFormat::SymmetricCompressed,
        MatrixFormat::LowerTriangularCompressed,
        MatrixFormat::Triplet,
    ];

    /// The compressed interpretation, or `None` for triplet
    pub fn compressed_kind(&self) -> Option<CompressedKind> {
        match self {
            MatrixFormat::SymmetricCompressed => Some(CompressedKind::Symmetric),
            MatrixFormat::LowerTriangularCompressed => Some(CompressedKind::LowerTriangular),
            MatrixFormat::Triplet => None,
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed_kind().is_some()
    }

    /// Short tag, e.g. `"ssm"`
    pub fn tag(&self) -> &'static str {
        match self {
            MatrixFormat::SymmetricCompressed => "ssm",
            MatrixFormat::LowerTriangularCompressed => "sltm",
            MatrixFormat::Triplet => "tm",
        }
    }
}

impl From<CompressedKind> for MatrixFormat {
    fn from(kind: CompressedKind) -> Self {
        match kind {
            CompressedKind::Symmetric => MatrixFormat::SymmetricCompressed,
            CompressedKind::LowerTriangular => MatrixFormat::LowerTriangularCompressed,
        }
    }
}

impl fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatrixFormat::SymmetricCompressed => "sparse symmetrical matrix",
            MatrixFormat::LowerTriangularCompressed => "sparse lower triangular matrix",
            MatrixFormat::Triplet => "triplet matrix format",
        };
        f.write_str(name)
    }
}

// numeric codes start at 1.  Zero is kept invalid so that an
// uninitialized tag is never mistaken for a real format.
impl TryFrom<u8> for MatrixFormat {
    type Error = MatrixError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(MatrixFormat::SymmetricCompressed),
            2 => Ok(MatrixFormat::LowerTriangularCompressed),
            3 => Ok(MatrixFormat::Triplet),
            _ => Err(Violation::UnknownFormat(code.to_string()).into()),
        }
    }
}

impl From<MatrixFormat> for u8 {
    fn from(format: MatrixFormat) -> Self {
        match format {
            MatrixFormat::SymmetricCompressed => 1,
            MatrixFormat::LowerTriangularCompressed => 2,
            MatrixFormat::Triplet => 3,
        }
    }
}

impl FromStr for MatrixFormat {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        MatrixFormat::ALL
            .into_iter()
            .find(|f| lower == f.tag() || lower == f.to_string())
            .ok_or_else(|| Violation::UnknownFormat(s.to_string()).into())
    }
}

impl From<Violation> for MatrixError {
    fn from(violation: Violation) -> Self {
        MatrixError::Validation(violation.into())
    }
}
