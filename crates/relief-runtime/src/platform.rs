//! Host platform detection.

/// Platform families that need different interpreter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Python interpreter command for this platform.
    pub const fn interpreter(self) -> &'static str {
        match self {
            Self::Windows => "python",
            Self::Other => "python3",
        }
    }
}
