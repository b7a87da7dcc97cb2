use {
    crate::{render::decode_enum, symbol, sys::EGLint},
    std::io,
    thiserror::Error,
};

/// Failures reported by this crate
///
/// Failing to load EGL or to set up the default display ends the report, and the
/// [`Display`](std::fmt::Display) text of the variant is the one-line diagnostic
/// printed by the `eglinfo` binary before it exits. Device failures are only logged
/// by [`write_report`](crate::report::write_report).
#[derive(Debug, Error)]
pub enum Error {
    /// The EGL library or one of its core entry points could not be loaded
    #[error("Could not load EGL: {0}")]
    Library(#[from] libloading::Error),

    /// `eglGetDisplay` returned `EGL_NO_DISPLAY`
    #[error("Could not obtain EGL display!")]
    NoDisplay,

    /// `eglInitialize` failed
    #[error("Could not initialize EGL!")]
    Initialize {
        /// The value of `eglGetError` after the failed call
        code: EGLint,
    },

    /// The first `eglGetConfigs` call, which only counts configurations, failed
    #[error("Could not retrieve the number of EGL configurations!")]
    ConfigCount,

    /// The second `eglGetConfigs` call, which fills in configuration handles, failed
    #[error("Could not retrieve EGL configurations!")]
    Configs,

    /// `eglQueryDevicesEXT` failed or is unavailable
    #[error("Could not enumerate EGL devices!")]
    Devices,

    /// Writing the report failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this is a write to a closed pipe, such as `eglinfo | head`
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

/// A `Result` defaulting to this crate's [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Format an `eglGetError` code by name, or in hex if it is unknown
///
/// ```rust
/// assert_eq!(eglinfo::error_name(0x3008), "EGL_BAD_DISPLAY");
/// assert_eq!(eglinfo::error_name(0x4000), "0x4000");
/// ```
pub fn error_name(code: EGLint) -> String {
    decode_enum(&symbol::ERROR, code).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_pipe() {
        assert!(Error::from(io::Error::from(io::ErrorKind::BrokenPipe)).is_broken_pipe());
        assert!(!Error::from(io::Error::from(io::ErrorKind::PermissionDenied)).is_broken_pipe());
        assert!(!Error::ConfigCount.is_broken_pipe());
    }

    #[test]
    fn setup_messages() {
        assert_eq!(Error::NoDisplay.to_string(), "Could not obtain EGL display!");
        assert_eq!(
            Error::Initialize {
                code: crate::sys::EGL_NOT_INITIALIZED
            }
            .to_string(),
            "Could not initialize EGL!"
        );
    }
}
