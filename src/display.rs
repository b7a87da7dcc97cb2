use {
    crate::{
        error::{error_name, Error, Result},
        sys::{self, EGLConfig, EGLDisplay, EGLint, Egl},
    },
    log::{debug, warn},
    std::{
        fmt::{self, Debug, Formatter},
        ptr,
    },
};

/// An EGL display connection
///
/// This is a wrapper around an [`EGLDisplay`][egldisplay] handle, which is
/// terminated on drop if it was [initialized](Self::initialize).
///
/// [egldisplay]: https://registry.khronos.org/EGL/sdk/docs/man/html/eglGetDisplay.xhtml
#[doc(alias = "EGLDisplay")]
pub struct Display<'e> {
    egl: &'e Egl,
    handle: EGLDisplay,
    initialized: bool,
}

impl<'e> Display<'e> {
    /// Obtain the platform's default display
    #[doc(alias = "eglGetDisplay")]
    #[doc(alias = "EGL_DEFAULT_DISPLAY")]
    pub fn open_default(egl: &'e Egl) -> Result<Self> {
        let handle = unsafe { (egl.get_display)(sys::EGL_DEFAULT_DISPLAY) };
        match handle == sys::EGL_NO_DISPLAY {
            true => Err(Error::NoDisplay),
            false => Ok(unsafe { Self::from_raw(egl, handle) }),
        }
    }

    /// Initialize the connection, returning the EGL `(major, minor)` version
    #[doc(alias = "eglInitialize")]
    pub fn initialize(&mut self) -> Result<(EGLint, EGLint)> {
        let (mut major, mut minor) = (0, 0);
        match unsafe { (self.egl.initialize)(self.handle, &mut major, &mut minor) } {
            0 => {
                let code = self.egl.last_error();
                warn!("eglInitialize failed: {}", error_name(code));
                Err(Error::Initialize { code })
            },
            _ => {
                self.initialized = true;
                debug!("initialized EGL {major}.{minor} on {:?}", self.handle);
                Ok((major, minor))
            },
        }
    }

    /// Query one of the display's strings, such as `EGL_VENDOR`
    #[doc(alias = "eglQueryString")]
    pub fn query_string(&self, name: EGLint) -> Option<String> {
        unsafe { Egl::string((self.egl.query_string)(self.handle, name)) }
    }

    /// The display's space-separated extension list, or an empty string
    #[doc(alias = "EGL_EXTENSIONS")]
    pub fn extensions(&self) -> String {
        self.query_string(sys::EGL_EXTENSIONS).unwrap_or_default()
    }

    /// Retrieve handles to every framebuffer configuration supported by the display
    #[doc(alias = "eglGetConfigs")]
    pub fn configs(&self) -> Result<Vec<Config>> {
        let mut count = 0;
        if unsafe { (self.egl.get_configs)(self.handle, ptr::null_mut(), 0, &mut count) } == 0 {
            return Err(Error::ConfigCount)
        }
        debug!("{count} configs");
        let capacity = count.max(0) as usize;
        if capacity == 0 {
            return Ok(Vec::new())
        }

        let mut configs: Vec<EGLConfig> = Vec::with_capacity(capacity);
        if unsafe { (self.egl.get_configs)(self.handle, configs.as_mut_ptr(), count, &mut count) } == 0 {
            return Err(Error::Configs)
        }
        unsafe {
            configs.set_len((count.max(0) as usize).min(capacity));
        }
        Ok(configs.into_iter().map(|handle| Config { handle }).collect())
    }

    /// Query one attribute of `config`, or `None` if EGL reports a failure
    #[doc(alias = "eglGetConfigAttrib")]
    pub fn config_attrib(&self, config: Config, attribute: EGLint) -> Option<EGLint> {
        let mut value = 0;
        match unsafe { (self.egl.get_config_attrib)(self.handle, config.handle, attribute, &mut value) } {
            0 => {
                debug!(
                    "eglGetConfigAttrib({attribute:#06x}) failed: {}",
                    error_name(self.egl.last_error())
                );
                None
            },
            _ => Some(value),
        }
    }
}

#[allow(missing_docs)]
#[cfg_attr(feature = "doc", doc(cfg(feature = "sys")))]
#[cfg_attr(not(feature = "sys"), doc(hidden))]
impl<'e> Display<'e> {
    /// Wrap an uninitialized display handle
    ///
    /// # Safety
    ///
    /// `handle` must be a valid display obtained from `egl`.
    pub unsafe fn from_raw(egl: &'e Egl, handle: EGLDisplay) -> Self {
        Self {
            egl,
            handle,
            initialized: false,
        }
    }

    pub const fn raw_handle(&self) -> EGLDisplay {
        self.handle
    }
}

impl Drop for Display<'_> {
    #[doc(alias = "eglTerminate")]
    fn drop(&mut self) {
        if self.initialized {
            let _ = unsafe { (self.egl.terminate)(self.handle) };
        }
    }
}

impl Debug for Display<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Display")
            .field("handle", &self.handle)
            .field("initialized", &self.initialized)
            .finish()
    }
}

/// An opaque framebuffer configuration handle
///
/// Only meaningful to the [`Display`] it was retrieved from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
#[doc(alias = "EGLConfig")]
pub struct Config {
    handle: EGLConfig,
}

#[allow(missing_docs)]
#[cfg_attr(feature = "doc", doc(cfg(feature = "sys")))]
#[cfg_attr(not(feature = "sys"), doc(hidden))]
impl Config {
    pub const fn from_raw(handle: EGLConfig) -> Self {
        Self { handle }
    }

    pub const fn raw_handle(&self) -> EGLConfig {
        self.handle
    }
}

/// The client extension string, queried without a display
///
/// Returns `None` if the implementation does not support `EGL_EXT_client_extensions`.
#[doc(alias = "EGL_EXT_client_extensions")]
pub fn client_extensions(egl: &Egl) -> Option<String> {
    let extensions = unsafe { Egl::string((egl.query_string)(sys::EGL_NO_DISPLAY, sys::EGL_EXTENSIONS)) };
    if extensions.is_none() {
        // clear EGL_BAD_DISPLAY
        let _ = egl.last_error();
    }
    extensions
}
