//! [EGL devices][device] and their properties
//!
//! Devices are enumerated through `EGL_EXT_device_enumeration`, and queried through
//! `EGL_EXT_device_query`. Each device may expose a display of its own through
//! `EGL_EXT_platform_device`.
//!
//! [device]: https://registry.khronos.org/EGL/extensions/EXT/EGL_EXT_device_base.txt

pub use self::prop::{applicable_properties, DeviceProperty, PropertyKind, DEVICE_PROPERTIES};
use {
    crate::{
        error::{error_name, Error, Result},
        sys::{self, EGLAttrib, EGLDeviceEXT, EGLint, Egl},
        Display,
    },
    log::{debug, warn},
    std::{
        fmt::{self, Debug, Formatter},
        ptr,
    },
};

mod prop;

/// The client extension required by [`Device::enumerate`]
pub const ENUMERATION_EXTENSION: &str = "EGL_EXT_device_enumeration";

/// The client extension required by [`Device::platform_display`]
pub const PLATFORM_EXTENSION: &str = "EGL_EXT_platform_device";

/// A handle to an EGL device
///
/// This is a wrapper around an [`EGLDeviceEXT`][device].
///
/// [device]: https://registry.khronos.org/EGL/extensions/EXT/EGL_EXT_device_base.txt
#[derive(Copy, Clone)]
#[doc(alias = "EGLDeviceEXT")]
pub struct Device<'e> {
    egl: &'e Egl,
    handle: EGLDeviceEXT,
}

impl<'e> Device<'e> {
    /// Enumerate every device known to EGL
    #[doc(alias = "eglQueryDevicesEXT")]
    pub fn enumerate(egl: &'e Egl) -> Result<Vec<Self>> {
        let query_devices = egl.device.query_devices.ok_or(Error::Devices)?;

        let mut count = 0;
        if unsafe { query_devices(0, ptr::null_mut(), &mut count) } == 0 {
            warn!("eglQueryDevicesEXT failed: {}", error_name(egl.last_error()));
            return Err(Error::Devices)
        }
        debug!("{count} devices");
        let capacity = count.max(0) as usize;
        if capacity == 0 {
            return Ok(Vec::new())
        }

        let mut devices: Vec<EGLDeviceEXT> = Vec::with_capacity(capacity);
        if unsafe { query_devices(count, devices.as_mut_ptr(), &mut count) } == 0 {
            warn!("eglQueryDevicesEXT failed: {}", error_name(egl.last_error()));
            return Err(Error::Devices)
        }
        unsafe {
            devices.set_len((count.max(0) as usize).min(capacity));
        }
        Ok(devices.into_iter().map(|handle| unsafe { Self::from_raw(egl, handle) }).collect())
    }

    /// The device's extension string, or an empty string
    #[doc(alias = "EGL_EXTENSIONS")]
    pub fn extensions(&self) -> String {
        self.query_string(sys::EGL_EXTENSIONS).unwrap_or_default()
    }

    /// Query a device string, or `None` if the query fails
    #[doc(alias = "eglQueryDeviceStringEXT")]
    pub fn query_string(&self, name: EGLint) -> Option<String> {
        let query = self.egl.device.query_device_string?;
        let value = unsafe { Egl::string(query(self.handle, name)) };
        if value.is_none() {
            debug!("eglQueryDeviceStringEXT({name:#06x}) failed: {}", error_name(self.egl.last_error()));
        }
        value
    }

    /// Query a device attribute, or `None` if the query fails
    #[doc(alias = "eglQueryDeviceAttribEXT")]
    pub fn query_attrib(&self, attribute: EGLint) -> Option<EGLAttrib> {
        let query = self.egl.device.query_device_attrib?;
        let mut value = 0;
        match unsafe { query(self.handle, attribute, &mut value) } {
            0 => {
                debug!(
                    "eglQueryDeviceAttribEXT({attribute:#06x}) failed: {}",
                    error_name(self.egl.last_error())
                );
                None
            },
            _ => Some(value),
        }
    }

    /// Obtain the uninitialized display that renders to this device
    #[doc(alias = "eglGetPlatformDisplayEXT")]
    #[doc(alias = "EGL_PLATFORM_DEVICE_EXT")]
    pub fn platform_display(&self) -> Result<Display<'e>> {
        let get_platform_display = self.egl.device.get_platform_display.ok_or(Error::NoDisplay)?;
        let handle = unsafe { get_platform_display(sys::EGL_PLATFORM_DEVICE_EXT, self.handle, ptr::null()) };
        match handle == sys::EGL_NO_DISPLAY {
            true => {
                debug!("eglGetPlatformDisplayEXT failed: {}", error_name(self.egl.last_error()));
                Err(Error::NoDisplay)
            },
            false => Ok(unsafe { Display::from_raw(self.egl, handle) }),
        }
    }
}

#[allow(missing_docs)]
#[cfg_attr(feature = "doc", doc(cfg(feature = "sys")))]
#[cfg_attr(not(feature = "sys"), doc(hidden))]
impl<'e> Device<'e> {
    /// Wrap a device handle
    ///
    /// # Safety
    ///
    /// `handle` must be a valid device obtained from `egl`.
    pub unsafe fn from_raw(egl: &'e Egl, handle: EGLDeviceEXT) -> Self {
        Self { egl, handle }
    }

    pub const fn raw_handle(&self) -> EGLDeviceEXT {
        self.handle
    }
}

impl Debug for Device<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Device").field(&self.handle).finish()
    }
}
