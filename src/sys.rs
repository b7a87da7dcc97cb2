#![allow(non_camel_case_types, missing_docs)]

//! Raw [EGL][egl] types, constants, and entry points
//!
//! The EGL library is loaded at runtime with [`libloading`], so nothing here links
//! against `libEGL` at build time.
//!
//! [egl]: https://registry.khronos.org/EGL/sdk/docs/man/html/eglIntro.xhtml

use {
    libloading::Library,
    log::{debug, warn},
    std::{
        env,
        ffi::{c_char, c_void, CStr, OsStr},
        fmt::{self, Debug, Formatter},
        mem, ptr,
    },
};

pub type EGLint = i32;
pub type EGLBoolean = u32;
pub type EGLenum = u32;
pub type EGLAttrib = isize;
pub type EGLDisplay = *mut c_void;
pub type EGLConfig = *mut c_void;
pub type EGLDeviceEXT = *mut c_void;
pub type EGLNativeDisplayType = *mut c_void;

pub const EGL_FALSE: EGLint = 0;
pub const EGL_TRUE: EGLint = 1;
pub const EGL_DEFAULT_DISPLAY: EGLNativeDisplayType = ptr::null_mut();
pub const EGL_NO_DISPLAY: EGLDisplay = ptr::null_mut();
pub const EGL_NONE: EGLint = 0x3038;

// errors
pub const EGL_SUCCESS: EGLint = 0x3000;
pub const EGL_NOT_INITIALIZED: EGLint = 0x3001;
pub const EGL_BAD_ACCESS: EGLint = 0x3002;
pub const EGL_BAD_ALLOC: EGLint = 0x3003;
pub const EGL_BAD_ATTRIBUTE: EGLint = 0x3004;
pub const EGL_BAD_CONFIG: EGLint = 0x3005;
pub const EGL_BAD_CONTEXT: EGLint = 0x3006;
pub const EGL_BAD_CURRENT_SURFACE: EGLint = 0x3007;
pub const EGL_BAD_DISPLAY: EGLint = 0x3008;
pub const EGL_BAD_MATCH: EGLint = 0x3009;
pub const EGL_BAD_NATIVE_PIXMAP: EGLint = 0x300A;
pub const EGL_BAD_NATIVE_WINDOW: EGLint = 0x300B;
pub const EGL_BAD_PARAMETER: EGLint = 0x300C;
pub const EGL_BAD_SURFACE: EGLint = 0x300D;
pub const EGL_CONTEXT_LOST: EGLint = 0x300E;
pub const EGL_BAD_DEVICE_EXT: EGLint = 0x322B;

// config attributes
pub const EGL_BUFFER_SIZE: EGLint = 0x3020;
pub const EGL_ALPHA_SIZE: EGLint = 0x3021;
pub const EGL_BLUE_SIZE: EGLint = 0x3022;
pub const EGL_GREEN_SIZE: EGLint = 0x3023;
pub const EGL_RED_SIZE: EGLint = 0x3024;
pub const EGL_DEPTH_SIZE: EGLint = 0x3025;
pub const EGL_STENCIL_SIZE: EGLint = 0x3026;
pub const EGL_CONFIG_CAVEAT: EGLint = 0x3027;
pub const EGL_CONFIG_ID: EGLint = 0x3028;
pub const EGL_LEVEL: EGLint = 0x3029;
pub const EGL_MAX_PBUFFER_HEIGHT: EGLint = 0x302A;
pub const EGL_MAX_PBUFFER_PIXELS: EGLint = 0x302B;
pub const EGL_MAX_PBUFFER_WIDTH: EGLint = 0x302C;
pub const EGL_NATIVE_RENDERABLE: EGLint = 0x302D;
pub const EGL_NATIVE_VISUAL_ID: EGLint = 0x302E;
pub const EGL_NATIVE_VISUAL_TYPE: EGLint = 0x302F;
pub const EGL_SAMPLES: EGLint = 0x3031;
pub const EGL_SAMPLE_BUFFERS: EGLint = 0x3032;
pub const EGL_SURFACE_TYPE: EGLint = 0x3033;
pub const EGL_TRANSPARENT_TYPE: EGLint = 0x3034;
pub const EGL_TRANSPARENT_BLUE_VALUE: EGLint = 0x3035;
pub const EGL_TRANSPARENT_GREEN_VALUE: EGLint = 0x3036;
pub const EGL_TRANSPARENT_RED_VALUE: EGLint = 0x3037;
pub const EGL_BIND_TO_TEXTURE_RGB: EGLint = 0x3039;
pub const EGL_BIND_TO_TEXTURE_RGBA: EGLint = 0x303A;
pub const EGL_MIN_SWAP_INTERVAL: EGLint = 0x303B;
pub const EGL_MAX_SWAP_INTERVAL: EGLint = 0x303C;
pub const EGL_LUMINANCE_SIZE: EGLint = 0x303D;
pub const EGL_ALPHA_MASK_SIZE: EGLint = 0x303E;
pub const EGL_COLOR_BUFFER_TYPE: EGLint = 0x303F;
pub const EGL_RENDERABLE_TYPE: EGLint = 0x3040;
pub const EGL_CONFORMANT: EGLint = 0x3042;
pub const EGL_RECORDABLE_ANDROID: EGLint = 0x3142;
pub const EGL_COLOR_COMPONENT_TYPE_EXT: EGLint = 0x3339;

// config attribute values
pub const EGL_SLOW_CONFIG: EGLint = 0x3050;
pub const EGL_NON_CONFORMANT_CONFIG: EGLint = 0x3051;
pub const EGL_TRANSPARENT_RGB: EGLint = 0x3052;
pub const EGL_RGB_BUFFER: EGLint = 0x308E;
pub const EGL_LUMINANCE_BUFFER: EGLint = 0x308F;
pub const EGL_COLOR_COMPONENT_TYPE_FIXED_EXT: EGLint = 0x333A;
pub const EGL_COLOR_COMPONENT_TYPE_FLOAT_EXT: EGLint = 0x333B;

// EGL_SURFACE_TYPE bits
pub const EGL_PBUFFER_BIT: EGLint = 0x0001;
pub const EGL_PIXMAP_BIT: EGLint = 0x0002;
pub const EGL_WINDOW_BIT: EGLint = 0x0004;
pub const EGL_VG_COLORSPACE_LINEAR_BIT: EGLint = 0x0020;
pub const EGL_VG_ALPHA_FORMAT_PRE_BIT: EGLint = 0x0040;
pub const EGL_LOCK_SURFACE_BIT_KHR: EGLint = 0x0080;
pub const EGL_OPTIMAL_FORMAT_BIT_KHR: EGLint = 0x0100;
pub const EGL_MULTISAMPLE_RESOLVE_BOX_BIT: EGLint = 0x0200;
pub const EGL_SWAP_BEHAVIOR_PRESERVED_BIT: EGLint = 0x0400;
pub const EGL_STREAM_BIT_KHR: EGLint = 0x0800;
pub const EGL_MUTABLE_RENDER_BUFFER_BIT_KHR: EGLint = 0x1000;

// EGL_RENDERABLE_TYPE / EGL_CONFORMANT bits
pub const EGL_OPENGL_ES_BIT: EGLint = 0x0001;
pub const EGL_OPENVG_BIT: EGLint = 0x0002;
pub const EGL_OPENGL_ES2_BIT: EGLint = 0x0004;
pub const EGL_OPENGL_BIT: EGLint = 0x0008;
pub const EGL_OPENGL_ES3_BIT: EGLint = 0x0040;

// eglQueryString names
pub const EGL_VENDOR: EGLint = 0x3053;
pub const EGL_VERSION: EGLint = 0x3054;
pub const EGL_EXTENSIONS: EGLint = 0x3055;
pub const EGL_CLIENT_APIS: EGLint = 0x308D;

// device queries
pub const EGL_DRM_DEVICE_FILE_EXT: EGLint = 0x3233;
pub const EGL_CUDA_DEVICE_NV: EGLint = 0x323A;
pub const EGL_RENDERER_EXT: EGLint = 0x335F;
pub const EGL_DRM_RENDER_NODE_FILE_EXT: EGLint = 0x3377;
pub const EGL_PLATFORM_DEVICE_EXT: EGLenum = 0x313F;

/// Overrides the path of the EGL library loaded by [`Egl::load`]
pub const LIBRARY_ENV: &str = "EGLINFO_LIBRARY";

/// Library names tried by [`Egl::load`], in order
pub const LIBRARY_NAMES: &[&str] = &["libEGL.so.1", "libEGL.so"];

pub type PFNEGLGETDISPLAYPROC = unsafe extern "system" fn(EGLNativeDisplayType) -> EGLDisplay;
pub type PFNEGLINITIALIZEPROC = unsafe extern "system" fn(EGLDisplay, *mut EGLint, *mut EGLint) -> EGLBoolean;
pub type PFNEGLTERMINATEPROC = unsafe extern "system" fn(EGLDisplay) -> EGLBoolean;
pub type PFNEGLQUERYSTRINGPROC = unsafe extern "system" fn(EGLDisplay, EGLint) -> *const c_char;
pub type PFNEGLGETCONFIGSPROC = unsafe extern "system" fn(EGLDisplay, *mut EGLConfig, EGLint, *mut EGLint) -> EGLBoolean;
pub type PFNEGLGETCONFIGATTRIBPROC =
    unsafe extern "system" fn(EGLDisplay, EGLConfig, EGLint, *mut EGLint) -> EGLBoolean;
pub type PFNEGLGETERRORPROC = unsafe extern "system" fn() -> EGLint;
pub type PFNEGLGETPROCADDRESSPROC = unsafe extern "system" fn(*const c_char) -> *const c_void;
pub type PFNEGLQUERYDEVICESEXTPROC = unsafe extern "system" fn(EGLint, *mut EGLDeviceEXT, *mut EGLint) -> EGLBoolean;
pub type PFNEGLQUERYDEVICESTRINGEXTPROC = unsafe extern "system" fn(EGLDeviceEXT, EGLint) -> *const c_char;
pub type PFNEGLQUERYDEVICEATTRIBEXTPROC =
    unsafe extern "system" fn(EGLDeviceEXT, EGLint, *mut EGLAttrib) -> EGLBoolean;
pub type PFNEGLGETPLATFORMDISPLAYEXTPROC =
    unsafe extern "system" fn(EGLenum, *mut c_void, *const EGLint) -> EGLDisplay;

/// Core EGL 1.4 entry points, resolved from a dynamically loaded library
pub struct Egl {
    pub get_display: PFNEGLGETDISPLAYPROC,
    pub initialize: PFNEGLINITIALIZEPROC,
    pub terminate: PFNEGLTERMINATEPROC,
    pub query_string: PFNEGLQUERYSTRINGPROC,
    pub get_configs: PFNEGLGETCONFIGSPROC,
    pub get_config_attrib: PFNEGLGETCONFIGATTRIBPROC,
    pub get_error: PFNEGLGETERRORPROC,
    pub get_proc_address: PFNEGLGETPROCADDRESSPROC,
    /// Optional `EGL_EXT_device_*` and `EGL_EXT_platform_device` entry points
    pub device: DeviceExt,
    _library: Library,
}

/// Extension entry points resolved through `eglGetProcAddress`
///
/// Any of these may be missing on implementations that lack the extension.
#[derive(Copy, Clone, Default)]
pub struct DeviceExt {
    pub query_devices: Option<PFNEGLQUERYDEVICESEXTPROC>,
    pub query_device_string: Option<PFNEGLQUERYDEVICESTRINGEXTPROC>,
    pub query_device_attrib: Option<PFNEGLQUERYDEVICEATTRIBEXTPROC>,
    pub get_platform_display: Option<PFNEGLGETPLATFORMDISPLAYEXTPROC>,
}

impl Egl {
    /// Load the system EGL library
    ///
    /// The path in [`EGLINFO_LIBRARY`](LIBRARY_ENV) is tried first, followed by
    /// each of [`LIBRARY_NAMES`].
    pub fn load() -> Result<Self, libloading::Error> {
        if let Some(path) = env::var_os(LIBRARY_ENV) {
            match Self::open(&path) {
                Ok(egl) => return Ok(egl),
                Err(e) => warn!("{LIBRARY_ENV}={} set but failed to load: {e}", path.to_string_lossy()),
            }
        }

        let mut res = Self::open(LIBRARY_NAMES[0]);
        for name in &LIBRARY_NAMES[1..] {
            match res {
                Ok(egl) => return Ok(egl),
                Err(e) => {
                    debug!("{e}");
                    res = Self::open(name);
                },
            }
        }
        res
    }

    /// Load EGL from a specific library path or soname
    pub fn open<P: AsRef<OsStr>>(path: P) -> Result<Self, libloading::Error> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path) }?;
        debug!("loaded {}", path.to_string_lossy());

        let mut egl = unsafe {
            Self {
                get_display: symbol(&library, b"eglGetDisplay\0")?,
                initialize: symbol(&library, b"eglInitialize\0")?,
                terminate: symbol(&library, b"eglTerminate\0")?,
                query_string: symbol(&library, b"eglQueryString\0")?,
                get_configs: symbol(&library, b"eglGetConfigs\0")?,
                get_config_attrib: symbol(&library, b"eglGetConfigAttrib\0")?,
                get_error: symbol(&library, b"eglGetError\0")?,
                get_proc_address: symbol(&library, b"eglGetProcAddress\0")?,
                device: DeviceExt::default(),
                _library: library,
            }
        };
        egl.device = unsafe {
            DeviceExt {
                query_devices: egl.proc_address(c"eglQueryDevicesEXT"),
                query_device_string: egl.proc_address(c"eglQueryDeviceStringEXT"),
                query_device_attrib: egl.proc_address(c"eglQueryDeviceAttribEXT"),
                get_platform_display: egl.proc_address(c"eglGetPlatformDisplayEXT"),
            }
        };
        Ok(egl)
    }

    /// Resolve an extension entry point
    ///
    /// # Safety
    ///
    /// `T` must be the function pointer type matching the named entry point.
    pub unsafe fn proc_address<T: Copy>(&self, name: &CStr) -> Option<T> {
        debug_assert!(mem::size_of::<T>() == mem::size_of::<*const c_void>());
        let ptr = unsafe { (self.get_proc_address)(name.as_ptr()) };
        match ptr.is_null() {
            true => {
                debug!("{} is unavailable", name.to_string_lossy());
                None
            },
            false => Some(unsafe { mem::transmute_copy::<*const c_void, T>(&ptr) }),
        }
    }

    /// The error code of the most recent EGL call on this thread
    #[doc(alias = "eglGetError")]
    pub fn last_error(&self) -> EGLint {
        unsafe { (self.get_error)() }
    }

    /// Borrow a string returned by EGL
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a NUL-terminated string owned by EGL.
    pub unsafe fn string(ptr: *const c_char) -> Option<String> {
        match ptr.is_null() {
            true => None,
            false => Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()),
        }
    }
}

unsafe fn symbol<T: Copy>(library: &Library, name: &[u8]) -> Result<T, libloading::Error> {
    unsafe { library.get::<T>(name) }.map(|sym| *sym)
}

impl Debug for Egl {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Egl")
            .field("library", &self._library)
            .field("device", &self.device)
            .finish_non_exhaustive()
    }
}

impl Debug for DeviceExt {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("DeviceExt")
            .field("query_devices", &self.query_devices.is_some())
            .field("query_device_string", &self.query_device_string.is_some())
            .field("query_device_attrib", &self.query_device_attrib.is_some())
            .field("get_platform_display", &self.get_platform_display.is_some())
            .finish()
    }
}
