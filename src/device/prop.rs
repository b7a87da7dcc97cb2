use crate::sys::{self, EGLint};

/// How a [device property](DeviceProperty) is queried
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyKind {
    /// Queried with `eglQueryDeviceStringEXT`
    ///
    /// A failed query is reported as `<failed>`.
    String,
    /// Queried with `eglQueryDeviceAttribEXT`
    ///
    /// A failed query is omitted from the report.
    Attrib,
}

/// A device-level property, only queried if its extension is advertised
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceProperty {
    /// The EGL name passed to the query
    pub id: EGLint,
    /// Display label, which is the property's constant name
    pub label: &'static str,
    /// The device extension that must be advertised for this property to exist
    pub extension: &'static str,
    /// Which query function retrieves the value
    pub kind: PropertyKind,
}

impl DeviceProperty {
    /// Whether a device advertising `extensions` supports this property
    pub fn is_supported(&self, extensions: &str) -> bool {
        extensions.contains(self.extension)
    }
}

macro_rules! device_properties {
    ($(#[$attr:meta])* pub static $registry:ident = [$($name:ident: $kind:ident if $ext:literal,)*];) => {
        $(#[$attr])*
        pub static $registry: &[DeviceProperty] = &[
            $(
                DeviceProperty {
                    id: sys::$name,
                    label: stringify!($name),
                    extension: $ext,
                    kind: PropertyKind::$kind,
                },
            )*
        ];
    };
}

device_properties! {
    /// Every device property `eglinfo` knows about, in print order
    pub static DEVICE_PROPERTIES = [
        EGL_DRM_DEVICE_FILE_EXT: String if "EGL_EXT_device_drm",
        EGL_DRM_RENDER_NODE_FILE_EXT: String if "EGL_EXT_device_drm_render_node",
        EGL_RENDERER_EXT: String if "EGL_EXT_device_query_name",
        EGL_VENDOR: String if "EGL_EXT_device_query_name",
        EGL_CUDA_DEVICE_NV: Attrib if "EGL_NV_device_cuda",
    ];
}

/// The registered properties a device advertising `extensions` supports, in print order
///
/// ```rust
/// use eglinfo::device::applicable_properties;
///
/// let labels: Vec<_> = applicable_properties("EGL_NV_device_cuda").map(|p| p.label).collect();
/// assert_eq!(labels, ["EGL_CUDA_DEVICE_NV"]);
/// ```
pub fn applicable_properties<'e>(extensions: &'e str) -> impl Iterator<Item = &'static DeviceProperty> + 'e {
    DEVICE_PROPERTIES.iter().filter(move |prop| prop.is_supported(extensions))
}
