//! Symbol tables naming raw EGL values, and the flag bit spaces they label

use {
    crate::sys::{self, EGLint},
    std::fmt::{self, Debug, Formatter},
};

/// One raw value and its display label
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    /// The raw value reported by EGL
    pub value: EGLint,
    /// Human-readable text printed in its place
    pub label: &'static str,
}

impl SymbolEntry {
    /// Pair a raw value with its label
    pub const fn new(value: EGLint, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// An immutable, ordered table of [symbols](SymbolEntry) for one semantic domain
///
/// Tables are `static` and never mutated; lookups scan in declaration order.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SymbolTable {
    name: &'static str,
    entries: &'static [SymbolEntry],
}

impl SymbolTable {
    /// Construct a named table from its entries
    pub const fn new(name: &'static str, entries: &'static [SymbolEntry]) -> Self {
        Self { name, entries }
    }

    /// The label of the first entry whose value equals `value`
    ///
    /// ```rust
    /// use eglinfo::symbol::CAVEAT;
    ///
    /// assert_eq!(CAVEAT.lookup(0x3050), Some("slow"));
    /// assert_eq!(CAVEAT.lookup(0x1234), None);
    /// ```
    pub fn lookup(&self, value: EGLint) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.label)
    }

    /// All entries, in declaration order
    pub const fn entries(&self) -> &'static [SymbolEntry] {
        self.entries
    }

    /// The name of the table's domain, used for diagnostics
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the table contains no entries
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Debug for SymbolTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("SymbolTable").field(&self.name).finish()
    }
}

macro_rules! symbols {
    ($($(#[$attr:meta])* pub static $name:ident = [$($value:expr => $label:expr,)*];)*) => {
        $(
            $(#[$attr])*
            pub static $name: SymbolTable = SymbolTable::new(stringify!($name), &[
                $(SymbolEntry::new($value, $label),)*
            ]);
        )*
    };
}

macro_rules! error_symbols {
    ($($name:ident,)*) => {
        symbols! {
            /// `eglGetError` codes, labelled by their constant names
            pub static ERROR = [$(sys::$name => stringify!($name),)*];
        }
    };
}

symbols! {
    /// Tri-state booleans such as `EGL_BIND_TO_TEXTURE_RGB`
    pub static BOOLEAN = [
        sys::EGL_TRUE => "true",
        sys::EGL_FALSE => "false",
    ];

    /// `EGL_COLOR_BUFFER_TYPE`
    pub static BUFFER_TYPE = [
        sys::EGL_RGB_BUFFER => "RGB",
        sys::EGL_LUMINANCE_BUFFER => "Luminance",
    ];

    /// `EGL_CONFIG_CAVEAT`
    pub static CAVEAT = [
        sys::EGL_NONE => "none",
        sys::EGL_SLOW_CONFIG => "slow",
        sys::EGL_NON_CONFORMANT_CONFIG => "non-conformant",
    ];

    /// `EGL_TRANSPARENT_TYPE`
    pub static TRANSPARENT_TYPE = [
        sys::EGL_NONE => "none",
        sys::EGL_TRANSPARENT_RGB => "transparent RGB",
    ];

    /// `EGL_COLOR_COMPONENT_TYPE_EXT`, from `EGL_EXT_pixel_format_float`
    pub static COLOR_COMPONENT_TYPE = [
        sys::EGL_COLOR_COMPONENT_TYPE_FIXED_EXT => "fixed",
        sys::EGL_COLOR_COMPONENT_TYPE_FLOAT_EXT => "float",
    ];

    /// [`SurfaceType`] bits
    pub static SURFACE_TYPE = [
        SurfaceType::PBUFFER.bits() as EGLint => "pbuffer",
        SurfaceType::PIXMAP.bits() as EGLint => "pixmap",
        SurfaceType::WINDOW.bits() as EGLint => "window",
        SurfaceType::VG_COLORSPACE_LINEAR.bits() as EGLint => "VG colorspace linear",
        SurfaceType::VG_ALPHA_FORMAT_PRE.bits() as EGLint => "VG alpha format pre",
        SurfaceType::LOCK_SURFACE.bits() as EGLint => "lock surface",
        SurfaceType::OPTIMAL_FORMAT.bits() as EGLint => "optimal format",
        SurfaceType::MULTISAMPLE_RESOLVE_BOX.bits() as EGLint => "multisample resolve box",
        SurfaceType::SWAP_BEHAVIOR_PRESERVED.bits() as EGLint => "swap behavior preserved",
        SurfaceType::STREAM.bits() as EGLint => "stream",
        SurfaceType::MUTABLE_RENDER_BUFFER.bits() as EGLint => "mutable render buffer",
    ];

    /// [`RenderableType`] bits, shared by `EGL_RENDERABLE_TYPE` and `EGL_CONFORMANT`
    pub static RENDERABLE_TYPE = [
        RenderableType::OPENGL_ES.bits() as EGLint => "OpenGL ES",
        RenderableType::OPENVG.bits() as EGLint => "OpenVG",
        RenderableType::OPENGL_ES2.bits() as EGLint => "OpenGL ES 2",
        RenderableType::OPENGL.bits() as EGLint => "OpenGL",
        RenderableType::OPENGL_ES3.bits() as EGLint => "OpenGL ES 3",
    ];
}

error_symbols! {
    EGL_SUCCESS,
    EGL_NOT_INITIALIZED,
    EGL_BAD_ACCESS,
    EGL_BAD_ALLOC,
    EGL_BAD_ATTRIBUTE,
    EGL_BAD_CONFIG,
    EGL_BAD_CONTEXT,
    EGL_BAD_CURRENT_SURFACE,
    EGL_BAD_DISPLAY,
    EGL_BAD_MATCH,
    EGL_BAD_NATIVE_PIXMAP,
    EGL_BAD_NATIVE_WINDOW,
    EGL_BAD_PARAMETER,
    EGL_BAD_SURFACE,
    EGL_CONTEXT_LOST,
    EGL_BAD_DEVICE_EXT,
}

bitflags::bitflags! {
    /// The bit space of `EGL_SURFACE_TYPE`
    #[derive(Default)]
    pub struct SurfaceType: u32 {
        /// See also: [`sys::EGL_PBUFFER_BIT`]
        #[doc(alias = "EGL_PBUFFER_BIT")]
        const PBUFFER = sys::EGL_PBUFFER_BIT as u32;
        /// See also: [`sys::EGL_PIXMAP_BIT`]
        #[doc(alias = "EGL_PIXMAP_BIT")]
        const PIXMAP = sys::EGL_PIXMAP_BIT as u32;
        /// See also: [`sys::EGL_WINDOW_BIT`]
        #[doc(alias = "EGL_WINDOW_BIT")]
        const WINDOW = sys::EGL_WINDOW_BIT as u32;
        /// OpenVG rendering uses a linear colorspace
        #[doc(alias = "EGL_VG_COLORSPACE_LINEAR_BIT")]
        const VG_COLORSPACE_LINEAR = sys::EGL_VG_COLORSPACE_LINEAR_BIT as u32;
        /// OpenVG rendering uses premultiplied alpha
        #[doc(alias = "EGL_VG_ALPHA_FORMAT_PRE_BIT")]
        const VG_ALPHA_FORMAT_PRE = sys::EGL_VG_ALPHA_FORMAT_PRE_BIT as u32;
        /// `EGL_KHR_lock_surface`
        #[doc(alias = "EGL_LOCK_SURFACE_BIT_KHR")]
        const LOCK_SURFACE = sys::EGL_LOCK_SURFACE_BIT_KHR as u32;
        /// `EGL_KHR_lock_surface`
        #[doc(alias = "EGL_OPTIMAL_FORMAT_BIT_KHR")]
        const OPTIMAL_FORMAT = sys::EGL_OPTIMAL_FORMAT_BIT_KHR as u32;
        /// Box-filtered multisample resolve is supported
        #[doc(alias = "EGL_MULTISAMPLE_RESOLVE_BOX_BIT")]
        const MULTISAMPLE_RESOLVE_BOX = sys::EGL_MULTISAMPLE_RESOLVE_BOX_BIT as u32;
        /// `EGL_BUFFER_PRESERVED` swap behavior is supported
        #[doc(alias = "EGL_SWAP_BEHAVIOR_PRESERVED_BIT")]
        const SWAP_BEHAVIOR_PRESERVED = sys::EGL_SWAP_BEHAVIOR_PRESERVED_BIT as u32;
        /// `EGL_KHR_stream_producer_eglsurface`
        #[doc(alias = "EGL_STREAM_BIT_KHR")]
        const STREAM = sys::EGL_STREAM_BIT_KHR as u32;
        /// `EGL_KHR_mutable_render_buffer`
        #[doc(alias = "EGL_MUTABLE_RENDER_BUFFER_BIT_KHR")]
        const MUTABLE_RENDER_BUFFER = sys::EGL_MUTABLE_RENDER_BUFFER_BIT_KHR as u32;
    }
}

bitflags::bitflags! {
    /// The bit space of `EGL_RENDERABLE_TYPE` and `EGL_CONFORMANT`
    ///
    /// This is unrelated to [`SurfaceType`], even where bit values coincide.
    #[derive(Default)]
    pub struct RenderableType: u32 {
        /// OpenGL ES 1.x
        #[doc(alias = "EGL_OPENGL_ES_BIT")]
        const OPENGL_ES = sys::EGL_OPENGL_ES_BIT as u32;
        /// OpenVG
        #[doc(alias = "EGL_OPENVG_BIT")]
        const OPENVG = sys::EGL_OPENVG_BIT as u32;
        /// OpenGL ES 2.x
        #[doc(alias = "EGL_OPENGL_ES2_BIT")]
        const OPENGL_ES2 = sys::EGL_OPENGL_ES2_BIT as u32;
        /// Desktop OpenGL
        #[doc(alias = "EGL_OPENGL_BIT")]
        const OPENGL = sys::EGL_OPENGL_BIT as u32;
        /// OpenGL ES 3.x, also known as `EGL_OPENGL_ES3_BIT_KHR`
        #[doc(alias = "EGL_OPENGL_ES3_BIT")]
        #[doc(alias = "EGL_OPENGL_ES3_BIT_KHR")]
        const OPENGL_ES3 = sys::EGL_OPENGL_ES3_BIT as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_first_match() {
        static DUPES: SymbolTable = SymbolTable::new("DUPES", &[
            SymbolEntry::new(1, "first"),
            SymbolEntry::new(1, "second"),
        ]);
        assert_eq!(DUPES.lookup(1), Some("first"));
        assert_eq!(DUPES.lookup(2), None);
    }

    #[test]
    fn boolean() {
        assert_eq!(BOOLEAN.lookup(sys::EGL_TRUE), Some("true"));
        assert_eq!(BOOLEAN.lookup(sys::EGL_FALSE), Some("false"));
        assert_eq!(BOOLEAN.lookup(2), None);
    }

    #[test]
    fn flag_tables_are_single_bits() {
        for table in [&SURFACE_TYPE, &RENDERABLE_TYPE] {
            for entry in table.entries() {
                assert_eq!(entry.value.count_ones(), 1, "{:?} {}", table, entry.label);
            }
        }
    }

    #[test]
    fn flag_tables_match_bitflags() {
        let surface = SURFACE_TYPE.entries().iter().fold(0, |bits, e| bits | e.value);
        assert_eq!(surface as u32, SurfaceType::all().bits());
        let renderable = RENDERABLE_TYPE.entries().iter().fold(0, |bits, e| bits | e.value);
        assert_eq!(renderable as u32, RenderableType::all().bits());
    }

    #[test]
    fn error_labels() {
        assert_eq!(ERROR.lookup(sys::EGL_NOT_INITIALIZED), Some("EGL_NOT_INITIALIZED"));
        assert_eq!(ERROR.lookup(sys::EGL_BAD_DEVICE_EXT), Some("EGL_BAD_DEVICE_EXT"));
        assert_eq!(ERROR.name(), "ERROR");
    }
}
