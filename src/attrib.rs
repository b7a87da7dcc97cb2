//! The config attribute registry, and how each attribute is decoded

use {
    crate::{
        symbol::{self, SymbolTable},
        sys::{self, EGLint},
    },
    std::fmt::{self, Debug, Formatter},
};

/// How a raw attribute value is turned into text
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecodingRule {
    /// A magnitude or count, printed in decimal
    Integer,
    /// One symbol from a closed set, printed by name or in hex if unknown
    Enum,
    /// A bitmask, printed as a list of the set bits' names
    Flags,
}

/// A [`DecodingRule`] together with the symbols it decodes against
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decoding {
    /// See [`DecodingRule::Integer`]
    Integer,
    /// See [`DecodingRule::Enum`]
    Enum(&'static SymbolTable),
    /// See [`DecodingRule::Flags`]
    Flags(&'static SymbolTable),
}

impl Decoding {
    /// The decoding rule, without its symbols
    pub const fn rule(&self) -> DecodingRule {
        match self {
            Self::Integer => DecodingRule::Integer,
            Self::Enum(..) => DecodingRule::Enum,
            Self::Flags(..) => DecodingRule::Flags,
        }
    }

    /// The symbol table for [`Enum`](Self::Enum) and [`Flags`](Self::Flags)
    pub const fn symbols(&self) -> Option<&'static SymbolTable> {
        match *self {
            Self::Integer => None,
            Self::Enum(table) | Self::Flags(table) => Some(table),
        }
    }
}

/// Describes one `eglGetConfigAttrib` capability and how to display it
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// The EGL attribute name passed to `eglGetConfigAttrib`
    pub id: EGLint,
    /// Display label, which is the attribute's constant name
    pub label: &'static str,
    /// How values of this attribute are decoded
    pub decoding: Decoding,
    /// The display extension that must be advertised for this attribute to exist
    pub extension: Option<&'static str>,
}

impl Attribute {
    /// See [`Decoding::rule`]
    pub const fn rule(&self) -> DecodingRule {
        self.decoding.rule()
    }

    /// See [`Decoding::symbols`]
    pub const fn symbols(&self) -> Option<&'static SymbolTable> {
        self.decoding.symbols()
    }

    /// Whether this attribute can be queried on a display advertising `extensions`
    ///
    /// Core attributes always apply. Extension attributes apply when their extension
    /// name is a substring of `extensions`.
    pub fn is_supported(&self, extensions: &str) -> bool {
        match self.extension {
            None => true,
            Some(ext) => extensions.contains(ext),
        }
    }

    /// Look up a registered attribute by its EGL name
    pub fn find(id: EGLint) -> Option<&'static Self> {
        ATTRIBUTES.iter().find(|attr| attr.id == id)
    }
}

impl Debug for Attribute {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut f = f.debug_struct("Attribute");
        f.field("id", &format_args!("{:#06x}", self.id))
            .field("label", &self.label)
            .field("decoding", &self.decoding);
        if let Some(ext) = self.extension {
            f.field("extension", &ext);
        }
        f.finish()
    }
}

/// All registered config attributes that apply to a display advertising `extensions`,
/// in print order
pub fn applicable_attributes<'e>(extensions: &'e str) -> impl Iterator<Item = &'static Attribute> + 'e {
    ATTRIBUTES.iter().filter(move |attr| attr.is_supported(extensions))
}

macro_rules! attributes {
    (@decoding) => {
        Decoding::Integer
    };
    (@decoding Enum($table:ident)) => {
        Decoding::Enum(&symbol::$table)
    };
    (@decoding Flags($table:ident)) => {
        Decoding::Flags(&symbol::$table)
    };
    (@extension) => {
        None
    };
    (@extension $ext:literal) => {
        Some($ext)
    };
    ($(#[$attr:meta])* pub static $registry:ident = [$($name:ident $(= $rule:ident($table:ident))? $(if $ext:literal)?,)*];) => {
        $(#[$attr])*
        pub static $registry: &[Attribute] = &[
            $(
                Attribute {
                    id: sys::$name,
                    label: stringify!($name),
                    decoding: attributes!(@decoding $($rule($table))?),
                    extension: attributes!(@extension $($ext)?),
                },
            )*
        ];
    };
}

attributes! {
    /// Every config attribute `eglinfo` knows about, in print order
    ///
    /// ```rust
    /// use eglinfo::{attrib::ATTRIBUTES, DecodingRule};
    ///
    /// let caveat = ATTRIBUTES.iter().find(|a| a.label == "EGL_CONFIG_CAVEAT").unwrap();
    /// assert_eq!(caveat.rule(), DecodingRule::Enum);
    /// ```
    pub static ATTRIBUTES = [
        EGL_ALPHA_SIZE,
        EGL_ALPHA_MASK_SIZE,
        EGL_BIND_TO_TEXTURE_RGB = Enum(BOOLEAN),
        EGL_BIND_TO_TEXTURE_RGBA = Enum(BOOLEAN),
        EGL_BLUE_SIZE,
        EGL_BUFFER_SIZE,
        EGL_COLOR_BUFFER_TYPE = Enum(BUFFER_TYPE),
        EGL_CONFIG_CAVEAT = Enum(CAVEAT),
        EGL_CONFIG_ID,
        EGL_CONFORMANT = Flags(RENDERABLE_TYPE),
        EGL_DEPTH_SIZE,
        EGL_GREEN_SIZE,
        EGL_LEVEL,
        EGL_LUMINANCE_SIZE,
        EGL_MAX_PBUFFER_WIDTH,
        EGL_MAX_PBUFFER_HEIGHT,
        EGL_MAX_PBUFFER_PIXELS,
        EGL_MAX_SWAP_INTERVAL,
        EGL_MIN_SWAP_INTERVAL,
        EGL_NATIVE_RENDERABLE = Enum(BOOLEAN),
        EGL_NATIVE_VISUAL_ID,
        EGL_NATIVE_VISUAL_TYPE,
        EGL_RED_SIZE,
        EGL_RENDERABLE_TYPE = Flags(RENDERABLE_TYPE),
        EGL_SAMPLE_BUFFERS,
        EGL_SAMPLES,
        EGL_STENCIL_SIZE,
        EGL_SURFACE_TYPE = Flags(SURFACE_TYPE),
        EGL_TRANSPARENT_TYPE = Enum(TRANSPARENT_TYPE),
        EGL_TRANSPARENT_RED_VALUE,
        EGL_TRANSPARENT_GREEN_VALUE,
        EGL_TRANSPARENT_BLUE_VALUE,
        EGL_COLOR_COMPONENT_TYPE_EXT = Enum(COLOR_COMPONENT_TYPE) if "EGL_EXT_pixel_format_float",
        EGL_RECORDABLE_ANDROID = Enum(BOOLEAN) if "EGL_ANDROID_recordable",
    ];
}
