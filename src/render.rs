//! Turning raw attribute values into text

use {
    crate::{
        attrib::{Attribute, Decoding},
        symbol::SymbolTable,
        sys::EGLint,
    },
    std::fmt::{self, Display, Formatter},
};

/// The text form of one attribute value
///
/// Produced by [`Attribute::decode`], and formatted through [`Display`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecodedValue<'a> {
    /// The query for this value failed, displayed as `<failed>`
    Failed,
    /// A plain decimal number
    Integer(EGLint),
    /// A value with no matching symbol, displayed as lowercase hex with a `0x` prefix
    Hex(EGLint),
    /// The label of a matching symbol
    Symbol(&'a str),
    /// The labels of every set flag
    Flags {
        /// Labels of matching symbols, in table order
        labels: Vec<&'a str>,
        /// Set bits that matched no symbol
        unhandled: EGLint,
    },
}

impl Display for DecodedValue<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Failed => f.write_str("<failed>"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Hex(value) => write!(f, "0x{value:x}"),
            Self::Symbol(label) => f.write_str(label),
            Self::Flags { labels, unhandled } => {
                for (i, label) in labels.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(label)?;
                }
                if *unhandled != 0 {
                    if !labels.is_empty() {
                        f.write_str(", ")?;
                    }
                    write!(f, "unhandled flags 0x{unhandled:x}")?;
                }
                Ok(())
            },
        }
    }
}

/// Decode `value` as one symbol of `table`, falling back to hex
pub fn decode_enum(table: &SymbolTable, value: EGLint) -> DecodedValue<'static> {
    match table.lookup(value) {
        Some(label) => DecodedValue::Symbol(label),
        None => DecodedValue::Hex(value),
    }
}

/// Decode `value` as a bitmask of `table`'s entries
///
/// An entry matches when all of its bits are set in `value`. Any remaining set bits
/// are reported as `unhandled`.
pub fn decode_flags(table: &SymbolTable, value: EGLint) -> DecodedValue<'static> {
    let mut handled = 0;
    let mut labels = Vec::new();
    for entry in table.entries() {
        if entry.value != 0 && value & entry.value == entry.value {
            labels.push(entry.label);
            handled |= entry.value;
        }
    }

    DecodedValue::Flags {
        labels,
        unhandled: value & !handled,
    }
}

impl Attribute {
    /// Decode a successfully queried `value` according to this attribute's rule
    ///
    /// ```rust
    /// use eglinfo::{attrib::Attribute, sys};
    ///
    /// let surface = Attribute::find(sys::EGL_SURFACE_TYPE).unwrap();
    /// assert_eq!(surface.decode(0x5).to_string(), "pbuffer, window");
    /// ```
    pub fn decode(&self, value: EGLint) -> DecodedValue<'static> {
        match self.decoding {
            Decoding::Integer => DecodedValue::Integer(value),
            Decoding::Enum(table) => decode_enum(table, value),
            Decoding::Flags(table) => decode_flags(table, value),
        }
    }
}

/// Render one queried attribute value as it appears in a report
///
/// If the query did not succeed, `value` is ignored and the result is `<failed>`.
pub fn render(attribute: &Attribute, value: EGLint, succeeded: bool) -> String {
    match succeeded {
        true => attribute.decode(value).to_string(),
        false => DecodedValue::Failed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            symbol::{SymbolEntry, BOOLEAN, CAVEAT, RENDERABLE_TYPE},
            sys,
        },
    };

    static AB: SymbolTable = SymbolTable::new("AB", &[SymbolEntry::new(0x1, "A"), SymbolEntry::new(0x2, "B")]);
    static EMPTY: SymbolTable = SymbolTable::new("EMPTY", &[]);

    const fn attribute(decoding: Decoding) -> Attribute {
        Attribute {
            id: 0x3000,
            label: "TEST",
            decoding,
            extension: None,
        }
    }

    #[test]
    fn integer() {
        let attr = attribute(Decoding::Integer);
        assert_eq!(render(&attr, 8, true), "8");
        assert_eq!(render(&attr, -1, true), "-1");
        assert_eq!(render(&attr, 0, true), "0");
    }

    #[test]
    fn enum_hit() {
        let attr = attribute(Decoding::Enum(&CAVEAT));
        for entry in CAVEAT.entries() {
            assert_eq!(render(&attr, entry.value, true), entry.label);
        }
        assert_eq!(render(&attribute(Decoding::Enum(&BOOLEAN)), sys::EGL_TRUE, true), "true");
    }

    #[test]
    fn enum_miss() {
        assert_eq!(render(&attribute(Decoding::Enum(&EMPTY)), 12, true), "0xc");
        assert_eq!(render(&attribute(Decoding::Enum(&CAVEAT)), 0x3052, true), "0x3052");
        assert_eq!(render(&attribute(Decoding::Enum(&BOOLEAN)), 0xABC, true), "0xabc");
    }

    #[test]
    fn flags_full() {
        assert_eq!(render(&attribute(Decoding::Flags(&AB)), 0x3, true), "A, B");
        assert_eq!(render(&attribute(Decoding::Flags(&AB)), 0x2, true), "B");
    }

    #[test]
    fn flags_unhandled() {
        let attr = attribute(Decoding::Flags(&AB));
        assert_eq!(render(&attr, 0x7, true), "A, B, unhandled flags 0x4");
        assert_eq!(render(&attr, 0x30, true), "unhandled flags 0x30");
        assert_eq!(render(&attr, 0x11, true), "A, unhandled flags 0x10");
    }

    #[test]
    fn flags_zero() {
        assert_eq!(render(&attribute(Decoding::Flags(&AB)), 0, true), "");
        assert_eq!(decode_flags(&AB, 0), DecodedValue::Flags {
            labels: Vec::new(),
            unhandled: 0,
        });
    }

    #[test]
    fn renderable() {
        let value = sys::EGL_OPENGL_ES2_BIT | sys::EGL_OPENGL_BIT | sys::EGL_OPENGL_ES3_BIT;
        assert_eq!(decode_flags(&RENDERABLE_TYPE, value).to_string(), "OpenGL ES 2, OpenGL, OpenGL ES 3");
    }

    #[test]
    fn failed() {
        for decoding in [Decoding::Integer, Decoding::Enum(&CAVEAT), Decoding::Flags(&AB)] {
            let attr = attribute(decoding);
            for value in [0, 1, 7, 0x3050, -1] {
                assert_eq!(render(&attr, value, false), "<failed>");
            }
        }
    }

    #[test]
    fn pure() {
        let attr = attribute(Decoding::Flags(&AB));
        let first = render(&attr, 0x7, true);
        render(&attribute(Decoding::Enum(&CAVEAT)), 0x3050, true);
        render(&attr, 0x1, false);
        assert_eq!(render(&attr, 0x7, true), first);
    }
}
