//! Human-readable report output
//!
//! Every writer takes an `indent` prefix for its header lines; the lines beneath a
//! header are indented by two further spaces.

use {
    crate::{
        attrib::applicable_attributes,
        device::{applicable_properties, Device, PropertyKind, ENUMERATION_EXTENSION, PLATFORM_EXTENSION},
        display::{client_extensions, Config, Display},
        error::{Error, Result},
        render::render,
        sys::{self, EGLAttrib, EGLint, Egl},
    },
    log::warn,
    std::io::{self, Write},
};

/// Write one `Configuration N:` section
///
/// `query` is called once per [applicable attribute](applicable_attributes) with the
/// attribute's EGL name, and returns `None` if that query failed.
pub fn write_config<W, Q>(w: &mut W, indent: &str, index: usize, extensions: &str, mut query: Q) -> io::Result<()>
where
    W: Write + ?Sized,
    Q: FnMut(EGLint) -> Option<EGLint>,
{
    writeln!(w, "{indent}Configuration {index}:")?;
    for attr in applicable_attributes(extensions) {
        let (value, succeeded) = match query(attr.id) {
            Some(value) => (value, true),
            None => (0, false),
        };
        writeln!(w, "{indent}  {}: {}", attr.label, render(attr, value, succeeded))?;
    }
    writeln!(w)
}

/// Write the device properties supported by a device advertising `extensions`
///
/// String properties that fail to query are written as `<failed>`, while failed
/// attribute properties are left out.
pub fn write_device_properties<W, S, A>(
    w: &mut W,
    indent: &str,
    extensions: &str,
    mut query_string: S,
    mut query_attrib: A,
) -> io::Result<()>
where
    W: Write + ?Sized,
    S: FnMut(EGLint) -> Option<String>,
    A: FnMut(EGLint) -> Option<EGLAttrib>,
{
    for prop in applicable_properties(extensions) {
        match prop.kind {
            PropertyKind::String => match query_string(prop.id) {
                Some(value) => writeln!(w, "{indent}  {}: {value}", prop.label)?,
                None => writeln!(w, "{indent}  {}: <failed>", prop.label)?,
            },
            PropertyKind::Attrib => match query_attrib(prop.id) {
                Some(value) => writeln!(w, "{indent}  {}: {value}", prop.label)?,
                None => (),
            },
        }
    }
    Ok(())
}

/// A display whose strings and configurations can be reported
///
/// Implemented by [`Display`]; [`write_display`] and [`write_report`] only go through
/// this interface.
pub trait DisplayQuery {
    /// An opaque handle to one of the display's configurations
    type Config: Copy;

    /// Initialize the display, returning the EGL `(major, minor)` version
    fn initialize(&mut self) -> Result<(EGLint, EGLint)>;

    /// Query one of the display's strings, or `None` if the query fails
    fn query_string(&self, name: EGLint) -> Option<String>;

    /// The display's extension string, or an empty string
    fn extensions(&self) -> String {
        self.query_string(sys::EGL_EXTENSIONS).unwrap_or_default()
    }

    /// Every configuration the display supports
    fn configs(&self) -> Result<Vec<Self::Config>>;

    /// Query one attribute of `config`, or `None` if the query fails
    fn config_attrib(&self, config: Self::Config, attribute: EGLint) -> Option<EGLint>;
}

/// A device whose properties and platform display can be reported
pub trait DeviceQuery {
    /// The display type returned by [`platform_display`](Self::platform_display)
    type Display: DisplayQuery;

    /// Query a device string, or `None` if the query fails
    fn query_string(&self, name: EGLint) -> Option<String>;

    /// Query a device attribute, or `None` if the query fails
    fn query_attrib(&self, attribute: EGLint) -> Option<EGLAttrib>;

    /// The device's extension string, or an empty string
    fn extensions(&self) -> String {
        self.query_string(sys::EGL_EXTENSIONS).unwrap_or_default()
    }

    /// Obtain the uninitialized display that renders to this device
    fn platform_display(&self) -> Result<Self::Display>;
}

/// Everything [`write_report`] needs from an EGL implementation
pub trait ReportSource {
    /// The default display type
    type Display: DisplayQuery;
    /// The device type
    type Device: DeviceQuery;

    /// Obtain the platform's default display
    fn default_display(&self) -> Result<Self::Display>;

    /// The client extension string, if supported
    fn client_extensions(&self) -> Option<String>;

    /// Enumerate every device
    fn devices(&self) -> Result<Vec<Self::Device>>;
}

impl<'e> DisplayQuery for Display<'e> {
    type Config = Config;

    fn initialize(&mut self) -> Result<(EGLint, EGLint)> {
        Display::initialize(self)
    }

    fn query_string(&self, name: EGLint) -> Option<String> {
        Display::query_string(self, name)
    }

    fn configs(&self) -> Result<Vec<Config>> {
        Display::configs(self)
    }

    fn config_attrib(&self, config: Config, attribute: EGLint) -> Option<EGLint> {
        Display::config_attrib(self, config, attribute)
    }
}

impl<'e> DeviceQuery for Device<'e> {
    type Display = Display<'e>;

    fn query_string(&self, name: EGLint) -> Option<String> {
        Device::query_string(self, name)
    }

    fn query_attrib(&self, attribute: EGLint) -> Option<EGLAttrib> {
        Device::query_attrib(self, attribute)
    }

    fn platform_display(&self) -> Result<Display<'e>> {
        Device::platform_display(self)
    }
}

impl<'e> ReportSource for &'e Egl {
    type Display = Display<'e>;
    type Device = Device<'e>;

    fn default_display(&self) -> Result<Display<'e>> {
        Display::open_default(*self)
    }

    fn client_extensions(&self) -> Option<String> {
        client_extensions(*self)
    }

    fn devices(&self) -> Result<Vec<Device<'e>>> {
        Device::enumerate(*self)
    }
}

/// Write an initialized display's strings followed by all of its configurations
pub fn write_display<W, D>(w: &mut W, indent: &str, display: &D, (major, minor): (EGLint, EGLint)) -> Result<()>
where
    W: Write + ?Sized,
    D: DisplayQuery + ?Sized,
{
    let string = |name| display.query_string(name).unwrap_or_else(|| "<failed>".into());
    writeln!(w, "{indent}EGL version: {major}.{minor}")?;
    writeln!(w, "{indent}EGL vendor: {}", string(sys::EGL_VENDOR))?;
    writeln!(w, "{indent}EGL client APIs: {}", string(sys::EGL_CLIENT_APIS))?;
    let extensions = display.extensions();
    writeln!(w, "{indent}EGL extensions: {extensions}")?;

    let configs = display.configs()?;
    writeln!(w, "{indent}Found {} configurations.", configs.len())?;
    writeln!(w)?;
    for (index, &config) in configs.iter().enumerate() {
        write_config(w, indent, index, &extensions, |id| display.config_attrib(config, id))?;
    }
    Ok(())
}

/// Write one `Device N:` section, including the device's own display if available
///
/// `client_extensions` decides whether a platform display is requested for the device.
/// A device display that cannot be opened, initialized, or enumerated is written as
/// `<failed>` rather than ending the report.
pub fn write_device<W, D>(w: &mut W, indent: &str, index: usize, device: &D, client_extensions: &str) -> Result<()>
where
    W: Write + ?Sized,
    D: DeviceQuery + ?Sized,
{
    writeln!(w, "{indent}Device {index}:")?;
    let extensions = device.extensions();
    writeln!(w, "{indent}  EGL_EXTENSIONS: {extensions}")?;
    write_device_properties(
        w,
        indent,
        &extensions,
        |id| device.query_string(id),
        |id| device.query_attrib(id),
    )?;

    if client_extensions.contains(PLATFORM_EXTENSION) {
        writeln!(w, "{indent}  Display:")?;
        let nested = format!("{indent}    ");
        let res = device.platform_display().and_then(|mut display| {
            let version = display.initialize()?;
            write_display(w, &nested, &display, version)
        });
        match res {
            Ok(()) => (),
            Err(Error::Io(e)) => return Err(e.into()),
            Err(e) => {
                warn!("device {index}: {e}");
                writeln!(w, "{nested}<failed>")?;
                writeln!(w)?;
            },
        }
    } else {
        writeln!(w)?;
    }
    Ok(())
}

/// Write the complete report: the default display, then every device
///
/// Failing to obtain or initialize the default display, or to retrieve its
/// configurations, is an error. Device enumeration failures are only logged.
pub fn write_report<W, S>(w: &mut W, source: S) -> Result<()>
where
    W: Write + ?Sized,
    S: ReportSource,
{
    let mut display = source.default_display()?;
    let version = display.initialize()?;
    write_display(w, "", &display, version)?;
    drop(display);

    let client_extensions = match source.client_extensions() {
        Some(extensions) => {
            writeln!(w, "EGL client extensions: {extensions}")?;
            writeln!(w)?;
            extensions
        },
        None => return Ok(()),
    };

    if client_extensions.contains(ENUMERATION_EXTENSION) {
        match source.devices() {
            Ok(devices) => {
                for (index, device) in devices.iter().enumerate() {
                    write_device(w, "", index, device, &client_extensions)?;
                }
            },
            Err(e) => warn!("{e}"),
        }
    }
    Ok(())
}
