use eglinfo::{
    report::{write_config, write_device_properties},
    sys::{self, EGLint},
};

/// A config as EGL would report it, keyed by attribute name
fn rgba8888(id: EGLint) -> Option<EGLint> {
    Some(match id {
        sys::EGL_RED_SIZE | sys::EGL_GREEN_SIZE | sys::EGL_BLUE_SIZE | sys::EGL_ALPHA_SIZE => 8,
        sys::EGL_BUFFER_SIZE => 32,
        sys::EGL_DEPTH_SIZE => 24,
        sys::EGL_STENCIL_SIZE => 8,
        sys::EGL_CONFIG_ID => 12,
        sys::EGL_CONFIG_CAVEAT => sys::EGL_NONE,
        sys::EGL_COLOR_BUFFER_TYPE => sys::EGL_RGB_BUFFER,
        sys::EGL_TRANSPARENT_TYPE => sys::EGL_NONE,
        sys::EGL_BIND_TO_TEXTURE_RGB => sys::EGL_FALSE,
        sys::EGL_BIND_TO_TEXTURE_RGBA => sys::EGL_TRUE,
        sys::EGL_NATIVE_RENDERABLE => sys::EGL_TRUE,
        sys::EGL_NATIVE_VISUAL_ID => 0x21,
        sys::EGL_MAX_SWAP_INTERVAL => 1,
        sys::EGL_SURFACE_TYPE => sys::EGL_WINDOW_BIT | sys::EGL_PBUFFER_BIT | 0x8000,
        sys::EGL_RENDERABLE_TYPE | sys::EGL_CONFORMANT =>
            sys::EGL_OPENGL_ES2_BIT | sys::EGL_OPENGL_BIT | sys::EGL_OPENGL_ES3_BIT,
        sys::EGL_NATIVE_VISUAL_TYPE => return None,
        _ => 0,
    })
}

const RGBA8888: &str = "\
Configuration 0:
  EGL_ALPHA_SIZE: 8
  EGL_ALPHA_MASK_SIZE: 0
  EGL_BIND_TO_TEXTURE_RGB: false
  EGL_BIND_TO_TEXTURE_RGBA: true
  EGL_BLUE_SIZE: 8
  EGL_BUFFER_SIZE: 32
  EGL_COLOR_BUFFER_TYPE: RGB
  EGL_CONFIG_CAVEAT: none
  EGL_CONFIG_ID: 12
  EGL_CONFORMANT: OpenGL ES 2, OpenGL, OpenGL ES 3
  EGL_DEPTH_SIZE: 24
  EGL_GREEN_SIZE: 8
  EGL_LEVEL: 0
  EGL_LUMINANCE_SIZE: 0
  EGL_MAX_PBUFFER_WIDTH: 0
  EGL_MAX_PBUFFER_HEIGHT: 0
  EGL_MAX_PBUFFER_PIXELS: 0
  EGL_MAX_SWAP_INTERVAL: 1
  EGL_MIN_SWAP_INTERVAL: 0
  EGL_NATIVE_RENDERABLE: true
  EGL_NATIVE_VISUAL_ID: 33
  EGL_NATIVE_VISUAL_TYPE: <failed>
  EGL_RED_SIZE: 8
  EGL_RENDERABLE_TYPE: OpenGL ES 2, OpenGL, OpenGL ES 3
  EGL_SAMPLE_BUFFERS: 0
  EGL_SAMPLES: 0
  EGL_STENCIL_SIZE: 8
  EGL_SURFACE_TYPE: pbuffer, window, unhandled flags 0x8000
  EGL_TRANSPARENT_TYPE: none
  EGL_TRANSPARENT_RED_VALUE: 0
  EGL_TRANSPARENT_GREEN_VALUE: 0
  EGL_TRANSPARENT_BLUE_VALUE: 0

";

#[test]
fn config_section() {
    let mut out = Vec::new();
    write_config(&mut out, "", 0, "EGL_KHR_image_base", rgba8888).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), RGBA8888);
}

#[test]
fn consecutive_configs() {
    let mut out = Vec::new();
    write_config(&mut out, "", 0, "", rgba8888).unwrap();
    write_config(&mut out, "", 1, "", rgba8888).unwrap();
    let out = String::from_utf8(out).unwrap();
    let second = out.find("Configuration 1:\n").unwrap();
    assert!(out[..second].ends_with("\n\n"));
    assert_eq!(out.matches("EGL_CONFIG_ID: 12\n").count(), 2);
}

#[test]
fn extension_attributes() {
    let mut out = Vec::new();
    write_config(&mut out, "", 0, "EGL_EXT_pixel_format_float EGL_ANDROID_recordable", |id| match id {
        sys::EGL_COLOR_COMPONENT_TYPE_EXT => Some(sys::EGL_COLOR_COMPONENT_TYPE_FLOAT_EXT),
        sys::EGL_RECORDABLE_ANDROID => Some(0x7),
        other => rgba8888(other),
    })
    .unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with(
        "  EGL_TRANSPARENT_BLUE_VALUE: 0\n  EGL_COLOR_COMPONENT_TYPE_EXT: float\n  EGL_RECORDABLE_ANDROID: 0x7\n\n"
    ));
}

#[test]
fn nested_device_properties() {
    let mut out = Vec::new();
    write_device_properties(
        &mut out,
        "    ",
        "EGL_EXT_device_drm EGL_EXT_device_drm_render_node EGL_EXT_device_query_name",
        |id| match id {
            sys::EGL_DRM_DEVICE_FILE_EXT => Some("/dev/dri/card1".to_owned()),
            sys::EGL_DRM_RENDER_NODE_FILE_EXT => Some("/dev/dri/renderD128".to_owned()),
            sys::EGL_VENDOR => Some("Mesa".to_owned()),
            _ => None,
        },
        |_| panic!("no attribute properties are supported"),
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "      EGL_DRM_DEVICE_FILE_EXT: /dev/dri/card1\n      EGL_DRM_RENDER_NODE_FILE_EXT: \
         /dev/dri/renderD128\n      EGL_RENDERER_EXT: <failed>\n      EGL_VENDOR: Mesa\n"
    );
}
