use log::info;

use crate::error::Error;

use super::fragment::Fragment;

const DEFAULT_HEIGHT: &str = "60vh";
const DEFAULT_WIDTH: &str = "70vw";
const HEIGHT_PAD_PX: f64 = 20.0;
const WIDTH_PAD_PX: f64 = 10.0;

/// Read access to files named by `{{path}}` includes.
pub trait ExternalFiles: Send + Sync {
    /// Contents of `path`, or `None` if it cannot be read.
    fn read_to_string(&self, path: &str) -> Option<String>;
}

/// Treats every include as unreadable, so HTML includes get default sizes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExternalFiles;

impl ExternalFiles for NoExternalFiles {
    fn read_to_string(&self, _path: &str) -> Option<String> {
        None
    }
}

/// Renders an include as an image or an iframe, by extension.
pub fn include(path: &str, files: &dyn ExternalFiles) -> Result<Fragment, Error> {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "png" | "jpg" | "jpeg" | "svg" => Ok(Fragment::element(
            "",
            &format!("<img src='{path}' width='90%' style='margin: 20px; display: inline-block;'>"),
            "",
            "",
        )),
        "html" => {
            let style = match files.read_to_string(path) {
                Some(contents) => {
                    let style = iframe_style(&contents);
                    info!("sizing included {path} with {style:?}");
                    style
                }
                None => default_style(),
            };
            Ok(Fragment::element(
                "",
                &format!("<iframe src='{path}' frameBorder='0' style='{style}'>"),
                "",
                "</iframe>",
            ))
        }
        _ => Err(Error::UnsupportedExtension { extension }),
    }
}

fn default_style() -> String {
    format!("height: {DEFAULT_HEIGHT}; width: {DEFAULT_WIDTH};")
}

/// Derives an iframe size from the first `<div style="...">` of a page.
///
/// Pixel sizes are padded so the frame does not need scrollbars; anything
/// else falls back to the defaults.
pub fn iframe_style(contents: &str) -> String {
    let declared = first_div_style(contents).unwrap_or_default();
    let height = declared_px(declared, "height:", HEIGHT_PAD_PX)
        .unwrap_or_else(|| DEFAULT_HEIGHT.to_string());
    let width = declared_px(declared, "width:", WIDTH_PAD_PX)
        .unwrap_or_else(|| DEFAULT_WIDTH.to_string());
    format!("height: {height}; width: {width};")
}

fn first_div_style(contents: &str) -> Option<&str> {
    let div = &contents[contents.find("<div")?..];
    let style = &div[div.find("style=")?..];
    let style = match style.find("class=") {
        Some(end) => &style[..end],
        None => style,
    };
    let open = style.find('"')? + 1;
    let inner = &style[open..];
    Some(&inner[..inner.find('"')?])
}

fn declared_px(style: &str, property: &str, pad: f64) -> Option<String> {
    let start = style.find(property)? + property.len();
    let value = &style[start..];
    let value = value[..value.find(';')?].trim();
    let px: f64 = value.strip_suffix("px")?.trim().parse().ok()?;
    Some(format!("{}px", px + pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OneFile(&'static str);

    impl ExternalFiles for OneFile {
        fn read_to_string(&self, _path: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn images_render_img_tags() {
        let f = include("plot.PNG", &NoExternalFiles).unwrap();
        assert!(f.html.starts_with("<img src='plot.PNG'"));
    }

    #[test]
    fn unreadable_html_gets_default_size() {
        let f = include("plot.html", &NoExternalFiles).unwrap();
        assert_eq!(
            f.html,
            "<iframe src='plot.html' frameBorder='0' style='height: 60vh; width: 70vw;'></iframe>"
        );
    }

    #[test]
    fn pixel_sizes_are_padded() {
        let page = r#"<html><div id="x" style="height:300px; width: 500px;" class="plot"></div>"#;
        assert_eq!(iframe_style(page), "height: 320px; width: 510px;");
        let f = include("p.html", &OneFile(page)).unwrap();
        assert!(f.html.contains("style='height: 320px; width: 510px;'"));
    }

    #[test]
    fn relative_sizes_fall_back_to_defaults() {
        let page = r#"<div style="height: 100%; width: 50vw;">"#;
        assert_eq!(iframe_style(page), "height: 60vh; width: 70vw;");
        assert_eq!(iframe_style("no divs here"), "height: 60vh; width: 70vw;");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = include("notes.docx", &NoExternalFiles).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedExtension {
                extension: "docx".into()
            }
        );
    }
}
