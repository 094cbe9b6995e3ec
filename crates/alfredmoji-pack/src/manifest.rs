//! Static pack assets: `info.plist` and `icon.png`.

use std::path::{Path, PathBuf};

pub const INFO_PLIST: &str = "info.plist";
pub const ICON: &str = "icon.png";

const DEFAULT_ICON: &[u8] = include_bytes!("../assets/icon.png");

/// Property list declaring the keyword prefix and suffix Alfred wraps
/// around every snippet keyword (`:grinning-face:` with the defaults).
pub fn info_plist(keyword_prefix: &str, keyword_suffix: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>snippetkeywordprefix</key>
    <string>{}</string>
    <key>snippetkeywordsuffix</key>
    <string>{}</string>
</dict>
</plist>"#,
        escape_xml(keyword_prefix),
        escape_xml(keyword_suffix),
    )
}

/// Write `info.plist` into `dir`.
pub fn write_info_plist(
    dir: &Path,
    keyword_prefix: &str,
    keyword_suffix: &str,
) -> std::io::Result<PathBuf> {
    let path = dir.join(INFO_PLIST);
    std::fs::write(&path, info_plist(keyword_prefix, keyword_suffix))?;
    Ok(path)
}

/// Write `icon.png` into `dir`: a copy of `custom` if given, otherwise the
/// built-in icon.
pub fn write_icon(dir: &Path, custom: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = dir.join(ICON);
    match custom {
        Some(src) => {
            std::fs::copy(src, &path)?;
        }
        None => std::fs::write(&path, DEFAULT_ICON)?,
    }
    Ok(path)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
