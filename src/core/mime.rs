// src/core/mime.rs

// Content-Type from file extension. Flash-era asset set; anything unknown
// goes out as a generic binary attachment.

use std::path::Path;

pub fn from_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("swf") => "application/x-shockwave-flash",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("txt") => "text/plain; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::from_path;
    use std::path::Path;

    #[test]
    fn knows_flash_assets() {
        assert_eq!(from_path(Path::new("mainD2.swf")), "application/x-shockwave-flash");
        assert_eq!(from_path(Path::new("scene01.mp3")), "audio/mpeg");
    }

    #[test]
    fn unknown_extension_is_binary() {
        assert_eq!(from_path(Path::new("data.bin")), "application/octet-stream");
        assert_eq!(from_path(Path::new("noext")), "application/octet-stream");
    }
}
