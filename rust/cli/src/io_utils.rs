//! File input helpers shared by the commands.
//!
//! `read_text_auto` decompresses `.zst` files based on the file extension and
//! strips a leading UTF-8 byte order mark.

/// Read text file with automatic .zst decompression detection.
///
/// # Example
///
/// ```rust,no_run
/// # use fairverify_cli::io_utils::read_text_auto;
/// let content = read_text_auto("rounds.jsonl").unwrap();
/// let compressed = read_text_auto("rounds.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| format!("{}: {}", path, e))?;
        String::from_utf8(dec).map_err(|e| format!("{}: {}", path, e))?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
