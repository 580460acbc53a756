//! Best-effort plain-text extraction from uploaded documents (brag sheets,
//! scholarship flyers). PDFs go through a real extractor first and fall
//! back to a printable-byte scrape; everything else is read as text.

const MAX_EXTRACT_CHARS: usize = 15_000;
const MIN_USEFUL_CHARS: usize = 100;
const MIN_RUN_LEN: usize = 4;
const BANNER_RUN_LIMIT: usize = 200;

/// Error raised when a document yields no text at all.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no readable text found in '{0}'")]
    NoText(String),
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space && !out.is_empty() {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

fn truncate_chars(text: String, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((index, _)) => text[..index].to_string(),
        None => text,
    }
}

/// Runs of printable ASCII inside otherwise binary data. PDFs keep enough
/// of their text streams uncompressed for this to salvage something when
/// real extraction fails.
fn printable_runs(bytes: &[u8]) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for &byte in bytes {
        if (0x20..=0x7e).contains(&byte) {
            current.push(byte as char);
        } else {
            if current.len() >= MIN_RUN_LEN {
                runs.push(std::mem::take(&mut current));
            }
            current.clear();
        }
    }
    if current.len() >= MIN_RUN_LEN {
        runs.push(current);
    }
    runs
}

fn scrape_pdf(file_name: &str, bytes: &[u8]) -> Option<String> {
    let runs = printable_runs(bytes);
    let cleaned = truncate_chars(collapse_whitespace(&runs.join(" ")), MAX_EXTRACT_CHARS);
    if cleaned.len() > MIN_USEFUL_CHARS {
        return Some(cleaned);
    }
    if runs.is_empty() {
        return None;
    }
    let fragments: Vec<&str> = runs
        .iter()
        .take(BANNER_RUN_LIMIT)
        .map(String::as_str)
        .collect();
    Some(format!(
        "[PDF DOCUMENT]\nFilename: {file_name}\nRaw text fragments:\n{}",
        fragments.join("\n")
    ))
}

/// Extract best-effort plain text from an uploaded document.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let is_pdf = file_name.to_lowercase().ends_with(".pdf");

    if is_pdf {
        if let Ok(text) = pdf_extract::extract_text_from_mem(bytes) {
            let cleaned = truncate_chars(collapse_whitespace(&text), MAX_EXTRACT_CHARS);
            if cleaned.len() > MIN_USEFUL_CHARS {
                return Ok(cleaned);
            }
        }
        return scrape_pdf(file_name, bytes).ok_or_else(|| ExtractError::NoText(file_name.to_string()));
    }

    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::NoText(file_name.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_files_pass_through() {
        let text = extract_text("brag.txt", b"  Captain of the debate team.\n")
            .expect("text extracted");
        assert_eq!(text, "Captain of the debate team.");
    }

    #[test]
    fn empty_text_file_is_an_error() {
        let err = extract_text("empty.txt", b"   \n").expect_err("nothing to extract");
        assert!(matches!(err, ExtractError::NoText(name) if name == "empty.txt"));
    }

    #[test]
    fn malformed_pdf_falls_back_to_printable_scrape() {
        let mut bytes = b"%PDF-1.4\x00\x01\x02".to_vec();
        bytes.extend_from_slice(b"Scholarship flyer: open to graduating seniors with ");
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"a 3.0 GPA and strong community service records in the region.");

        let text = extract_text("flyer.pdf", &bytes).expect("scrape succeeds");
        assert!(text.contains("Scholarship flyer"));
        assert!(text.contains("community service"));
    }

    #[test]
    fn thin_pdf_content_gets_the_banner() {
        let bytes = b"%PDF-1.4\x00\x01short run\x00";
        let text = extract_text("thin.pdf", bytes).expect("banner produced");
        assert!(text.starts_with("[PDF DOCUMENT]\nFilename: thin.pdf"));
        assert!(text.contains("short run"));
    }

    #[test]
    fn binary_pdf_with_no_text_is_an_error() {
        let bytes = [0u8, 1, 2, 3, 255, 254, 0, 7];
        let err = extract_text("scan.pdf", &bytes).expect_err("nothing to extract");
        assert!(matches!(err, ExtractError::NoText(_)));
    }

    #[test]
    fn long_content_is_capped() {
        let long = "words ".repeat(5_000);
        let text = extract_text("long.txt", long.as_bytes()).expect("text extracted");
        assert!(text.chars().count() <= 30_000);

        let mut pdf = b"%PDF-1.4\x00".to_vec();
        pdf.extend_from_slice(long.as_bytes());
        let text = extract_text("long.pdf", &pdf).expect("scrape succeeds");
        assert!(text.chars().count() <= MAX_EXTRACT_CHARS);
    }
}
