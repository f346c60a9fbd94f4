use regex::bytes::Regex;

/// Finds the RMC telemetry sentence inside a subtitle payload.
///
/// Dashcams interleave NMEA sentences with plain caption text, so a payload
/// without a sentence is routine and yields `None`. Both GPS-only ("GP") and
/// multi-constellation ("GN") talkers are accepted. The compiled pattern is
/// owned by the extractor for the whole run.
pub struct SentenceExtractor {
    pattern: Regex,
}

impl SentenceExtractor {
    pub fn new() -> Self {
        Self {
            // Capture runs from after the sentence identifier up to the
            // checksum or an embedded terminator. (?-u) keeps matching
            // byte-wise since payloads are not guaranteed to be UTF-8.
            pattern: Regex::new(r"(?-u)\$G[NP]RMC,([^;*]+)").expect("RMC pattern must compile"),
        }
    }

    /// Return the comma-separated field body of the first RMC sentence in
    /// `payload`, or `None` when the payload carries no telemetry.
    pub fn extract(&self, payload: &[u8]) -> Option<String> {
        let captures = self.pattern.captures(payload)?;
        let body = captures.get(1)?;
        Some(String::from_utf8_lossy(body.as_bytes()).into_owned())
    }
}

impl Default for SentenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
