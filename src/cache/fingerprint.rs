//! Cache indicator content
//!
//! The same function produces the indicator when it is written and the
//! expected value when it is checked, so the two must never diverge.
//! Manifest content is opaque: it is spliced in byte for byte, whatever
//! its encoding.

const DEFAULT_MANIFEST_NAME: &str = "Cartfile.resolved";

/// Fingerprint for the default `Cartfile.resolved` manifest name
pub fn compute_fingerprint(toolchain_version: &str, manifest_content: &[u8]) -> Vec<u8> {
    fingerprint_for(toolchain_version, DEFAULT_MANIFEST_NAME, manifest_content)
}

/// Fingerprint with an explicit manifest file name
pub fn fingerprint_for(toolchain_version: &str, manifest_name: &str, manifest_content: &[u8]) -> Vec<u8> {
    let head = format!(
        "--Swift version: {} --Swift version \n --{}: ",
        toolchain_version, manifest_name
    );
    let tail = format!(" --{}", manifest_name);

    let mut fingerprint = Vec::with_capacity(head.len() + manifest_content.len() + tail.len());
    fingerprint.extend_from_slice(head.as_bytes());
    fingerprint.extend_from_slice(manifest_content);
    fingerprint.extend_from_slice(tail.as_bytes());
    fingerprint
}
