// SPDX-License-Identifier: MIT

//! Helpers for packaging source archives for remote execution

/// Decide whether an archive entry belongs in the distributed package.
///
/// Compiled bytecode, cache directories, and anything under a
/// dot-prefixed cache path stay out; everything else goes in.
pub fn filter_archive_entry(name: &str) -> bool {
    if name.ends_with(".pyc") {
        return false;
    }
    if name.starts_with(".cache") {
        return false;
    }
    if name.contains("__pycache__") {
        return false;
    }
    true
}

/// Join a remote storage location and a content-addressed identifier into
/// the full distribution path. A single trailing slash on the location is
/// not duplicated.
pub fn distribution_location(location: &str, identifier: &str) -> String {
    let location = location.strip_suffix('/').unwrap_or(location);
    format!("{location}/{identifier}.tar.gz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_source_files() {
        assert!(filter_archive_entry("foo.py"));
        assert!(filter_archive_entry("pkg/module.py"));
        assert!(filter_archive_entry("README.md"));
    }

    #[test]
    fn test_filter_rejects_bytecode() {
        assert!(!filter_archive_entry("foo.pyc"));
        assert!(!filter_archive_entry("pkg/module.pyc"));
    }

    #[test]
    fn test_filter_rejects_cache_entries() {
        assert!(!filter_archive_entry(".cache/foo"));
        assert!(!filter_archive_entry("__pycache__"));
        assert!(!filter_archive_entry("pkg/__pycache__/module.pyc"));
    }

    #[test]
    fn test_distribution_location() {
        assert_eq!(
            distribution_location("s3://my-s3-bucket/dir", "123abc"),
            "s3://my-s3-bucket/dir/123abc.tar.gz"
        );
    }

    #[test]
    fn test_distribution_location_trailing_slash() {
        assert_eq!(
            distribution_location("s3://my-s3-bucket/dir/", "123abc"),
            "s3://my-s3-bucket/dir/123abc.tar.gz"
        );
    }
}
