/// Filesystem helpers shared by the scaffolding steps.
pub mod fs {
    use std::fs;
    use std::io;
    use std::path::Path;

    /// Permission bits of a unix mode, without the file type bits.
    pub const PERMISSION_BITS: u32 = 0o7777;

    /// Ensure a directory exists, creating it recursively if needed.
    pub fn ensure_dir(path: &Path) -> io::Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Apply the permission bits of `mode` to `path`.
    #[cfg(unix)]
    pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(mode & PERMISSION_BITS))
    }

    #[cfg(not(unix))]
    pub fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
        Ok(())
    }
}

/// Literal byte-sequence helpers.
pub mod bytes {
    /// Replace every non-overlapping occurrence of `needle`, scanning left to right.
    ///
    /// An empty needle leaves the input untouched.
    pub fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
        if needle.is_empty() {
            return haystack.to_vec();
        }

        let mut out = Vec::with_capacity(haystack.len());
        let mut rest = haystack;
        while let Some(pos) = find(rest, needle) {
            out.extend_from_slice(&rest[..pos]);
            out.extend_from_slice(replacement);
            rest = &rest[pos + needle.len()..];
        }
        out.extend_from_slice(rest);
        out
    }

    #[cfg(test)]
    pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        !needle.is_empty() && find(haystack, needle).is_some()
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }
}
