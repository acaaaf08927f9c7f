//! core::perms
//!
//! Permission queries and long-listing rendering for the pre-flight gate.
//!
//! # Design
//!
//! The gate asks the kernel whether the target tree is writable and
//! searchable (`access(2)` with `W_OK|X_OK`) instead of attempting a write.
//! When the answer is no, the failure message carries an `ls -ln`-shaped
//! rendering of the directory so the operator can see mode, ownership, size
//! and modification time without leaving the error output.
//!
//! On non-Unix targets the query degrades to "allowed"; the rename itself
//! still fails with a plain I/O error if permissions are truly insufficient.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};

/// Whether the running identity may create and remove entries in `dir`.
#[cfg(unix)]
pub fn can_write_and_search(dir: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let cpath = match CString::new(dir.as_os_str().as_bytes()) {
        Ok(c) => c,
        Err(_) => return false,
    };

    // SAFETY: cpath is a valid NUL-terminated C string for the duration of
    // the call; access(2) does not retain the pointer.
    unsafe { libc::access(cpath.as_ptr(), libc::W_OK | libc::X_OK) == 0 }
}

/// Non-Unix builds have no access(2); report allowed and let the rename
/// surface any real I/O error.
#[cfg(not(unix))]
pub fn can_write_and_search(_dir: &Path) -> bool {
    true
}

/// Render a mode word the way `ls -l` does: file type, then three rwx
/// triplets with setuid/setgid/sticky folded into the execute positions.
///
/// # Example
///
/// ```
/// use refoliate::core::perms::mode_string;
///
/// assert_eq!(mode_string(0o040755), "drwxr-xr-x");
/// assert_eq!(mode_string(0o100644), "-rw-r--r--");
/// ```
pub fn mode_string(mode: u32) -> String {
    let file_type = match mode & 0o170000 {
        0o140000 => 's',
        0o120000 => 'l',
        0o100000 => '-',
        0o060000 => 'b',
        0o040000 => 'd',
        0o020000 => 'c',
        0o010000 => 'p',
        _ => '?',
    };

    let mut out = String::with_capacity(10);
    out.push(file_type);
    out.push(if mode & 0o400 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o200 != 0 { 'w' } else { '-' });
    out.push(exec_char(mode & 0o100 != 0, mode & 0o4000 != 0, 's'));
    out.push(if mode & 0o040 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o020 != 0 { 'w' } else { '-' });
    out.push(exec_char(mode & 0o010 != 0, mode & 0o2000 != 0, 's'));
    out.push(if mode & 0o004 != 0 { 'r' } else { '-' });
    out.push(if mode & 0o002 != 0 { 'w' } else { '-' });
    out.push(exec_char(mode & 0o001 != 0, mode & 0o1000 != 0, 't'));
    out
}

/// The execute position shows the special bit (setuid/setgid/sticky) as a
/// letter: lowercase when execute is also set, uppercase when it is not.
fn exec_char(execute: bool, special: bool, letter: char) -> char {
    match (execute, special) {
        (true, false) => 'x',
        (false, false) => '-',
        (true, true) => letter,
        (false, true) => letter.to_ascii_uppercase(),
    }
}

/// Render one `ls -ln --time-style=long-iso`-shaped line for `path`:
/// mode, link count, uid, gid, size, modification time, path.
///
/// # Errors
///
/// Propagates the OS error if the path cannot be stat'ed.
#[cfg(unix)]
pub fn long_listing(path: &Path) -> io::Result<String> {
    use std::os::unix::fs::MetadataExt;

    let meta = fs::metadata(path)?;
    let modified: DateTime<Local> = meta.modified()?.into();

    Ok(format!(
        "{} {} {} {} {} {} {}",
        mode_string(meta.mode()),
        meta.nlink(),
        meta.uid(),
        meta.gid(),
        meta.size(),
        modified.format("%Y-%m-%d %H:%M"),
        path.display()
    ))
}

/// Reduced rendering for targets without Unix metadata.
#[cfg(not(unix))]
pub fn long_listing(path: &Path) -> io::Result<String> {
    let meta = fs::metadata(path)?;
    let modified: DateTime<Local> = meta.modified()?.into();

    Ok(format!(
        "{} {} {}",
        if meta.permissions().readonly() {
            "read-only"
        } else {
            "writable"
        },
        modified.format("%Y-%m-%d %H:%M"),
        path.display()
    ))
}
