//! Path existence checking.

use crate::report::{ReportEvent, Reporter};
use std::path::Path;

/// Reports whether `display_path`, resolved against `root`, exists on disk.
///
/// A file or a directory both count as existing. An empty path names no
/// file and counts as missing. Absence is a normal negative result, not an
/// error. Emits exactly one `Found`/`Missing` report line either way; the
/// line shows the path as it was named, not the resolved form.
pub fn check_path_exists<R: Reporter>(reporter: &mut R, root: &Path, display_path: &str) -> bool {
    // Joining "" resolves to `root` itself; an empty path names no file.
    let exists = !display_path.is_empty() && root.join(display_path).exists();
    if exists {
        reporter.report(ReportEvent::Found {
            path: display_path.to_string(),
        });
    } else {
        reporter.report(ReportEvent::Missing {
            path: display_path.to_string(),
        });
    }
    exists
}
