/// Returns `true` only for `200 OK`.
///
/// Other 2xx codes are not accepted: the archive serves documents with a
/// plain 200 and anything else means the document is not there.
///
/// ```
/// use bolyai_fetch::is_success;
///
/// assert!(is_success(200));
/// assert!(!is_success(204));
/// assert!(!is_success(404));
/// ```
pub fn is_success(status: u16) -> bool { status == 200 }
