use std::borrow::Cow;

/// Replaces every character that could upset a filesystem or URL with `_`.
/// Borrows when the input is already clean, which is the common case for
/// entry names like `main`.
pub fn sanitize_file_name(name: &str) -> Cow<str> {
  if name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_')) {
    return Cow::Borrowed(name);
  }

  let mut sanitized = String::with_capacity(name.len());
  for char in name.chars() {
    if char.is_ascii_alphanumeric() || matches!(char, '-' | '_') {
      sanitized.push(char);
    } else {
      sanitized.push('_');
    }
  }
  Cow::Owned(sanitized)
}

#[test]
fn test_sanitize_file_name() {
  assert!(matches!(sanitize_file_name("main"), Cow::Borrowed("main")));
  assert_eq!(sanitize_file_name("\0+a=Z_0-"), "__a_Z_0-");
  assert_eq!(sanitize_file_name("admin panel"), "admin_panel");
}
