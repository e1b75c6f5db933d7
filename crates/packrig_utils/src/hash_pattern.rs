#[derive(Debug, PartialEq, Eq)]
pub struct HashPattern {
  /// The full placeholder as it appears in the template, e.g. `[hash:8]`.
  pub pattern: String,
  pub len: Option<usize>,
}

/// Finds the first `[<key>]` or `[<key>:N]` placeholder in a filename
/// template. `key` is `hash` or `contenthash`; the hash value itself is
/// produced by the consuming bundler, this layer only needs to know where the
/// placeholder sits and how many characters it asks for.
pub fn extract_hash_pattern(template: &str, key: &str) -> Option<HashPattern> {
  let open = format!("[{key}");
  let start = template.find(&open)?;
  let rest = &template[start + open.len()..];

  let (len, close_at) = match rest.as_bytes().first() {
    Some(b']') => (None, 0),
    Some(b':') => {
      let end = rest.find(']')?;
      let len = rest[1..end].parse::<usize>().ok()?;
      (Some(len), end)
    }
    _ => return None,
  };

  let pattern = &template[start..=start + open.len() + close_at];
  Some(HashPattern { pattern: pattern.to_string(), len })
}

#[test]
fn test_extract_hash_pattern() {
  assert_eq!(
    extract_hash_pattern("[name].[hash].bundle.js", "hash"),
    Some(HashPattern { pattern: "[hash]".to_string(), len: None })
  );
  assert_eq!(
    extract_hash_pattern("assets/[name]-[hash:12][extname]", "hash"),
    Some(HashPattern { pattern: "[hash:12]".to_string(), len: Some(12) })
  );
  assert_eq!(
    extract_hash_pattern("[name].[contenthash].min.css", "contenthash"),
    Some(HashPattern { pattern: "[contenthash]".to_string(), len: None })
  );
  // `[contenthash]` must not be picked up as a `[hash]` placeholder.
  assert_eq!(extract_hash_pattern("[name].[contenthash].min.css", "hash"), None);
  assert_eq!(extract_hash_pattern("[name].bundle.js", "hash"), None);
  assert_eq!(extract_hash_pattern("[name].[hash:x].js", "hash"), None);
}
