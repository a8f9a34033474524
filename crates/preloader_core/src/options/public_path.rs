const AUTO: &str = "auto";
const DEFAULT_PUBLIC_PATH: &str = "/";

/// Picks the public path used as the prefix of every preload `href`.
///
/// A path the HTML generator computed for the document is used verbatim. `""` there means hrefs
/// relative to the document. Otherwise the generator's `publicPath` option wins over
/// `output.publicPath`; missing, empty and `"auto"` values fall through and the result is
/// normalized.
pub fn resolve_public_path(
  document: Option<&str>,
  html_option: Option<&str>,
  output: Option<&str>,
) -> String {
  if let Some(document) = document {
    return document.to_string();
  }
  let public_path = explicit(html_option)
    .or_else(|| explicit(output))
    .unwrap_or(DEFAULT_PUBLIC_PATH);
  normalize_public_path(public_path)
}

fn explicit(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty() && *v != AUTO)
}

/// Makes sure the path ends with a single `/`.
pub fn normalize_public_path(public_path: &str) -> String {
  let mut normalized = public_path.trim_end_matches('/').to_string();
  normalized.push('/');
  normalized
}
