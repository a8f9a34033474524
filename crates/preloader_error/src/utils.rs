/// `"a"`, `"a" and "b"`, `"a", "b" and "c"`.
pub fn format_quoted_strings(list: &[impl AsRef<str>]) -> String {
  let mut quoted = list
    .iter()
    .map(|item| format!("\"{}\"", item.as_ref()))
    .collect::<Vec<_>>();
  match quoted.pop() {
    Some(last) if !quoted.is_empty() => format!("{} and {last}", quoted.join(", ")),
    Some(last) => last,
    None => String::new(),
  }
}
