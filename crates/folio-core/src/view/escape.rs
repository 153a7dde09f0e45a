//! Escapado de contenido según el contexto del markup.
//!
//! Todo texto que termina en la página pasa por aquí: los nodos de la vista
//! guardan las cadenas tal cual y sólo se escapan al serializar.

use std::borrow::Cow;

/// Elementos HTML sin etiqueta de cierre.
pub const VOID_ELEMENTS: &[&str] = &["img", "meta", "link", "br", "hr", "input"];

/// Atributos cuyo valor es una URL y por tanto pasan por [`sanitize_url`].
const URL_ATTRIBUTES: &[&str] = &["href", "src"];

pub fn is_void(tag: &str) -> bool {
  VOID_ELEMENTS.contains(&tag)
}

/// Escapa texto que va entre etiquetas.
pub fn escape_text(s: &str) -> Cow<'_, str> {
  escape_with(s, |c| match c {
    '&' => Some("&amp;"),
    '<' => Some("&lt;"),
    '>' => Some("&gt;"),
    _ => None,
  })
}

/// Escapa el valor de un atributo entre comillas dobles.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
  escape_with(s, |c| match c {
    '&' => Some("&amp;"),
    '<' => Some("&lt;"),
    '>' => Some("&gt;"),
    '"' => Some("&quot;"),
    _ => None,
  })
}

fn escape_with(s: &str, replace: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
  if !s.chars().any(|c| replace(c).is_some()) {
    return Cow::Borrowed(s);
  }

  let mut out = String::with_capacity(s.len() + 8);
  for c in s.chars() {
    match replace(c) {
      Some(entity) => out.push_str(entity),
      None => out.push(c),
    }
  }
  Cow::Owned(out)
}

/// Neutraliza esquemas de URL ejecutables.
///
/// `javascript:`, `vbscript:` y `data:` (salvo `data:image/...`) se sustituyen
/// por `#`. El resto de valores se devuelve sin tocar: no se valida que la URL
/// esté bien formada.
pub fn sanitize_url(url: &str) -> &str {
  // Los navegadores ignoran espacios y caracteres de control dentro del esquema.
  let normalized: String = url
    .chars()
    .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
    .take(16)
    .collect::<String>()
    .to_ascii_lowercase();

  let blocked = normalized.starts_with("javascript:")
    || normalized.starts_with("vbscript:")
    || (normalized.starts_with("data:") && !normalized.starts_with("data:image/"));

  if blocked { "#" } else { url }
}

/// Escribe `<tag a="b" ...>` en `out`, escapando nombres y valores.
pub fn write_start_tag<'a, I>(out: &mut String, tag: &str, attrs: I)
where
  I: IntoIterator<Item = (&'a str, &'a str)>,
{
  out.push('<');
  out.push_str(tag);
  for (name, value) in attrs {
    let value = if URL_ATTRIBUTES.contains(&name) { sanitize_url(value) } else { value };
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
  }
  out.push('>');
}

pub fn write_end_tag(out: &mut String, tag: &str) {
  if !is_void(tag) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
  }
}
