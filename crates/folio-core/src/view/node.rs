use super::escape::{escape_text, write_end_tag, write_start_tag};

/// Nodo de una vista estructurada.
///
/// Las vistas se construyen como árbol y no como cadenas de HTML: el texto y
/// los atributos se guardan sin escapar y el escapado ocurre una sola vez, al
/// serializar o al montarlas en una [`RenderSurface`](crate::ports::RenderSurface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String),
}

impl Node {
  /// Concatenación del texto de todos los descendientes.
  pub fn text_content(&self) -> String {
    let mut out = String::new();
    self.collect_text(&mut out);
    out
  }

  fn collect_text(&self, out: &mut String) {
    match self {
      Node::Text(t) => out.push_str(t),
      Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
    }
  }

  pub fn as_element(&self) -> Option<&Element> {
    match self {
      Node::Element(el) => Some(el),
      Node::Text(_) => None,
    }
  }

  /// Serializa el nodo a HTML.
  pub fn to_html(&self) -> String {
    let mut out = String::new();
    self.write_html(&mut out);
    out
  }

  pub fn write_html(&self, out: &mut String) {
    match self {
      Node::Text(t) => out.push_str(&escape_text(t)),
      Node::Element(el) => {
        write_start_tag(out, &el.tag, el.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        for child in &el.children {
          child.write_html(out);
        }
        write_end_tag(out, &el.tag);
      }
    }
  }
}

impl From<Element> for Node {
  fn from(el: Element) -> Self {
    Node::Element(el)
  }
}

/// Elemento con etiqueta, atributos (en orden de inserción) e hijos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  tag: String,
  attrs: Vec<(String, String)>,
  children: Vec<Node>,
}

impl Element {
  pub fn new(tag: &str) -> Self {
    Element { tag: tag.to_string(), attrs: Vec::new(), children: Vec::new() }
  }

  /// Fija un atributo. Si ya existía se reemplaza su valor.
  pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
    let value = value.into();
    match self.attrs.iter_mut().find(|(k, _)| k == name) {
      Some(slot) => slot.1 = value,
      None => self.attrs.push((name.to_string(), value)),
    }
    self
  }

  pub fn class(self, value: &str) -> Self {
    self.attr("class", value)
  }

  pub fn text(self, text: impl Into<String>) -> Self {
    self.child(Node::Text(text.into()))
  }

  pub fn child(mut self, node: impl Into<Node>) -> Self {
    self.children.push(node.into());
    self
  }

  pub fn children<I>(mut self, nodes: I) -> Self
  where
    I: IntoIterator<Item = Node>,
  {
    self.children.extend(nodes);
    self
  }

  pub fn tag(&self) -> &str {
    &self.tag
  }

  pub fn attrs(&self) -> &[(String, String)] {
    &self.attrs
  }

  pub fn get_attr(&self, name: &str) -> Option<&str> {
    self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
  }

  pub fn child_nodes(&self) -> &[Node] {
    &self.children
  }

  /// Busca en profundidad el primer descendiente con la clase dada.
  pub fn find_by_class(&self, class: &str) -> Option<&Element> {
    self.children.iter().filter_map(Node::as_element).find_map(|el| {
      if el.has_class(class) { Some(el) } else { el.find_by_class(class) }
    })
  }

  /// Todos los descendientes con etiqueta `tag`, en orden de documento.
  pub fn find_all_by_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
    for el in self.children.iter().filter_map(Node::as_element) {
      if el.tag == tag {
        out.push(el);
      }
      el.find_all_by_tag(tag, out);
    }
  }

  pub fn has_class(&self, class: &str) -> bool {
    self.get_attr("class").is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
  }
}
