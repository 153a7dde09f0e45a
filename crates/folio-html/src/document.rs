use folio_core::ports::{Matcher, RenderSurface};
use folio_core::view::Node;
use folio_core::view::escape::{escape_text, write_end_tag, write_start_tag};

/// Handle de un nodo dentro de un [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
  Element { tag: String, attrs: Vec<(String, String)> },
  Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
  kind: NodeKind,
  parent: Option<NodeId>,
  children: Vec<NodeId>,
}

/// Documento HTML en memoria.
///
/// Es un árbol en arena: los nodos se identifican por índice. Vaciar un
/// contenedor libera el subárbol entero y sus huecos se reutilizan en las
/// siguientes inserciones, así que el tamaño de la arena sigue al del
/// documento vivo. Un [`NodeId`] de un nodo liberado deja de ser válido.
#[derive(Debug, Clone)]
pub struct Document {
  nodes: Vec<NodeData>,
  free: Vec<NodeId>,
  root: NodeId,
  observed: Vec<NodeId>,
}

impl Default for Document {
  fn default() -> Self {
    Self::new()
  }
}

impl Document {
  /// Documento con un `<html>` vacío como raíz.
  pub fn new() -> Self {
    let root = NodeData {
      kind: NodeKind::Element { tag: "html".into(), attrs: Vec::new() },
      parent: None,
      children: Vec::new(),
    };
    Document { nodes: vec![root], free: Vec::new(), root: NodeId(0), observed: Vec::new() }
  }

  /// Construye el documento a partir de una vista cuyo nodo raíz es `<html>`.
  ///
  /// Los atributos de la vista raíz pasan al `<html>` del documento y sus
  /// hijos se montan debajo. Si la raíz no es un elemento `<html>` la vista
  /// entera se monta como hijo.
  pub fn from_view(view: &Node) -> Self {
    let mut doc = Document::new();
    let root = doc.root;
    match view.as_element() {
      Some(el) if el.tag() == "html" => {
        for (name, value) in el.attrs() {
          doc.set_attribute(&root, name, value);
        }
        for child in el.child_nodes() {
          doc.mount(root, child);
        }
      }
      _ => {
        doc.mount(root, view);
      }
    }
    doc
  }

  fn push(&mut self, kind: NodeKind, parent: NodeId) -> NodeId {
    let data = NodeData { kind, parent: Some(parent), children: Vec::new() };
    let id = match self.free.pop() {
      Some(id) => {
        self.nodes[id.0] = data;
        id
      }
      None => {
        self.nodes.push(data);
        NodeId(self.nodes.len() - 1)
      }
    };
    self.nodes[parent.0].children.push(id);
    id
  }

  /// Libera `id` y todos sus descendientes.
  fn release(&mut self, id: NodeId) {
    let mut stack = vec![id];
    while let Some(id) = stack.pop() {
      let slot = &mut self.nodes[id.0];
      stack.append(&mut slot.children);
      slot.parent = None;
      slot.kind = NodeKind::Text(String::new());
      self.observed.retain(|o| *o != id);
      self.free.push(id);
    }
  }

  fn mount(&mut self, parent: NodeId, view: &Node) -> NodeId {
    match view {
      Node::Text(t) => self.push(NodeKind::Text(t.clone()), parent),
      Node::Element(el) => {
        let id = self.push(NodeKind::Element { tag: el.tag().to_string(), attrs: el.attrs().to_vec() }, parent);
        for child in el.child_nodes() {
          self.mount(id, child);
        }
        id
      }
    }
  }

  fn node(&self, id: NodeId) -> &NodeData {
    &self.nodes[id.0]
  }

  // -------- Inspección --------

  pub fn root_id(&self) -> NodeId {
    self.root
  }

  pub fn tag(&self, id: NodeId) -> Option<&str> {
    match &self.node(id).kind {
      NodeKind::Element { tag, .. } => Some(tag),
      NodeKind::Text(_) => None,
    }
  }

  pub fn parent(&self, id: NodeId) -> Option<NodeId> {
    self.node(id).parent
  }

  pub fn children(&self, id: NodeId) -> &[NodeId] {
    &self.node(id).children
  }

  pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
    match &self.node(id).kind {
      NodeKind::Element { attrs, .. } => attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str()),
      NodeKind::Text(_) => None,
    }
  }

  pub fn text_content(&self, id: NodeId) -> String {
    let mut out = String::new();
    self.collect_text(id, &mut out);
    out
  }

  fn collect_text(&self, id: NodeId, out: &mut String) {
    match &self.node(id).kind {
      NodeKind::Text(t) => out.push_str(t),
      NodeKind::Element { .. } => {
        for child in &self.node(id).children {
          self.collect_text(*child, out);
        }
      }
    }
  }

  pub fn matches(&self, id: NodeId, matcher: Matcher<'_>) -> bool {
    let NodeKind::Element { tag, .. } = &self.node(id).kind else {
      return false;
    };
    match matcher {
      Matcher::Id(want) => self.attr(id, "id") == Some(want),
      Matcher::Class(want) => {
        self.attr(id, "class").is_some_and(|v| v.split_ascii_whitespace().any(|c| c == want))
      }
      Matcher::Tag(want) => tag == want,
      Matcher::Attr { name, value } => self.attr(id, name) == Some(value),
    }
  }

  /// Descendientes de `scope` (sin incluirlo) en orden de documento.
  fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
      out.push(id);
      stack.extend(self.children(id).iter().rev().copied());
    }
    out
  }

  /// Primer elemento del documento que cumple `matcher`.
  pub fn find(&self, matcher: Matcher<'_>) -> Option<NodeId> {
    self.query(&self.root, matcher)
  }

  pub fn find_all(&self, matcher: Matcher<'_>) -> Vec<NodeId> {
    self.query_all(&self.root, matcher)
  }

  /// `true` si el nodo sigue colgando de la raíz.
  pub fn is_attached(&self, id: NodeId) -> bool {
    let mut current = id;
    loop {
      if current == self.root {
        return true;
      }
      match self.parent(current) {
        Some(p) => current = p,
        None => return false,
      }
    }
  }

  /// Huecos ocupados en la arena, vivos o libres.
  pub fn arena_len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_observed(&self, id: NodeId) -> bool {
    self.observed.contains(&id)
  }

  /// Nodos con una observación de intersección activa.
  pub fn observed(&self) -> &[NodeId] {
    &self.observed
  }

  // -------- Serialización --------

  /// Documento completo, con `<!DOCTYPE html>`.
  pub fn to_html(&self) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    self.write_node(self.root, &mut out);
    out.push('\n');
    out
  }

  pub fn inner_html(&self, id: NodeId) -> String {
    let mut out = String::new();
    for child in self.children(id) {
      self.write_node(*child, &mut out);
    }
    out
  }

  fn write_node(&self, id: NodeId, out: &mut String) {
    let node = self.node(id);
    match &node.kind {
      NodeKind::Text(t) => out.push_str(&escape_text(t)),
      NodeKind::Element { tag, attrs } => {
        write_start_tag(out, tag, attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        for child in &node.children {
          self.write_node(*child, out);
        }
        write_end_tag(out, tag);
      }
    }
  }
}

impl RenderSurface for Document {
  type Handle = NodeId;

  fn root(&self) -> NodeId {
    self.root
  }

  fn query(&self, scope: &NodeId, matcher: Matcher<'_>) -> Option<NodeId> {
    self.descendants(*scope).into_iter().find(|id| self.matches(*id, matcher))
  }

  fn query_all(&self, scope: &NodeId, matcher: Matcher<'_>) -> Vec<NodeId> {
    self.descendants(*scope).into_iter().filter(|id| self.matches(*id, matcher)).collect()
  }

  fn closest(&self, from: &NodeId, matcher: Matcher<'_>) -> Option<NodeId> {
    let mut current = Some(*from);
    while let Some(id) = current {
      if self.matches(id, matcher) {
        return Some(id);
      }
      current = self.parent(id);
    }
    None
  }

  fn attribute(&self, at: &NodeId, name: &str) -> Option<String> {
    self.attr(*at, name).map(str::to_string)
  }

  fn set_attribute(&mut self, at: &NodeId, name: &str, value: &str) {
    if let NodeKind::Element { attrs, .. } = &mut self.nodes[at.0].kind {
      match attrs.iter_mut().find(|(k, _)| k == name) {
        Some(slot) => slot.1 = value.to_string(),
        None => attrs.push((name.to_string(), value.to_string())),
      }
    }
  }

  fn remove_attribute(&mut self, at: &NodeId, name: &str) {
    if let NodeKind::Element { attrs, .. } = &mut self.nodes[at.0].kind {
      attrs.retain(|(k, _)| k != name);
    }
  }

  fn set_text(&mut self, at: &NodeId, text: &str) {
    self.clear_children(at);
    if text.is_empty() {
      return;
    }
    self.push(NodeKind::Text(text.to_string()), *at);
  }

  fn clear_children(&mut self, at: &NodeId) {
    let children = std::mem::take(&mut self.nodes[at.0].children);
    for child in children {
      self.release(child);
    }
  }

  fn append_view(&mut self, parent: &NodeId, view: &Node) -> NodeId {
    self.mount(*parent, view)
  }

  fn observe_intersection(&mut self, at: &NodeId) {
    if !self.observed.contains(at) {
      self.observed.push(*at);
    }
  }

  fn unobserve_intersection(&mut self, at: &NodeId) {
    self.observed.retain(|id| id != at);
  }
}
