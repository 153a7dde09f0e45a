use crate::paths::{ConfigError, FolioPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

// toml_edit para escribir preservando comentarios del usuario
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  /// Lee la sección `section`; `Ok(None)` si el archivo o la sección no existen.
  fn load_optional_section<T: DeserializeOwned>(&self, section: &str) -> Result<Option<T>, ConfigError>;

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;

  /// Como [`load_optional_section`](Self::load_optional_section) pero una
  /// sección ausente es un error.
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    self
      .load_optional_section(section)?
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}]")))
  }

  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    Ok(self.load_optional_section(section)?.unwrap_or_default())
  }
}

pub struct TomlConfigBackend {
  paths: FolioPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: FolioPaths) -> Self {
    Self { paths }
  }

  pub fn config_file(&self) -> PathBuf {
    self.paths.config_file()
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_optional_section<T: DeserializeOwned>(&self, section: &str) -> Result<Option<T>, ConfigError> {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    let root: toml::Table = toml::from_str(&content)?;
    let Some(value) = root.get(section) else {
      return Ok(None);
    };

    // Vale tanto para `[section]` como para `[[section]]`.
    let t: T = value
      .clone()
      .try_into()
      .map_err(|e| ConfigError::Other(format!("decode section [{section}] in {}: {e}", path.display())))?;

    Ok(Some(t))
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Leer la config actual o empezar con un documento vacío.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección sola: queda como "clave = valor" sin cabecera.
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    // 3) Convertirla en tabla de toml_edit.
    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;
    let section_item = Item::Table(section_doc.as_table().clone());

    // 4) Reemplazar sólo esa sección; el resto del documento queda intacto.
    doc[section] = section_item;

    // 5) Escritura atómica.
    folio_fs::atomic_write_str(&path, &doc.to_string())?;
    tracing::debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    #[serde(default)]
    count: u32,
  }

  fn backend(base: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(FolioPaths::at(base).unwrap())
  }

  #[test]
  fn missing_file_yields_default() {
    let tmp = tempdir().unwrap();
    let b = backend(tmp.path());

    let s: Sample = b.load_section_with_default("sample").unwrap();
    assert_eq!(s, Sample::default());
    assert!(b.load_section::<Sample>("sample").is_err());
  }

  #[test]
  fn save_preserves_comments_and_other_sections() {
    let tmp = tempdir().unwrap();
    let b = backend(tmp.path());
    fs::write(b.config_file(), "# mi portfolio\n[other]\nkeep = true\n").unwrap();

    b.save_section("sample", &Sample { name: "folio".into(), count: 3 }).unwrap();

    let written = fs::read_to_string(b.config_file()).unwrap();
    assert!(written.contains("# mi portfolio"));
    assert!(written.contains("keep = true"));

    let s: Sample = b.load_section("sample").unwrap();
    assert_eq!(s, Sample { name: "folio".into(), count: 3 });
  }

  #[test]
  fn decode_errors_name_the_section() {
    let tmp = tempdir().unwrap();
    let b = backend(tmp.path());
    fs::write(b.config_file(), "[sample]\ncount = \"many\"\n").unwrap();

    let err = b.load_section::<Sample>("sample").unwrap_err();
    assert!(err.to_string().contains("[sample]"));
  }
}
