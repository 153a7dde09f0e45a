use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe `contents` en `path` sin dejar nunca un archivo a medias.
///
/// Se escribe primero en `<path>.tmp` y después se renombra encima del destino.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

/// Como [`atomic_write_str`], creando antes los directorios que falten.
pub fn atomic_write_creating_dirs(path: &Path, contents: &str) -> io::Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)?;
  }
  atomic_write_str(path, contents)
}
