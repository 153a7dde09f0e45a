use tracing_subscriber::EnvFilter;

/// Inicializa el subscriber global. `RUST_LOG` tiene prioridad sobre `-v`.
pub fn init(verbose: bool) {
  let default = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  // Puede fallar si otro subscriber ya está instalado (tests); no es fatal.
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init();
}
