fn main() -> anyhow::Result<()> {
  folio_lib::run()
}
