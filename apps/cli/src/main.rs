fn main() -> anyhow::Result<()> {
    sixpence_cli::run()
}
