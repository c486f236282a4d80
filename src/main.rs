fn main() -> anyhow::Result<()> {
    gravity_trails::app::run()
}
