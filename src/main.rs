//! The csv2xlsx command-line executable.

fn main() -> anyhow::Result<()> {
    csv2xlsx::run()
}
