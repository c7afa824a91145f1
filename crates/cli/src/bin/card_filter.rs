use anyhow::Result;

fn main() -> Result<()> {
    cardfilter_cli::main_entry()
}
