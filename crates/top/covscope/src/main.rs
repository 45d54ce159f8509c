use clap::Parser as _;

fn main() -> anyhow::Result<()> {
    cs_log::setup_logging();

    let args = covscope::Args::parse();
    covscope::run(&args)
}
