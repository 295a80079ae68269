use rastergrid::cli::{self, Args, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    match args.command {
        Command::Resize(resize_args) => {
            cli::resize(&resize_args)?;
            println!("Saved to {}", resize_args.output_path.display());
        }
    }

    Ok(())
}
